//! Search-index synchronization
//!
//! Two distinct calls, both best-effort from the handler's point of view:
//!
//! - `sync_gastos_window`: asks the gastos-operativos service to re-index
//!   the caller's expense rows from the last N minutes (the service owns the
//!   document shape). Likely redundant with the webhook's own indexing, kept
//!   because the cron path relies on it when the webhook degraded.
//! - `index_driver_location`: writes a driver-location document straight
//!   into the Elasticsearch index.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::json;

use crate::config;
use crate::core::error::{AppError, AppResult};

/// Wire payload of the /api/elastic sync endpoint
#[derive(Debug, Serialize)]
struct SyncWindowPayload {
    telegram_id: i64,
    minutes: u32,
}

/// Gateway to the indexing pipeline
pub struct ElasticGateway {
    /// Base URL of the gastos-operativos service (hosts /api/elastic)
    sync_base_url: String,
    /// Elasticsearch node for direct indexing, when configured
    node: Option<String>,
    index: String,
    api_key: Option<String>,
    username: Option<String>,
    password: Option<String>,
    client: reqwest::Client,
}

impl ElasticGateway {
    pub fn new(sync_base_url: impl Into<String>, node: Option<String>, index: impl Into<String>) -> AppResult<Self> {
        Ok(Self {
            sync_base_url: sync_base_url.into().trim_end_matches('/').to_string(),
            node: node.map(|n| n.trim_end_matches('/').to_string()),
            index: index.into(),
            api_key: None,
            username: None,
            password: None,
            client: reqwest::Client::builder()
                .timeout(config::elastic_sync::timeout())
                .build()?,
        })
    }

    /// Gateway configured from the ELASTICSEARCH_* / GASTOS_BASE_URL env vars
    pub fn from_env() -> AppResult<Self> {
        let mut gateway = Self::new(
            config::GASTOS_BASE_URL.clone(),
            config::ELASTICSEARCH_URL.clone(),
            config::ELASTICSEARCH_INDEX.clone(),
        )?;
        gateway.api_key = config::ELASTICSEARCH_API_KEY.clone();
        gateway.username = config::ELASTICSEARCH_USERNAME.clone();
        gateway.password = config::ELASTICSEARCH_PASSWORD.clone();
        Ok(gateway)
    }

    /// Ask the gastos service to re-index this user's located expense rows
    /// from the last `minutes` minutes
    pub async fn sync_gastos_window(&self, telegram_id: i64, minutes: u32) -> AppResult<()> {
        let url = format!("{}/api/elastic", self.sync_base_url);
        let response = self
            .client
            .post(&url)
            .json(&SyncWindowPayload { telegram_id, minutes })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::HttpStatus(status));
        }
        Ok(())
    }

    /// Index one driver-location document directly into Elasticsearch
    pub async fn index_driver_location(
        &self,
        telegram_id: i64,
        lat: f64,
        lon: f64,
        ts: DateTime<Utc>,
    ) -> AppResult<()> {
        let node = self
            .node
            .as_deref()
            .ok_or_else(|| AppError::Config("ELASTICSEARCH_URL not set".to_string()))?;

        let url = format!("{}/{}/_doc", node, self.index);
        let document = json!({
            "telegram_id": telegram_id,
            "location": { "lat": lat, "lon": lon },
            "location_ts": ts.to_rfc3339_opts(SecondsFormat::Secs, true),
        });

        let mut request = self.client.post(&url).json(&document);
        if let Some(ref key) = self.api_key {
            request = request.header("Authorization", format!("ApiKey {}", key));
        } else if let (Some(user), Some(pass)) = (self.username.as_deref(), self.password.as_deref()) {
            request = request.basic_auth(user, Some(pass));
        }

        let status = request.send().await?.status();
        if !status.is_success() {
            return Err(AppError::HttpStatus(status));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn sync_window_posts_id_and_minutes() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/elastic"))
            .and(body_json(serde_json::json!({ "telegram_id": 777, "minutes": 60 })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "ok": true, "indexed": 2 })))
            .expect(1)
            .mount(&server)
            .await;

        let gateway = ElasticGateway::new(server.uri(), None, "ubicacion_conductor").unwrap();
        gateway.sync_gastos_window(777, 60).await.unwrap();
    }

    #[tokio::test]
    async fn sync_window_surfaces_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/elastic"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let gateway = ElasticGateway::new(server.uri(), None, "ubicacion_conductor").unwrap();
        let err = gateway.sync_gastos_window(1, 60).await.unwrap_err();
        assert!(matches!(err, AppError::HttpStatus(status) if status.as_u16() == 500));
    }

    #[tokio::test]
    async fn driver_document_lands_in_the_index() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/ubicacion_conductor/_doc"))
            .and(body_json(serde_json::json!({
                "telegram_id": 777,
                "location": { "lat": 4.6097, "lon": -74.0817 },
                "location_ts": "2025-06-01T12:00:00Z",
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({ "result": "created" })))
            .expect(1)
            .mount(&server)
            .await;

        let gateway = ElasticGateway::new("http://unused", Some(server.uri()), "ubicacion_conductor").unwrap();
        let ts = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        gateway.index_driver_location(777, 4.6097, -74.0817, ts).await.unwrap();
    }

    #[tokio::test]
    async fn missing_node_is_a_config_error() {
        let gateway = ElasticGateway::new("http://unused", None, "ubicacion_conductor").unwrap();
        let err = gateway
            .index_driver_location(1, 0.0, 0.0, Utc::now())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
