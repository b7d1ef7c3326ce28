//! Gateway to the gastos-operativos web service
//!
//! After a form location lands in Postgres the coordinate is pushed to the
//! service's webhook so it can be attached to the last pending expense
//! record. One attempt, fixed timeout; anything past the budget is left to
//! the service's cron sync.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;

use crate::config;

/// Reply text used when the service rejects without an `error` field
const DEFAULT_REJECT_ERROR: &str = "No se pudo asociar al formulario";

/// Wire payload of the coordinates webhook.
/// The service expects telegram_id as a string.
#[derive(Debug, Serialize)]
struct CoordinatesPayload {
    telegram_id: String,
    lat: f64,
    lon: f64,
}

/// Outcome of one webhook attempt.
///
/// Every case the call can end in, as a value. The handler maps each variant
/// to its reply text; none of them is fatal to the form branch.
#[derive(Debug, Clone, PartialEq)]
pub enum WebhookOutcome {
    /// HTTP 200; `records_updated` from the response body (0 when absent)
    Updated { records_updated: u64 },
    /// Non-200 response with the upstream error and optional hint
    Rejected { error: String, hint: Option<String> },
    /// The call exceeded the timeout budget
    TimedOut,
    /// Transport failure, unreadable body, or similar
    Failed(String),
}

/// HTTP client for the gastos-operativos service
pub struct GastosGateway {
    base_url: String,
    timeout: Duration,
}

impl GastosGateway {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        }
    }

    /// Gateway configured from GASTOS_BASE_URL
    pub fn from_env() -> Self {
        Self::new(config::GASTOS_BASE_URL.clone(), config::webhook::timeout())
    }

    /// Push a coordinate to `/api/actualizar-coordenadas`.
    ///
    /// Single attempt with a fresh client per call. Never returns an error:
    /// every failure mode collapses into a `WebhookOutcome` variant.
    pub async fn push_coordinates(&self, telegram_id: i64, lat: f64, lon: f64) -> WebhookOutcome {
        let client = match reqwest::Client::builder().timeout(self.timeout).build() {
            Ok(client) => client,
            Err(e) => return WebhookOutcome::Failed(e.to_string()),
        };

        let url = format!("{}/api/actualizar-coordenadas", self.base_url);
        log::info!("Llamando webhook: {}", url);

        let payload = CoordinatesPayload {
            telegram_id: telegram_id.to_string(),
            lat,
            lon,
        };

        let response = match client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .json(&payload)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) if e.is_timeout() => {
                log::error!("Timeout llamando webhook");
                return WebhookOutcome::TimedOut;
            }
            Err(e) => {
                log::error!("Error llamando webhook: {}", e);
                return WebhookOutcome::Failed(e.to_string());
            }
        };

        let status = response.status();
        if status == StatusCode::OK {
            // The client timeout also covers the body read
            let body: Value = match response.json().await {
                Ok(body) => body,
                Err(e) if e.is_timeout() => {
                    log::error!("Timeout llamando webhook");
                    return WebhookOutcome::TimedOut;
                }
                Err(e) => {
                    log::error!("Error llamando webhook: {}", e);
                    return WebhookOutcome::Failed(e.to_string());
                }
            };
            log::info!("✅ Coordenadas enviadas al servicio de gastos: {}", body);
            let records_updated = body
                .get("data")
                .and_then(|data| data.get("records_updated"))
                .and_then(Value::as_u64)
                .unwrap_or(0);
            return WebhookOutcome::Updated { records_updated };
        }

        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.starts_with("application/json"))
            .unwrap_or(false);

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) if e.is_timeout() => {
                log::error!("Timeout llamando webhook");
                return WebhookOutcome::TimedOut;
            }
            Err(e) => return WebhookOutcome::Failed(e.to_string()),
        };
        log::warn!("⚠️ Error del webhook ({}): {}", status, body);

        if is_json {
            if let Ok(value) = serde_json::from_str::<Value>(&body) {
                let error = value
                    .get("error")
                    .and_then(Value::as_str)
                    .unwrap_or(DEFAULT_REJECT_ERROR)
                    .to_string();
                let hint = value.get("hint").and_then(Value::as_str).map(str::to_string);
                return WebhookOutcome::Rejected { error, hint };
            }
        }

        // Non-JSON rejection: surface the raw body when it says anything
        let trimmed = body.trim();
        let error = if trimmed.is_empty() {
            DEFAULT_REJECT_ERROR.to_string()
        } else {
            trimmed.to_string()
        };
        WebhookOutcome::Rejected { error, hint: None }
    }
}
