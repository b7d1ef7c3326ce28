//! Handler types and dependencies

use std::sync::Arc;

use crate::elastic::ElasticGateway;
use crate::gastos::GastosGateway;
use crate::session::SessionFlags;
use crate::storage::LocationStore;

/// Error type for handlers
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Dependencies required by handlers
#[derive(Clone)]
pub struct HandlerDeps {
    pub store: Arc<dyn LocationStore>,
    pub session: Arc<SessionFlags>,
    pub gastos: Arc<GastosGateway>,
    pub elastic: Arc<ElasticGateway>,
}

impl HandlerDeps {
    /// Create new handler dependencies
    pub fn new(
        store: Arc<dyn LocationStore>,
        session: Arc<SessionFlags>,
        gastos: Arc<GastosGateway>,
        elastic: Arc<ElasticGateway>,
    ) -> Self {
        Self {
            store,
            session,
            gastos,
            elastic,
        }
    }
}
