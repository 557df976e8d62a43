//! Shared application state injected into handlers.

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::application::services::LinkService;
use crate::infrastructure::persistence::SqliteLinkRepository;
use crate::metrics::MetricsCollector;

#[derive(Clone)]
pub struct AppState {
    /// Raw pool handle, used by the health check for its own probes
    /// (independent of the link service by design).
    pub db: SqlitePool,
    pub link_service: Arc<LinkService<SqliteLinkRepository>>,
    pub metrics: Arc<MetricsCollector>,
}

impl AppState {
    /// Wires the repository, service, and metrics collector to a pool.
    pub fn new(db: SqlitePool) -> Self {
        let repository = Arc::new(SqliteLinkRepository::new(db.clone()));
        let link_service = Arc::new(LinkService::new(repository));

        Self {
            db,
            link_service,
            metrics: Arc::new(MetricsCollector::new()),
        }
    }
}
