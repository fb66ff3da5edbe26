use std::sync::Arc;
use std::time::Duration;
use crate::config::AppConfig;
use crate::error::AppResult;
use crate::model::mapping::StateMapping;
use crate::service::catalog::Catalog;
use crate::service::download::DocumentClient;
use crate::service::session::SessionStore;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub catalog: Catalog,
    pub sessions: SessionStore,
    pub documents: DocumentClient,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &"AppConfig")
            .field("states", &self.catalog.state_count())
            .field("files", &self.catalog.file_count())
            .field("sessions", &self.sessions)
            .finish()
    }
}

impl AppState {
    pub fn new(config: AppConfig, mapping: StateMapping) -> AppResult<Self> {
        let documents = DocumentClient::new(&config.document_base())?;
        let sessions = SessionStore::new(Duration::from_secs(config.catalog.session_idle_secs));

        Ok(Self {
            config: Arc::new(config),
            catalog: Catalog::new(mapping),
            sessions,
            documents,
        })
    }
}
