use std::sync::Arc;
use std::time::Duration;
use moka::future::Cache;
use tokio::sync::Mutex;
use crate::error::{AppError, AppResult};
use crate::model::view::ViewState;
use crate::service::branch::BranchMappingEditor;
use crate::util::token::random_token;

/// 一个浏览器会话对应的全部内存状态
#[derive(Debug, Default)]
pub struct Session {
    pub view: ViewState,
    pub branches: BranchMappingEditor,
}

pub type SessionHandle = Arc<Mutex<Session>>;

/// 会话在空闲超时后自动淘汰
#[derive(Clone)]
pub struct SessionStore {
    cache: Cache<String, SessionHandle>,
}

impl SessionStore {
    pub fn new(idle: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(10_000)
            .time_to_idle(idle)
            .build();

        Self { cache }
    }

    pub async fn create(&self) -> AppResult<(String, SessionHandle)> {
        let id = random_token()?;
        let handle: SessionHandle = Arc::new(Mutex::new(Session::default()));
        self.cache.insert(id.clone(), handle.clone()).await;
        tracing::debug!("创建会话 {}", id);
        Ok((id, handle))
    }

    pub async fn get(&self, id: &str) -> AppResult<SessionHandle> {
        self.cache
            .get(id)
            .await
            .ok_or_else(|| AppError::SessionNotFound { id: id.to_string() })
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("sessions", &self.cache.entry_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn sessions_are_isolated() {
        let store = SessionStore::new(Duration::from_secs(60));
        let (a, handle_a) = store.create().await.unwrap();
        let (b, _) = store.create().await.unwrap();
        assert_ne!(a, b);

        handle_a.lock().await.view.query = "bonus".to_string();

        assert_eq!(store.get(&a).await.unwrap().lock().await.view.query, "bonus");
        assert!(store.get(&b).await.unwrap().lock().await.view.query.is_empty());
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let store = SessionStore::new(Duration::from_secs(60));
        assert!(matches!(
            store.get("nope").await,
            Err(AppError::SessionNotFound { .. })
        ));
    }
}
