/// Shared application state passed to all route handlers
use crate::config::WebserverConfig;
use crate::directory::TokenDirectory;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<TokenDirectory>,

    pub config: Arc<WebserverConfig>,

    /// Server startup time
    pub startup_time: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    pub fn new(directory: Arc<TokenDirectory>, config: WebserverConfig) -> Self {
        Self {
            directory,
            config: Arc::new(config),
            startup_time: chrono::Utc::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        (chrono::Utc::now() - self.startup_time)
            .num_seconds()
            .max(0) as u64
    }
}
