//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::SessionGate;
use crate::config::Config;
use crate::domain::repositories::SessionStore;

/// Settings the landing page needs at request time.
#[derive(Debug, Clone)]
pub struct PageSettings {
    /// Name of the cookie carrying the session token.
    pub session_cookie: String,
    /// Target of the login form's POST.
    pub login_action: String,
}

impl PageSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            session_cookie: config.session_cookie.clone(),
            login_action: config.login_action.clone(),
        }
    }
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            session_cookie: "session_id".to_string(),
            login_action: "login".to_string(),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub session_gate: Arc<SessionGate>,
    pub session_store: Arc<dyn SessionStore>,
    pub page: Arc<PageSettings>,
}

impl AppState {
    /// Wires the session gate to `session_store`.
    pub fn new(
        session_store: Arc<dyn SessionStore>,
        home_target: impl Into<String>,
        page: PageSettings,
    ) -> Self {
        let session_gate = Arc::new(SessionGate::new(session_store.clone(), home_target));

        Self {
            session_gate,
            session_store,
            page: Arc::new(page),
        }
    }
}
