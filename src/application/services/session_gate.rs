//! Session gate deciding what the landing page shows.

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::domain::entities::SessionStatus;
use crate::domain::repositories::SessionStore;

/// Outcome of evaluating a request against its session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Show the login form.
    RenderLogin,
    /// Send the client elsewhere; the session is still valid.
    Redirect(String),
}

/// Decides whether a visitor sees the login form or is sent home.
///
/// The gate never creates sessions. It reads the record for the client's
/// token and clears the identity once its expiry has passed. Store failures
/// are logged and treated as an anonymous visitor.
pub struct SessionGate {
    store: Arc<dyn SessionStore>,
    home_target: String,
}

impl SessionGate {
    /// Creates a gate redirecting active sessions to `home_target`.
    pub fn new(store: Arc<dyn SessionStore>, home_target: impl Into<String>) -> Self {
        Self {
            store,
            home_target: home_target.into(),
        }
    }

    /// Redirect target used for active sessions.
    pub fn home_target(&self) -> &str {
        &self.home_target
    }

    /// Evaluates the session identified by `token` at `now` (Unix seconds).
    ///
    /// # Algorithm
    ///
    /// 1. No token, no record, or no identity: [`Decision::RenderLogin`]
    /// 2. Identity whose expiry is before `now`: clear identity and expiry,
    ///    then [`Decision::RenderLogin`]
    /// 3. Otherwise: [`Decision::Redirect`] to the home target
    ///
    /// An identity without an expiry falls through to step 3.
    pub async fn evaluate(&self, token: Option<&str>, now: i64) -> Decision {
        let Some(token) = token else {
            debug!("No session token, rendering login");
            return Decision::RenderLogin;
        };

        let record = match self.store.get(token).await {
            Ok(Some(record)) => record,
            Ok(None) => {
                debug!("Unknown session token, rendering login");
                return Decision::RenderLogin;
            }
            Err(e) => {
                warn!("Session lookup failed, treating visitor as anonymous: {}", e);
                return Decision::RenderLogin;
            }
        };

        match record.status_at(now) {
            SessionStatus::Anonymous => Decision::RenderLogin,
            SessionStatus::Expired => {
                info!(
                    expires_at = record.expires_at,
                    "Session expired, clearing identity"
                );
                debug!(
                    identity = record.identity.as_deref().unwrap_or_default(),
                    "Expired identity"
                );
                if let Err(e) = self.store.clear(token).await {
                    warn!("Failed to clear expired session: {}", e);
                }
                Decision::RenderLogin
            }
            SessionStatus::Active => {
                debug!("Active session, redirecting to {}", self.home_target);
                Decision::Redirect(self.home_target.clone())
            }
        }
    }
}
