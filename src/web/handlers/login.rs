//! Landing page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use chrono::Utc;

use crate::application::services::Decision;
use crate::state::AppState;
use crate::web::extract::SessionToken;

/// Template for the login page.
///
/// Renders `templates/login.html`: a username/password form posting to
/// `login_action`. The "remember me" checkbox and account links are static.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub login_action: String,
}

/// Serves the landing page.
///
/// # Endpoint
///
/// `GET /`
///
/// # Behavior
///
/// Runs the session gate for the visitor's session cookie:
/// - Active session: `303 See Other` to the home target
/// - Anonymous, unknown or expired session: `200 OK` with the login form
///
/// Expired sessions are cleared by the gate before the form is rendered.
pub async fn login_handler(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
) -> Response {
    let now = Utc::now().timestamp();

    match state.session_gate.evaluate(token.as_deref(), now).await {
        Decision::Redirect(target) => Redirect::to(&target).into_response(),
        Decision::RenderLogin => LoginTemplate {
            login_action: state.page.login_action.clone(),
        }
        .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_renders_form() {
        let html = LoginTemplate {
            login_action: "login".to_string(),
        }
        .render()
        .unwrap();

        assert!(html.contains(r#"<form action="login" method="post">"#));
        assert!(html.contains(r#"name="username""#));
        assert!(html.contains(r#"name="password""#));
        assert_eq!(html.matches(r#"required="required""#).count(), 2);
        assert_eq!(html.matches("<input").count(), 3);
    }

    #[test]
    fn test_template_escapes_action() {
        let html = LoginTemplate {
            login_action: "login\"><script>".to_string(),
        }
        .render()
        .unwrap();

        assert!(!html.contains("<script>"));
    }
}
