//! Request extractors for the web layer.

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header::COOKIE, request::Parts},
};
use std::convert::Infallible;

use crate::state::AppState;

/// Session token read from the configured session cookie.
///
/// Holds `None` when the cookie is missing or empty. Extraction never fails:
/// a request without a usable cookie is simply anonymous.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken(pub Option<String>);

impl FromRequestParts<AppState> for SessionToken {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self(read_cookie(&parts.headers, &state.page.session_cookie)))
    }
}

/// Finds the value of cookie `name` across all `Cookie` headers.
///
/// # Cookie Parsing
///
/// - Splits each header on semicolons
/// - Takes the first `name=value` pair whose key matches exactly
/// - Strips surrounding double quotes from the value
/// - Ignores other cookies and empty values
pub fn read_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|cookie_header| cookie_header.to_str().ok())
        .flat_map(|cookie_str| cookie_str.split(';'))
        .find_map(|cookie| {
            let (key, value) = cookie.trim().split_once('=')?;
            if key.trim() != name {
                return None;
            }
            let value = value.trim().trim_matches('"');
            (!value.is_empty()).then(|| value.to_string())
        })
}
