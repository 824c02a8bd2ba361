//! Website layer for browser-facing pages.
//!
//! Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`extract`] - Session cookie extraction
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Website route configuration

pub mod extract;
pub mod handlers;
pub mod routes;
