//! HTML template rendering handlers for the website.

mod login;

pub use login::{LoginTemplate, login_handler};
