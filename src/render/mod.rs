//! Render Module
//!
//! Tera templates for the home page and the htmx fragments.

mod language;
mod views;

pub use language::{syntax_class, LANGUAGES, PLAINTEXT};
pub use views::Views;
