//! Paste Playground - browse scraped pastes and run them locally
//!
//! Serves an htmx front-end over a paste scraping API, caching paste bodies
//! in a process-wide TTL cache, and runs Go, Python or Ruby pastes with local
//! interpreters.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod render;
pub mod runner;
pub mod service;
pub mod tasks;
pub mod upstream;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_cleanup_task;
