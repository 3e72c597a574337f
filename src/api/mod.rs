//! API Module
//!
//! HTTP handlers and routing for the paste playground.
//!
//! # Endpoints
//! - `GET /` - Home page
//! - `GET /pastes?language=` - Paste list fragment
//! - `GET /paste/:key?language=` - Paste viewer fragment
//! - `POST /run` - Execute a Go, Python or Ruby program
//! - `GET /stats` - Paste cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
