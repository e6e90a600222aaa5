//! Axum-based HTTP server implementation for gemvision.
//!
//! This module sets up the HTTP server, configures routes, and turns every
//! failure into a JSON error body.
//!
//! # Components
//!
//! - `handlers`: The landing page, health check and analyze endpoint.
//! - `middleware`: Request ID tracking and panic recovery.
//! - `routes`: The main router configuration that ties everything together.
//!
//! Author: kelexine (<https://github.com/kelexine>)

mod handlers;
mod middleware;
mod routes;

pub use handlers::HealthResponse;
pub use routes::{create_router, App, AppState};
