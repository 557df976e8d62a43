//! # snip
//!
//! A small and fast URL shortener service built with Axum and SQLite.
//!
//! ## Architecture
//!
//! The crate follows a layered design with clear separation:
//!
//! - **Domain Layer** ([`domain`]) - The `Link` entity and the
//!   `LinkRepository` trait
//! - **Application Layer** ([`application`]) - Link lifecycle
//!   orchestration: validation, unique code generation, redirects
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional; sensible defaults exist for everything
//! export DATABASE_URL="sqlite://snip.db?mode=rwc"
//! export LISTEN="0.0.0.0:3000"
//!
//! cargo run
//! ```
//!
//! The schema is created idempotently on startup.
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod metrics;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library
/// users and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::Link;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
