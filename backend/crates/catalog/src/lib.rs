//! Tools Catalog Backend Module
//!
//! Public tools listing and search, both behind a per-client fixed-window
//! rate limit.
//!
//! Clean Architecture structure:
//! - `domain/` - Tool entity, listing order, search scoring, repository trait
//! - `application/` - Use cases (list, search) and limits
//! - `infra/` - In-memory tool repository
//! - `presentation/` - HTTP handlers, router

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::CatalogConfig;
pub use error::{CatalogError, CatalogResult};
pub use infra::memory::InMemoryToolRepository;
pub use presentation::router::{CatalogLimiters, catalog_router, catalog_router_generic};
