//! News Backend Module
//!
//! Public feed of ranked news stories behind a per-client fixed-window
//! rate limit. Each story is annotated with where it was first captured.
//!
//! Clean Architecture structure:
//! - `domain/` - Story entities, feed order, source enrichment, repository trait
//! - `application/` - List use case and limits
//! - `infra/` - In-memory news repository
//! - `presentation/` - HTTP handler, router

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::NewsConfig;
pub use error::{NewsError, NewsResult};
pub use infra::memory::InMemoryNewsRepository;
pub use presentation::router::{news_router, news_router_generic};
