//! Access Gate Backend Module
//!
//! Password gate in front of the CC skills listing.
//!
//! Clean Architecture structure:
//! - `domain/` - Access token, skill entity, repository traits
//! - `application/` - Use cases (issue, check, clear, list)
//! - `infra/` - In-memory skill repository
//! - `presentation/` - HTTP handlers, middleware, router
//!
//! ## Security Model
//! - A correct shared password buys a signed cookie valid for one hour
//! - The cookie is a capability: `<expiresAt>.<hex HMAC-SHA256(expiresAt)>`,
//!   checked by recomputing the MAC, never by server-side lookup
//! - Every verification failure looks the same to the client (401); the
//!   precise reason is only logged
//! - Nothing is revoked server-side; logout just clears the cookie

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AccessConfig;
pub use error::{AccessError, AccessResult};
pub use infra::memory::InMemorySkillRepository;
pub use presentation::router::{access_router, access_router_generic};
