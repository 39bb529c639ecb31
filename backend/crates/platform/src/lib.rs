//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations for the site backend:
//! - Wall clock abstraction (real and manually driven)
//! - Cryptographic utilities (HMAC-SHA256, constant-time comparison, secrets)
//! - Cookie building and parsing
//! - Client identification from proxy headers
//! - Fixed-window rate limiting
//! - Offset pagination and query string lookup
//! - Lenient timestamp loading

pub mod client;
pub mod clock;
pub mod cookie;
pub mod crypto;
pub mod pagination;
pub mod rate_limit;
pub mod timestamp;
