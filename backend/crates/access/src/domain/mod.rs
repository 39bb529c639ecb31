//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - The access token value object and why a token gets rejected
//! - Token signing / verification and listing order (services)
//! - The skill entity shown behind the gate
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;
