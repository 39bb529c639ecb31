//! Domain Layer - Business logic and entities
//!
//! - Canonical and captured story entities
//! - Which stories are published, their feed order and source enrichment
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;
