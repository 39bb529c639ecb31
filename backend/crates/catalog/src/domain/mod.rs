//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - The tool entity and how its source rows are normalized
//! - Listing order and search scoring (services)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;
