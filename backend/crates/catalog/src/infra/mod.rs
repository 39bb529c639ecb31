//! Infrastructure Layer

pub mod memory;
