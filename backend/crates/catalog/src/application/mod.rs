//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.

pub mod config;
pub mod list_tools;
pub mod search_tools;
pub mod throttle;

pub use list_tools::{ListToolsInput, ListToolsUseCase};
pub use search_tools::{SearchToolsOutput, SearchToolsUseCase};
