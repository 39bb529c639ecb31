//! Application Layer - Use Cases

pub mod config;
pub mod list_news;
pub mod throttle;

pub use list_news::{ListNewsInput, ListNewsUseCase};
