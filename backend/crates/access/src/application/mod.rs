//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.

pub mod check_access;
pub mod clear_access;
pub mod config;
pub mod issue_access;
pub mod list_skills;

pub use check_access::CheckAccessUseCase;
pub use clear_access::clear_access_cookie;
pub use issue_access::{IssueAccessUseCase, IssuedAccess};
pub use list_skills::ListSkillsUseCase;
