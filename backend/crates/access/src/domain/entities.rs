//! Domain Entities

use serde::{Deserialize, Serialize};

/// A Claude Code skill row in the protected listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Repository path used to build the install command
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub downloads: Option<i64>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub license: Option<String>,
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
    #[serde(default)]
    pub created_at: Option<String>,
}
