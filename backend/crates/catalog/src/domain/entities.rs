//! Domain Entities

use chrono::{DateTime, Utc};
use platform::timestamp;
use serde::de::{self, IgnoredAny};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A tool row in the public catalog
///
/// Columns not modelled here are kept in `extra` and written back out
/// unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub description: String,
    /// `None` counts as shown
    #[serde(default)]
    pub show_on_site: Option<bool>,
    #[serde(default)]
    pub table_order: Option<i32>,
    #[serde(default, deserialize_with = "timestamp::deserialize_optional")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_optional")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub features: Vec<Value>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub new_features: Vec<Value>,
    /// Always empty; the source table has no categories
    #[serde(default, deserialize_with = "discard")]
    pub categories: Vec<String>,
    #[serde(
        default,
        deserialize_with = "external_id_as_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub external_id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Tool {
    /// Minimal visible tool
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            short_description: String::new(),
            description: String::new(),
            show_on_site: None,
            table_order: None,
            created_at: None,
            updated_at: None,
            features: Vec::new(),
            new_features: Vec::new(),
            categories: Vec::new(),
            external_id: None,
            extra: Map::new(),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.show_on_site != Some(false)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default())
}

fn discard<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    IgnoredAny::deserialize(deserializer)?;
    Ok(Vec::new())
}

/// Numeric ids become their decimal text; empty strings count as absent
fn external_id_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(de::Error::custom(format!(
            "external_id must be a number or string, got {other}"
        ))),
    }
}
