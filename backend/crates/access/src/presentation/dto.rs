//! API DTOs (Data Transfer Objects)

use serde::Serialize;
use serde_json::Value;

use crate::domain::entities::Skill;

/// Request for POST /api/cc-skills/auth
#[derive(Debug, Clone, Default)]
pub struct AuthRequest {
    pub password: String,
}

impl AuthRequest {
    /// Lenient body parse
    ///
    /// A body that is not JSON, or a `password` that is not a string, reads
    /// as an empty password and so ends in 401 rather than 400.
    pub fn from_body(body: &[u8]) -> Self {
        let password = serde_json::from_slice::<Value>(body)
            .ok()
            .and_then(|value| value.get("password")?.as_str().map(str::to_owned))
            .unwrap_or_default();
        Self { password }
    }
}

/// Response for POST /api/cc-skills/auth and /logout
#[derive(Debug, Clone, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

/// Response for GET /api/cc-skills
#[derive(Debug, Clone, Serialize)]
pub struct SkillsResponse {
    pub skills: Vec<Skill>,
}
