//! Repository Traits
//!
//! Interfaces for data access. Implementation is in infrastructure layer.

use crate::domain::entities::Skill;
use crate::error::AccessResult;

/// Skill listing repository trait
#[trait_variant::make(SkillRepository: Send)]
pub trait LocalSkillRepository {
    /// Every skill, in no particular order
    async fn list_all(&self) -> AccessResult<Vec<Skill>>;
}
