//! List Skills Use Case

use std::sync::Arc;

use crate::domain::entities::Skill;
use crate::domain::repository::SkillRepository;
use crate::domain::services::order_by_downloads;
use crate::error::AccessResult;

/// List Skills Use Case
pub struct ListSkillsUseCase<R>
where
    R: SkillRepository,
{
    skill_repo: Arc<R>,
}

impl<R> ListSkillsUseCase<R>
where
    R: SkillRepository,
{
    pub fn new(skill_repo: Arc<R>) -> Self {
        Self { skill_repo }
    }

    /// Skills ordered by downloads, most first
    pub async fn execute(&self) -> AccessResult<Vec<Skill>> {
        let mut skills = self.skill_repo.list_all().await?;
        order_by_downloads(&mut skills);

        tracing::debug!(count = skills.len(), "Listed CC skills");

        Ok(skills)
    }
}
