//! In-memory skill repository
//!
//! The hosted skills table is external to this service; the listing is
//! seeded from a JSON array exported from it.

use std::path::Path;
use std::sync::Arc;

use crate::domain::entities::Skill;
use crate::domain::repository::SkillRepository;
use crate::error::{AccessError, AccessResult};

#[derive(Debug, Clone, Default)]
pub struct InMemorySkillRepository {
    skills: Arc<Vec<Skill>>,
}

impl InMemorySkillRepository {
    pub fn new(skills: Vec<Skill>) -> Self {
        Self {
            skills: Arc::new(skills),
        }
    }

    /// Load skills from a JSON array file
    pub async fn load(path: impl AsRef<Path>) -> AccessResult<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read(path)
            .await
            .map_err(|e| AccessError::Repository(format!("{}: {e}", path.display())))?;
        let skills: Vec<Skill> = serde_json::from_slice(&raw)
            .map_err(|e| AccessError::Repository(format!("{}: {e}", path.display())))?;

        tracing::info!(count = skills.len(), path = %path.display(), "Loaded CC skills");

        Ok(Self::new(skills))
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

impl SkillRepository for InMemorySkillRepository {
    async fn list_all(&self) -> AccessResult<Vec<Skill>> {
        Ok(self.skills.as_ref().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("cc_skills_{}.json", std::process::id()));
        tokio::fs::write(
            &path,
            r#"[{"id":1,"name":"pdf","downloads":12,"keywords":["docs"]},{"id":2,"name":"xlsx"}]"#,
        )
        .await
        .unwrap();

        let repo = InMemorySkillRepository::load(&path).await.unwrap();
        tokio::fs::remove_file(&path).await.ok();

        let skills = repo.list_all().await.unwrap();
        assert_eq!(skills.len(), 2);
        assert_eq!(skills[0].downloads, Some(12));
        assert_eq!(skills[0].keywords, Some(vec!["docs".to_string()]));
        assert!(skills[1].description.is_none());
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let result = InMemorySkillRepository::load("/definitely/not/here.json").await;
        assert!(matches!(result, Err(AccessError::Repository(_))));
    }
}
