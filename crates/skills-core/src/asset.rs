//! Packaged skill payloads

use crate::config::DEFAULT_SKILL_NAME;

/// Source of the skill document written by `sync`.
pub trait SkillAsset {
    /// Identifying name of the skill.
    fn name(&self) -> &str;

    /// The exact bytes to write. Must return the same bytes on every call.
    fn bytes(&self) -> &[u8];
}

const BEADS_SKILL: &[u8] =
    include_bytes!("../assets/skills/project-management-with-beads/SKILL.md");

/// The skill compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSkill;

impl SkillAsset for EmbeddedSkill {
    fn name(&self) -> &str {
        DEFAULT_SKILL_NAME
    }

    fn bytes(&self) -> &[u8] {
        BEADS_SKILL
    }
}

/// A skill held in memory, for alternate payloads and tests.
#[derive(Debug, Clone)]
pub struct InMemorySkill {
    name: String,
    bytes: Vec<u8>,
}

impl InMemorySkill {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }
}

impl SkillAsset for InMemorySkill {
    fn name(&self) -> &str {
        &self.name
    }

    fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_skill_is_stable() {
        let skill = EmbeddedSkill;
        assert_eq!(skill.name(), "project-management-with-beads");
        assert!(!skill.bytes().is_empty());
        assert_eq!(skill.bytes(), EmbeddedSkill.bytes());
    }

    #[test]
    fn test_embedded_skill_has_frontmatter_name() {
        let text = std::str::from_utf8(EmbeddedSkill.bytes()).unwrap();
        assert!(text.starts_with("---\nname: project-management-with-beads\n"));
    }
}
