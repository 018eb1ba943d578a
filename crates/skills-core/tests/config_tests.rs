use skills_core::{Error, SkillConfig};
use skills_test_utils::repo::TestRepo;

#[test]
fn load_without_file_uses_defaults() {
    let repo = TestRepo::with_git();
    assert_eq!(SkillConfig::load(repo.root()).unwrap(), SkillConfig::default());
}

#[test]
fn load_applies_file_overrides() {
    let repo = TestRepo::with_git();
    repo.write_file(
        ".agent-skills/config.toml",
        r#"agents_file = "CLAUDE.md"

[hooks]
command = "bd hooks install"
hook_file = ".git/hooks/post-commit"
marker = "bd-hooks"
"#,
    );

    let config = SkillConfig::load(repo.root()).unwrap();

    assert_eq!(config.agents_file, "CLAUDE.md");
    assert_eq!(config.hooks.command, "bd hooks install");
    assert_eq!(config.hooks.hook_file, ".git/hooks/post-commit");
    assert_eq!(config.hooks.marker, "bd-hooks");
    assert_eq!(config.skill_name, "project-management-with-beads");
}

#[test]
fn explicit_overrides_beat_file() {
    let repo = TestRepo::with_git();
    repo.write_file(".agent-skills/config.toml", "agents_file = \"CLAUDE.md\"\n");

    let config = SkillConfig::load(repo.root())
        .unwrap()
        .with_agents_file(Some("GEMINI.md".to_string()))
        .with_hooks_command(Some("lefthook install".to_string()));

    assert_eq!(config.agents_file, "GEMINI.md");
    assert_eq!(config.hooks.command, "lefthook install");
}

#[test]
fn malformed_file_is_an_error() {
    let repo = TestRepo::with_git();
    repo.write_file(".agent-skills/config.toml", "agents_file = [not toml");

    let result = SkillConfig::load(repo.root());

    assert!(matches!(result, Err(Error::ConfigParse { .. })));
}
