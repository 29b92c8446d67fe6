use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Default content for .orgledger/.gitignore
const GITIGNORE_CONTENT: &str = r#"# Orgledger gitignore
# Advisory lock file, recreated on every access
roster.lock
"#;

pub fn run(dir: &Path) -> Result<()> {
    if dir.exists() {
        anyhow::bail!("Orgledger already initialized at {}", dir.display());
    }

    fs::create_dir_all(dir).context("Failed to create orgledger directory")?;

    let roster_path = dir.join("roster.jsonl");
    fs::write(&roster_path, "").context("Failed to create roster.jsonl")?;

    let gitignore_path = dir.join(".gitignore");
    fs::write(&gitignore_path, GITIGNORE_CONTENT).context("Failed to create .gitignore")?;

    orgledger::config::Config::init(dir)?;

    println!("Initialized orgledger at {}", dir.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_init_creates_roster_and_config() {
        let base = tempdir().unwrap();
        let dir = base.path().join(".orgledger");

        run(&dir).unwrap();

        assert!(dir.join("roster.jsonl").exists());
        assert!(dir.join("config.toml").exists());
        assert!(dir.join(".gitignore").exists());
    }

    #[test]
    fn test_init_twice_fails() {
        let base = tempdir().unwrap();
        let dir = base.path().join(".orgledger");

        run(&dir).unwrap();
        let result = run(&dir);
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("already initialized")
        );
    }
}
