use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use assert_cmd::Command;

mod common;
use common::fixtures::*;

fn dirscout(config: &std::path::Path) -> anyhow::Result<Command> {
    let mut cmd = Command::cargo_bin("dirscout")?;
    cmd.env("DIRSCOUT_CONFIG", config).env("NO_COLOR", "1");
    Ok(cmd)
}

#[cfg(test)]
mod add_command_tests {
    use super::*;

    #[test]
    fn test_add_persists_root() -> anyhow::Result<()> {
        let registry = empty_registry()?;
        let root = root_with_children(registry.dir.path(), &[])?;

        dirscout(&registry.config)?
            .arg("--add")
            .arg(&root)
            .assert()
            .success()
            .stdout(predicate::str::contains("added"));

        assert_eq!(
            read_index(&registry.config)?,
            vec![root.to_string_lossy().into_owned()]
        );
        Ok(())
    }

    #[test]
    fn test_add_missing_path_fails_without_mutation() -> anyhow::Result<()> {
        let registry = empty_registry()?;
        let before = fs::read_to_string(&registry.config)?;

        dirscout(&registry.config)?
            .arg("--add")
            .arg(registry.dir.path().join("ghost"))
            .assert()
            .failure()
            .stdout(predicate::str::contains("does not exist"));

        assert_eq!(fs::read_to_string(&registry.config)?, before);
        Ok(())
    }

    #[test]
    fn test_add_file_path_fails() -> anyhow::Result<()> {
        let registry = empty_registry()?;
        let file = registry.dir.path().join("notes.txt");
        fs::write(&file, "not a dir")?;

        dirscout(&registry.config)?
            .arg("--add")
            .arg(&file)
            .assert()
            .failure()
            .stdout(predicate::str::contains("is not a directory"));

        assert!(read_index(&registry.config)?.is_empty());
        Ok(())
    }

    #[test]
    fn test_add_duplicate_fails_without_mutation() -> anyhow::Result<()> {
        let temp = tempfile::TempDir::new()?;
        let registry = registry_with_roots(&[temp.path()])?;
        let before = fs::read_to_string(&registry.config)?;

        dirscout(&registry.config)?
            .arg("--add")
            .arg(temp.path())
            .assert()
            .failure()
            .stdout(predicate::str::contains("already in the search index"));

        assert_eq!(fs::read_to_string(&registry.config)?, before);
        Ok(())
    }

    #[test]
    fn test_add_and_remove_are_mutually_exclusive() -> anyhow::Result<()> {
        let registry = empty_registry()?;
        let root = root_with_children(registry.dir.path(), &[])?;

        dirscout(&registry.config)?
            .arg("--add")
            .arg(&root)
            .arg("--remove")
            .arg(&root)
            .assert()
            .failure();
        Ok(())
    }
}

#[cfg(test)]
mod remove_command_tests {
    use super::*;

    #[test]
    fn test_add_then_remove_restores_file_byte_for_byte() -> anyhow::Result<()> {
        let temp = tempfile::TempDir::new()?;
        let registry = registry_with_roots(&[temp.path()])?;
        let before = fs::read_to_string(&registry.config)?;
        let extra = root_with_children(registry.dir.path(), &[])?;

        dirscout(&registry.config)?
            .arg("--add")
            .arg(&extra)
            .assert()
            .success();
        assert_ne!(fs::read_to_string(&registry.config)?, before);

        dirscout(&registry.config)?
            .arg("--remove")
            .arg(&extra)
            .assert()
            .success()
            .stdout(predicate::str::contains("removed"));
        assert_eq!(fs::read_to_string(&registry.config)?, before);
        Ok(())
    }

    #[test]
    fn test_remove_absent_path_is_noop() -> anyhow::Result<()> {
        let temp = tempfile::TempDir::new()?;
        let registry = registry_with_roots(&[temp.path()])?;
        let before = fs::read_to_string(&registry.config)?;
        let other = root_with_children(registry.dir.path(), &[])?;

        dirscout(&registry.config)?
            .arg("--remove")
            .arg(&other)
            .assert()
            .success()
            .stdout(predicate::str::contains("was not in the search index"));

        assert_eq!(fs::read_to_string(&registry.config)?, before);
        Ok(())
    }

    #[test]
    fn test_remove_missing_path_fails() -> anyhow::Result<()> {
        let registry = empty_registry()?;

        dirscout(&registry.config)?
            .arg("--remove")
            .arg(registry.dir.path().join("ghost"))
            .assert()
            .failure()
            .stdout(predicate::str::contains("does not exist"));
        Ok(())
    }
}

#[cfg(test)]
mod first_run_tests {
    use super::*;

    #[test]
    fn test_first_run_creates_registry_with_single_root() -> anyhow::Result<()> {
        let temp = tempfile::TempDir::new()?;
        let config = temp.path().join("config.json");
        assert!(!config.exists());

        dirscout(&config)?.write_stdin("exit\n").assert().success();

        assert!(config.exists());
        assert_eq!(read_index(&config)?.len(), 1);
        Ok(())
    }

    #[test]
    fn test_corrupt_registry_is_fatal() -> anyhow::Result<()> {
        let temp = tempfile::TempDir::new()?;
        let config = temp.path().join("config.json");
        fs::write(&config, "{ not json")?;

        dirscout(&config)?
            .write_stdin("exit\n")
            .assert()
            .failure()
            .stdout(predicate::str::contains("Failed to parse"));
        Ok(())
    }
}
