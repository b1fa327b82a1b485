//! Data-directory resolution.
//!
//! All persisted state (`catalog.json`, optional `cli.toml`) lives under one
//! directory: `~/.codefinder` by default, overridable for tests and
//! side-by-side installs.

use std::io::{self, ErrorKind};
use std::path::PathBuf;

/// Directory name under the user's home directory.
pub const HOME_DIR_NAME: &str = ".codefinder";

/// Resolve the data directory and make sure it exists.
///
/// `override_dir` (from `--home`) wins over the default location. Fails only
/// when no home directory can be determined or the directory cannot be
/// created — the one unrecoverable condition in the tool.
pub fn resolve_home(override_dir: Option<PathBuf>) -> io::Result<PathBuf> {
    let dir = match override_dir {
        Some(dir) => dir,
        None => dirs_next::home_dir()
            .ok_or_else(|| {
                io::Error::new(ErrorKind::NotFound, "could not determine home directory")
            })?
            .join(HOME_DIR_NAME),
    };
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_override_wins_and_is_created() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("nested").join("home");

        let resolved = resolve_home(Some(target.clone())).unwrap();
        assert_eq!(resolved, target);
        assert!(target.is_dir());
    }

    #[test]
    fn test_existing_override_ok() {
        let temp_dir = TempDir::new().unwrap();
        let resolved = resolve_home(Some(temp_dir.path().to_path_buf())).unwrap();
        assert_eq!(resolved, temp_dir.path());
    }
}
