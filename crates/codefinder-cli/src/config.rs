//! CLI presentation config.
//!
//! Core owns the catalog; presentation settings live in an optional
//! `cli.toml` under the data directory. A malformed file is warned about and
//! replaced by defaults — presentation never blocks the tool.

use serde::Deserialize;
use std::io::IsTerminal;
use std::path::Path;

/// When to emit ANSI highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Highlight only when stdout is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Parse a `--color` flag value.
    pub fn from_flag(s: &str) -> Option<Self> {
        match s {
            "auto" => Some(Self::Auto),
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            _ => None,
        }
    }

    /// Resolve against the actual stdout.
    pub fn use_color(self) -> bool {
        match self {
            Self::Auto => std::io::stdout().is_terminal(),
            Self::Always => true,
            Self::Never => false,
        }
    }
}

/// Settings read from `cli.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub color: ColorMode,
}

/// Load `cli.toml` from the data directory. Missing file means defaults;
/// a malformed file is warned about and ignored.
pub fn load_cli_config(home: &Path) -> CliConfig {
    let path = home.join("cli.toml");
    let contents = match std::fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(_) => return CliConfig::default(),
    };
    match toml::from_str(&contents) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[WARN] {}: ignoring malformed config: {}", path.display(), e);
            CliConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = load_cli_config(temp_dir.path());
        assert_eq!(config.color, ColorMode::Auto);
    }

    #[test]
    fn test_color_from_file() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("cli.toml"), "color = \"never\"\n").unwrap();
        let config = load_cli_config(temp_dir.path());
        assert_eq!(config.color, ColorMode::Never);
    }

    #[test]
    fn test_malformed_file_ignored() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("cli.toml"), "color = [nope").unwrap();
        let config = load_cli_config(temp_dir.path());
        assert_eq!(config.color, ColorMode::Auto);
    }

    #[test]
    fn test_flag_parsing() {
        assert_eq!(ColorMode::from_flag("always"), Some(ColorMode::Always));
        assert_eq!(ColorMode::from_flag("bogus"), None);
    }
}
