//! Configuration file discovery and reading.
//!
//! Files are JSON5 (`.json5`) or plain JSON (`.json`); both go through the
//! JSON5 parser. The first file found wins:
//!
//! 1. Local: `./stargaze.json5` or `./stargaze.json`
//! 2. User: `<config_dir>/stargaze/config.json5` or `<config_dir>/stargaze/config.json`
//!
//! where `<config_dir>` is `~/.config` on Linux (see [`dirs::config_dir`]).

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Configuration file names to search for, in priority order.
const CONFIG_FILE_NAMES: &[&str] = &["stargaze.json5", "stargaze.json"];

/// User config directory name.
const USER_CONFIG_DIR: &str = "stargaze";

/// User config file names to search for, in priority order.
const USER_CONFIG_FILE_NAMES: &[&str] = &["config.json5", "config.json"];

/// Finds the configuration file relative to the working directory and the
/// user config directory.
///
/// # Examples
///
/// ```no_run
/// use stargaze_config::persistence::find_config_file;
///
/// if let Some(path) = find_config_file() {
///     println!("Found config at: {}", path.display());
/// }
/// ```
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    find_config_file_in(Path::new("."), user_config_dir().ok().as_deref())
}

/// Finds the configuration file in `local_dir`, then in `user_dir`.
#[must_use]
pub fn find_config_file_in(local_dir: &Path, user_dir: Option<&Path>) -> Option<PathBuf> {
    let local = CONFIG_FILE_NAMES.iter().map(|name| local_dir.join(name));
    let user = user_dir
        .into_iter()
        .flat_map(|dir| USER_CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)));

    local.chain(user).find(|path| path.is_file())
}

/// Returns the user configuration directory, typically `~/.config/stargaze/`.
///
/// # Errors
///
/// Returns [`ConfigError::NoHomeDirectory`] if the platform config
/// directory cannot be determined.
pub fn user_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|d| d.join(USER_CONFIG_DIR))
        .ok_or(ConfigError::NoHomeDirectory)
}

/// Reads and parses a configuration file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or its content cannot be
/// parsed as JSON5.
///
/// # Examples
///
/// ```no_run
/// use stargaze_config::Config;
/// use stargaze_config::persistence::read_config_file;
///
/// # fn main() -> stargaze_config::Result<()> {
/// let config: Config = read_config_file("stargaze.json5")?;
/// # Ok(())
/// # }
/// ```
pub fn read_config_file<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json5::from_str(&content).map_err(ConfigError::from)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use tempfile::TempDir;

    use super::*;

    #[derive(Debug, PartialEq, Deserialize)]
    struct TestConfig {
        name: String,
        value: i32,
    }

    #[test]
    fn read_json_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("test.json");
        std::fs::write(&path, r#"{"name": "test", "value": 42}"#).unwrap();

        let config: TestConfig = read_config_file(&path).unwrap();
        assert_eq!(config.name, "test");
        assert_eq!(config.value, 42);
    }

    #[test]
    fn read_json5_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("test.json5");
        std::fs::write(
            &path,
            r#"
            {
                // comments and trailing commas are fine
                name: "test",
                value: 42,
            }
            "#,
        )
        .unwrap();

        let config: TestConfig = read_config_file(&path).unwrap();
        assert_eq!(config.value, 42);
    }

    #[test]
    fn read_nonexistent_file() {
        let result: Result<TestConfig> = read_config_file("/nonexistent/stargaze.json5");
        assert!(matches!(result, Err(ConfigError::ReadFile { .. })));
    }

    #[test]
    fn read_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("invalid.json");
        std::fs::write(&path, "not valid json").unwrap();

        let result: Result<TestConfig> = read_config_file(&path);
        assert!(matches!(result, Err(ConfigError::ParseJson5(_))));
    }

    #[test]
    fn local_file_wins_over_user_file() {
        let local = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        std::fs::write(local.path().join("stargaze.json"), "{}").unwrap();
        std::fs::write(user.path().join("config.json5"), "{}").unwrap();

        let found = find_config_file_in(local.path(), Some(user.path()));
        assert_eq!(found, Some(local.path().join("stargaze.json")));
    }

    #[test]
    fn json5_wins_over_json() {
        let local = TempDir::new().unwrap();
        std::fs::write(local.path().join("stargaze.json"), "{}").unwrap();
        std::fs::write(local.path().join("stargaze.json5"), "{}").unwrap();

        let found = find_config_file_in(local.path(), None);
        assert_eq!(found, Some(local.path().join("stargaze.json5")));
    }

    #[test]
    fn falls_back_to_user_file() {
        let local = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        std::fs::write(user.path().join("config.json"), "{}").unwrap();

        let found = find_config_file_in(local.path(), Some(user.path()));
        assert_eq!(found, Some(user.path().join("config.json")));
    }

    #[test]
    fn nothing_found() {
        let local = TempDir::new().unwrap();
        assert_eq!(find_config_file_in(local.path(), None), None);
    }

    #[test]
    fn user_config_dir_returns_path() {
        if dirs::config_dir().is_some() {
            assert!(user_config_dir().unwrap().ends_with(USER_CONFIG_DIR));
        }
    }
}
