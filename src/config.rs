//! Application config (`hotkeys.toml`).

use directories::ProjectDirs;
use hotkeys_core::MAX_HOTKEYS;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const MAX_CONFIG_FILE_BYTES: u64 = 1_048_576; // 1 MiB
const MAX_CONFIGURABLE_HOTKEYS: usize = 65_536;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    options_file: Option<PathBuf>,
    max_hotkeys: Option<usize>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Where hotkeys (and any other options) are stored.
    pub options_file: Option<PathBuf>,
    pub max_hotkeys: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            options_file: None,
            max_hotkeys: MAX_HOTKEYS,
        }
    }
}

impl AppConfig {
    /// Options file to use: explicit setting, then the user config dir.
    pub fn options_path(&self) -> Option<PathBuf> {
        self.options_file
            .clone()
            .or_else(|| config_dir().map(|dir| dir.join("options.txt")))
    }
}

/// Load the app config. Problems are returned as warnings and the affected
/// settings fall back to their defaults.
pub fn load_config(config_file: Option<&PathBuf>) -> (AppConfig, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();
    let mut config = AppConfig::default();
    let Some(path) = config_file
        .cloned()
        .or_else(|| config_dir().map(|dir| dir.join("hotkeys.toml")))
    else {
        return (config, warnings);
    };

    if !path.exists() {
        if config_file.is_some() {
            warnings.push(format!("Config file not found: {}", path.display()));
        }
        return (config, warnings);
    }

    let Some(file) = read_config_file(&path, &mut warnings) else {
        return (config, warnings);
    };

    config.options_file = file.options_file;
    match file.max_hotkeys {
        Some(max) if (1..=MAX_CONFIGURABLE_HOTKEYS).contains(&max) => config.max_hotkeys = max,
        Some(max) => warnings.push(format!(
            "Ignoring max_hotkeys = {} in {} (must be 1..={}); using {}",
            max,
            path.display(),
            MAX_CONFIGURABLE_HOTKEYS,
            MAX_HOTKEYS
        )),
        None => {}
    }
    (config, warnings)
}

fn read_config_file(path: &Path, warnings: &mut Vec<String>) -> Option<ConfigFile> {
    match std::fs::metadata(path) {
        Ok(meta) if meta.len() > MAX_CONFIG_FILE_BYTES => {
            warnings.push(format!(
                "Refusing to read {}: file too large ({} bytes, max {})",
                path.display(),
                meta.len(),
                MAX_CONFIG_FILE_BYTES
            ));
            None
        }
        Ok(_) => match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<ConfigFile>(&content) {
                Ok(parsed) => Some(parsed),
                Err(err) => {
                    warnings.push(format!("Failed to parse {}: {}", path.display(), err));
                    None
                }
            },
            Err(err) => {
                warnings.push(format!("Failed to read {}: {}", path.display(), err));
                None
            }
        },
        Err(err) => {
            warnings.push(format!(
                "Failed to read metadata for {}: {}",
                path.display(),
                err
            ));
            None
        }
    }
}

fn config_dir() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "hotkeys")?;
    Some(proj.config_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_explicit_file_warns() {
        let path = std::env::temp_dir().join("hotkeys_config_does_not_exist.toml");
        let _ = std::fs::remove_file(&path);
        let (config, warnings) = load_config(Some(&path));
        assert_eq!(config, AppConfig::default());
        assert!(warnings.iter().any(|w| w.contains("Config file not found")));
    }

    #[test]
    fn reads_settings() {
        let path = std::env::temp_dir().join("hotkeys_config_settings.toml");
        std::fs::write(&path, "options_file = \"/tmp/opts.txt\"\nmax_hotkeys = 10\n")
            .expect("write config");
        let (config, warnings) = load_config(Some(&path));
        assert!(warnings.is_empty());
        assert_eq!(config.max_hotkeys, 10);
        assert_eq!(config.options_path(), Some(PathBuf::from("/tmp/opts.txt")));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn zero_capacity_falls_back_to_default() {
        let path = std::env::temp_dir().join("hotkeys_config_zero.toml");
        std::fs::write(&path, "max_hotkeys = 0\n").expect("write config");
        let (config, warnings) = load_config(Some(&path));
        assert_eq!(config.max_hotkeys, MAX_HOTKEYS);
        assert!(warnings.iter().any(|w| w.contains("Ignoring max_hotkeys")));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn huge_capacity_falls_back_to_default() {
        let path = std::env::temp_dir().join("hotkeys_config_huge.toml");
        std::fs::write(&path, "max_hotkeys = 4000000000000000000\n").expect("write config");
        let (config, warnings) = load_config(Some(&path));
        assert_eq!(config.max_hotkeys, MAX_HOTKEYS);
        assert!(
            warnings
                .iter()
                .any(|w| w.contains("Ignoring max_hotkeys = 4000000000000000000"))
        );
        let _ = std::fs::remove_file(&path);

        let path = std::env::temp_dir().join("hotkeys_config_largest.toml");
        std::fs::write(&path, format!("max_hotkeys = {}\n", MAX_CONFIGURABLE_HOTKEYS))
            .expect("write config");
        let (config, warnings) = load_config(Some(&path));
        assert!(warnings.is_empty());
        assert_eq!(config.max_hotkeys, MAX_CONFIGURABLE_HOTKEYS);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn rejects_unknown_fields() {
        let path = std::env::temp_dir().join("hotkeys_config_unknown.toml");
        std::fs::write(&path, "max_hotkeys = 5\nextra = true\n").expect("write config");
        let (config, warnings) = load_config(Some(&path));
        assert_eq!(config, AppConfig::default());
        assert!(warnings.iter().any(|w| w.contains("Failed to parse")));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn rejects_oversized_file() {
        let path = std::env::temp_dir().join("hotkeys_config_large.toml");
        let oversized = "#".repeat(MAX_CONFIG_FILE_BYTES as usize + 1);
        std::fs::write(&path, oversized).expect("write config");
        let (_, warnings) = load_config(Some(&path));
        assert!(
            warnings
                .iter()
                .any(|w| w.contains("file too large") && w.contains("Refusing to read"))
        );
        let _ = std::fs::remove_file(&path);
    }
}
