//! Application configuration for ScriptForge.
//!
//! User config lives at `~/.scriptforge/scriptforge.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScriptForgeError};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "scriptforge.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".scriptforge";

// ---------------------------------------------------------------------------
// Config structs (matching scriptforge.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Global defaults.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// YouTube Data API settings.
    #[serde(default)]
    pub youtube: YoutubeConfig,
}

/// `[defaults]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Default AI provider id from the catalog.
    #[serde(default = "default_provider")]
    pub provider: String,

    /// Default script language.
    #[serde(default = "default_language")]
    pub language: String,

    /// Default directory for exported documents.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            language: default_language(),
            output_dir: default_output_dir(),
        }
    }
}

fn default_provider() -> String {
    "gemini".into()
}
fn default_language() -> String {
    "English".into()
}
fn default_output_dir() -> String {
    "~/scriptforge-exports".into()
}

/// `[youtube]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YoutubeConfig {
    /// Name of the env var holding the Data API key (never store the key itself).
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

impl Default for YoutubeConfig {
    fn default() -> Self {
        Self {
            api_key_env: default_api_key_env(),
        }
    }
}

fn default_api_key_env() -> String {
    "YOUTUBE_API_KEY".into()
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.scriptforge/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| ScriptForgeError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.scriptforge/scriptforge.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| ScriptForgeError::io(path, e))?;

    toml::from_str(&content).map_err(|e| {
        ScriptForgeError::config(format!("failed to parse {}: {e}", path.display()))
    })
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| ScriptForgeError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| ScriptForgeError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| ScriptForgeError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}

/// Resolve the configured export directory, expanding a leading `~/`.
pub fn resolve_output_dir(config: &AppConfig) -> Result<PathBuf> {
    let raw = &config.defaults.output_dir;
    if let Some(rest) = raw.strip_prefix("~/") {
        let home = dirs::home_dir()
            .ok_or_else(|| ScriptForgeError::config("could not determine home directory"))?;
        return Ok(home.join(rest));
    }
    Ok(PathBuf::from(raw))
}

/// Check that the YouTube Data API key env var is set and return its value.
pub fn youtube_api_key(config: &AppConfig) -> Result<String> {
    let var_name = &config.youtube.api_key_env;
    match std::env::var(var_name) {
        Ok(val) if !val.is_empty() => Ok(val),
        _ => Err(ScriptForgeError::config(format!(
            "YouTube Data API key not found. Set the {var_name} environment variable.\n\
             Create a key at https://console.cloud.google.com/apis/credentials"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serializes() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize default config");
        assert!(toml_str.contains("output_dir"));
        assert!(toml_str.contains("YOUTUBE_API_KEY"));
    }

    #[test]
    fn config_roundtrip() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize");
        let parsed: AppConfig = toml::from_str(&toml_str).expect("deserialize");
        assert_eq!(parsed.defaults.provider, "gemini");
        assert_eq!(parsed.youtube.api_key_env, "YOUTUBE_API_KEY");
    }

    #[test]
    fn partial_config_fills_defaults() {
        let toml_str = r#"
[defaults]
language = "Português"
"#;
        let config: AppConfig = toml::from_str(toml_str).expect("parse");
        assert_eq!(config.defaults.language, "Português");
        assert_eq!(config.defaults.provider, "gemini");
        assert_eq!(config.defaults.output_dir, "~/scriptforge-exports");
    }

    #[test]
    fn output_dir_expands_home_prefix() {
        let config = AppConfig::default();
        let resolved = resolve_output_dir(&config).expect("resolve output dir");
        assert!(resolved.ends_with("scriptforge-exports"));
        assert!(!resolved.to_string_lossy().contains('~'));

        let mut absolute = AppConfig::default();
        absolute.defaults.output_dir = "/tmp/exports".into();
        let resolved = resolve_output_dir(&absolute).expect("resolve output dir");
        assert_eq!(resolved, PathBuf::from("/tmp/exports"));
    }

    #[test]
    fn api_key_lookup_fails_when_unset() {
        let mut config = AppConfig::default();
        // Use a unique env var name to avoid interfering with other tests
        config.youtube.api_key_env = "SF_TEST_NONEXISTENT_KEY_12345".into();
        let result = youtube_api_key(&config);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("API key not found"));
    }
}
