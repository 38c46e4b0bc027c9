//! Configuration file loading and parsing.

use crate::env::{vars, Environment};
use crate::types::QuillConfig;
use regex::Regex;
use std::path::{Path, PathBuf};
use thiserror::Error;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "warning", "error"];
const LOG_FORMATS: &[&str] = &["pretty", "compact", "json"];

/// Config loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read config: {source}")]
    ReadError {
        #[from]
        source: std::io::Error,
    },

    #[error("invalid YAML at line {}: {message}", line.map(|l| l.to_string()).unwrap_or_else(|| "unknown".to_string()))]
    ParseError { line: Option<usize>, message: String },

    #[error("validation error: {message}")]
    ValidationError { message: String },

    #[error("environment variable not found: {var}")]
    EnvVarNotFound { var: String },
}

/// Configuration loader.
pub struct ConfigLoader {
    config_path: PathBuf,
    required: bool,
}

impl ConfigLoader {
    /// Create a loader for `.quill/config.yaml` under the given project directory.
    pub fn new(project_dir: impl AsRef<Path>) -> Self {
        Self {
            config_path: project_dir.as_ref().join(".quill/config.yaml"),
            required: false,
        }
    }

    /// Create a loader for an explicit config file, which must exist.
    pub fn with_path(path: impl AsRef<Path>) -> Self {
        Self {
            config_path: path.as_ref().to_path_buf(),
            required: true,
        }
    }

    /// Honor `QUILL_CONFIG_PATH`, falling back to the current directory.
    pub fn from_env() -> Self {
        match Environment::get(vars::QUILL_CONFIG_PATH) {
            Some(path) => Self::with_path(path),
            None => Self::default(),
        }
    }

    /// Path this loader reads from and saves to.
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Load the configuration, or defaults when an optional file is absent.
    pub fn load(&self) -> Result<QuillConfig, ConfigError> {
        if !self.config_path.exists() {
            if self.required {
                return Err(ConfigError::NotFound {
                    path: self.config_path.clone(),
                });
            }
            return Ok(QuillConfig::default());
        }

        let contents = std::fs::read_to_string(&self.config_path)?;
        let expanded = self.expand_env_vars(&contents)?;

        let config: QuillConfig = serde_yaml::from_str(&expanded)
            .map_err(|e| ConfigError::ParseError {
                line: e.location().map(|l| l.line()),
                message: e.to_string(),
            })?;

        self.validate(&config)?;
        Ok(config)
    }

    /// Expand environment variables in the form `${VAR}` or `${VAR:-default}`.
    fn expand_env_vars(&self, content: &str) -> Result<String, ConfigError> {
        let re = Regex::new(r"\$\{([^}:]+)(?::-([^}]*))?\}").map_err(|e| {
            ConfigError::ValidationError {
                message: e.to_string(),
            }
        })?;
        let mut result = content.to_string();

        for cap in re.captures_iter(content) {
            let full_match = &cap[0];
            let var_name = &cap[1];
            let default = cap.get(2).map(|m| m.as_str());

            let value = match std::env::var(var_name) {
                Ok(v) => v,
                Err(_) => match default {
                    Some(d) => d.to_string(),
                    None => {
                        return Err(ConfigError::EnvVarNotFound {
                            var: var_name.to_string(),
                        })
                    }
                },
            };

            result = result.replace(full_match, &value);
        }

        Ok(result)
    }

    /// Validate configuration values.
    fn validate(&self, config: &QuillConfig) -> Result<(), ConfigError> {
        let level = config.log.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::ValidationError {
                message: format!("log.level must be one of trace, debug, info, warn, error (got '{}')", config.log.level),
            });
        }

        let format = config.log.format.to_lowercase();
        if !LOG_FORMATS.contains(&format.as_str()) {
            return Err(ConfigError::ValidationError {
                message: format!("log.format must be one of pretty, compact, json (got '{}')", config.log.format),
            });
        }

        Ok(())
    }

    /// Save configuration to file.
    pub fn save(&self, config: &QuillConfig) -> Result<(), ConfigError> {
        if let Some(config_dir) = self.config_path.parent() {
            std::fs::create_dir_all(config_dir)?;
        }

        let yaml = serde_yaml::to_string(config)
            .map_err(|e| ConfigError::ParseError {
                line: None,
                message: e.to_string(),
            })?;

        std::fs::write(&self.config_path, yaml)?;
        Ok(())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new(std::env::current_dir().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ArticleViewPolicy;
    use std::fs;
    use tempfile::tempdir;

    fn write_config(dir: &Path, content: &str) {
        let quill_dir = dir.join(".quill");
        fs::create_dir_all(&quill_dir).unwrap();
        fs::write(quill_dir.join("config.yaml"), content).unwrap();
    }

    #[test]
    fn test_load_defaults_when_no_file() {
        let dir = tempdir().unwrap();
        let loader = ConfigLoader::new(dir.path());
        let config = loader.load().unwrap();
        assert_eq!(config.access.article_view, ArticleViewPolicy::Authenticated);
    }

    #[test]
    fn test_explicit_path_must_exist() {
        let dir = tempdir().unwrap();
        let loader = ConfigLoader::with_path(dir.path().join("missing.yaml"));
        match loader.load().unwrap_err() {
            ConfigError::NotFound { path } => assert!(path.ends_with("missing.yaml")),
            other => panic!("Expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_load_config_from_yaml_file() {
        let dir = tempdir().unwrap();
        write_config(
            dir.path(),
            r#"
access:
  article_view: create_capable
audit:
  log_granted: true
log:
  level: debug
  format: json
"#,
        );

        let config = ConfigLoader::new(dir.path()).load().unwrap();

        assert_eq!(config.access.article_view, ArticleViewPolicy::CreateCapable);
        assert!(config.audit.log_granted);
        assert!(config.audit.log_denied);
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.log.format, "json");
    }

    #[test]
    fn test_env_var_expansion() {
        std::env::set_var("QUILL_TEST_VAR", "test_value");
        let loader = ConfigLoader::new(".");
        let result = loader.expand_env_vars("key: ${QUILL_TEST_VAR}").unwrap();
        assert_eq!(result, "key: test_value");
        std::env::remove_var("QUILL_TEST_VAR");
    }

    #[test]
    fn test_env_var_default() {
        let loader = ConfigLoader::new(".");
        let result = loader.expand_env_vars("key: ${QUILL_NONEXISTENT:-default}").unwrap();
        assert_eq!(result, "key: default");
    }

    #[test]
    fn test_env_var_missing_error() {
        let loader = ConfigLoader::new(".");
        match loader.expand_env_vars("key: ${QUILL_MISSING_VAR}").unwrap_err() {
            ConfigError::EnvVarNotFound { var } => assert_eq!(var, "QUILL_MISSING_VAR"),
            other => panic!("Expected EnvVarNotFound error, got {other:?}"),
        }
    }

    #[test]
    fn test_env_var_expansion_in_config() {
        std::env::set_var("QUILL_TEST_VIEW_POLICY", "create_capable");

        let dir = tempdir().unwrap();
        write_config(
            dir.path(),
            r#"
access:
  article_view: ${QUILL_TEST_VIEW_POLICY}
log:
  level: ${QUILL_TEST_LEVEL:-warn}
"#,
        );

        let config = ConfigLoader::new(dir.path()).load().unwrap();
        assert_eq!(config.access.article_view, ArticleViewPolicy::CreateCapable);
        assert_eq!(config.log.level, "warn");

        std::env::remove_var("QUILL_TEST_VIEW_POLICY");
    }

    #[test]
    fn test_validation_errors() {
        let loader = ConfigLoader::new(".");

        let mut config = QuillConfig::default();
        config.log.level = "loud".to_string();
        match loader.validate(&config).unwrap_err() {
            ConfigError::ValidationError { message } => assert!(message.contains("log.level")),
            other => panic!("Expected ValidationError, got {other:?}"),
        }

        let mut config = QuillConfig::default();
        config.log.format = "xml".to_string();
        match loader.validate(&config).unwrap_err() {
            ConfigError::ValidationError { message } => assert!(message.contains("log.format")),
            other => panic!("Expected ValidationError, got {other:?}"),
        }

        let mut config = QuillConfig::default();
        config.log.level = "WARN".to_string();
        assert!(loader.validate(&config).is_ok());
    }

    #[test]
    fn test_parse_error_with_line_number() {
        let dir = tempdir().unwrap();
        write_config(
            dir.path(),
            r#"
access:
  article_view: authenticated
  broken: [unclosed
"#,
        );

        match ConfigLoader::new(dir.path()).load().unwrap_err() {
            ConfigError::ParseError { line, .. } => assert!(line.is_some()),
            other => panic!("Expected ParseError with line number, got {other:?}"),
        }
    }

    #[test]
    fn test_save_config() {
        let dir = tempdir().unwrap();
        let loader = ConfigLoader::new(dir.path());

        let mut config = QuillConfig::default();
        config.access.article_view = ArticleViewPolicy::CreateCapable;
        config.audit.log_granted = true;

        loader.save(&config).unwrap();
        assert!(dir.path().join(".quill/config.yaml").exists());

        let loaded = loader.load().unwrap();
        assert_eq!(loaded.access.article_view, ArticleViewPolicy::CreateCapable);
        assert!(loaded.audit.log_granted);
    }
}
