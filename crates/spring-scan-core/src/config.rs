//! TOML configuration for scans.
//!
//! `[scan]` sets the root and exclude patterns; `[[roles]]` maps filename
//! suffixes to roles for files whose role is not given explicitly.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::role::Role;

/// Top-level scan configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ScanConfig {
    /// Project root directory.
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Patterns to exclude (substring match against relative paths).
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Suffix-to-role rules.
    #[serde(rename = "roles", default)]
    pub roles: Vec<RoleRule>,
}

/// Maps filename suffixes to a role.
#[derive(Debug, Clone, Deserialize)]
pub struct RoleRule {
    /// Role to assign.
    pub role: Role,
    /// Filename suffixes belonging to this role (e.g. `"Controller.java"`).
    pub suffixes: Vec<String>,
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

/// Errors when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read config file.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// IO error.
        source: std::io::Error,
    },
    /// Failed to parse TOML.
    #[error("invalid config: {message}")]
    Parse {
        /// Parse error detail.
        message: String,
    },
    /// Config is structurally invalid.
    #[error("config validation: {0}")]
    Validation(String),
}

impl ScanConfig {
    /// Load from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parse from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns error if TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        /// Wrapper to handle the `[scan]` section in the TOML.
        #[derive(Deserialize)]
        struct RawConfig {
            #[serde(default)]
            scan: ScanSection,
            #[serde(rename = "roles", default)]
            roles: Vec<RoleRule>,
        }

        #[derive(Deserialize)]
        struct ScanSection {
            #[serde(default = "default_root")]
            root: PathBuf,
            #[serde(default)]
            exclude: Vec<String>,
        }

        impl Default for ScanSection {
            fn default() -> Self {
                Self {
                    root: default_root(),
                    exclude: Vec::new(),
                }
            }
        }

        let raw: RawConfig = toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;

        Ok(Self {
            root: raw.scan.root,
            exclude: raw.scan.exclude,
            roles: raw.roles,
        })
    }

    /// Validate config consistency.
    ///
    /// # Errors
    ///
    /// Returns error describing the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (i, rule) in self.roles.iter().enumerate() {
            if rule.suffixes.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "roles[{i}] ({}): no suffixes",
                    rule.role
                )));
            }
            for suffix in &rule.suffixes {
                if suffix.trim().is_empty() {
                    return Err(ConfigError::Validation(format!(
                        "roles[{i}] ({}): empty suffix",
                        rule.role
                    )));
                }
            }
        }

        for (i, a) in self.roles.iter().enumerate() {
            for b in self.roles.iter().skip(i + 1) {
                if let Some(dup) = a.suffixes.iter().find(|s| b.suffixes.contains(s)) {
                    return Err(ConfigError::Validation(format!(
                        "suffix '{dup}' mapped to both {} and {}",
                        a.role, b.role
                    )));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_config() {
        let toml = r#"
[[roles]]
role = "controller"
suffixes = ["Controller.java"]
"#;
        let config = ScanConfig::parse(toml).expect("parse failed");
        assert_eq!(config.root, PathBuf::from("."));
        assert_eq!(config.roles.len(), 1);
        assert_eq!(config.roles[0].role, Role::Controller);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
[scan]
root = "./src/main/java"
exclude = ["**/test/**", "generated"]

[[roles]]
role = "controller"
suffixes = ["Controller.java"]

[[roles]]
role = "service"
suffixes = ["Service.java", "ServiceImpl.java"]

[[roles]]
role = "exception"
suffixes = ["Exception.java"]
"#;
        let config = ScanConfig::parse(toml).expect("parse failed");
        assert_eq!(config.root, PathBuf::from("./src/main/java"));
        assert_eq!(config.exclude.len(), 2);
        assert_eq!(config.roles.len(), 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parse_rejects_unknown_role_label() {
        let toml = r#"
[[roles]]
role = "repository"
suffixes = ["Repository.java"]
"#;
        assert!(matches!(
            ScanConfig::parse(toml),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn validate_catches_empty_suffix_list() {
        let toml = r#"
[[roles]]
role = "service"
suffixes = []
"#;
        let config = ScanConfig::parse(toml).expect("parse failed");
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_catches_suffix_mapped_twice() {
        let toml = r#"
[[roles]]
role = "service"
suffixes = ["Service.java"]

[[roles]]
role = "exception"
suffixes = ["Service.java"]
"#;
        let config = ScanConfig::parse(toml).expect("parse failed");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Service.java"));
    }
}
