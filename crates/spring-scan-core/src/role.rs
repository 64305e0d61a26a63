//! File roles and filename-based role resolution.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

use crate::config::ScanConfig;

/// Architectural role of a source file.
///
/// The role decides which structural facts the analyzers extract:
/// HTTP route bindings for controllers, thrown-exception signatures for
/// services and exceptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// HTTP endpoint class (`@GetMapping` and friends).
    Controller,
    /// Business logic class.
    Service,
    /// Exception class.
    Exception,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Controller => write!(f, "controller"),
            Self::Service => write!(f, "service"),
            Self::Exception => write!(f, "exception"),
        }
    }
}

/// Error for a role label outside the known set.
///
/// An unknown role is fatal for the extraction call: every downstream
/// interpretation depends on it, so there is no sensible default.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role '{0}' (expected controller, service, or exception)")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "controller" => Ok(Self::Controller),
            "service" => Ok(Self::Service),
            "exception" => Ok(Self::Exception),
            other => Err(UnknownRole(other.to_owned())),
        }
    }
}

/// Resolves file names to roles via configured suffix rules.
///
/// Resolution uses longest-suffix-match so that more specific suffixes
/// (e.g. `ServiceImpl.java`) take priority over broader ones.
pub struct RoleResolver {
    /// (filename_suffix, role) sorted by suffix length descending.
    map: Vec<(String, Role)>,
}

impl RoleResolver {
    /// Build a resolver from config.
    #[must_use]
    pub fn new(config: &ScanConfig) -> Self {
        let mut map: Vec<(String, Role)> = Vec::new();
        for rule in &config.roles {
            for suffix in &rule.suffixes {
                map.push((suffix.clone(), rule.role));
            }
        }
        // Longest suffix first for correct matching
        map.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        Self { map }
    }

    /// A resolver with the conventional Spring suffixes.
    #[must_use]
    pub fn default_rules() -> Self {
        let mut map = vec![
            ("Controller.java".to_owned(), Role::Controller),
            ("ServiceImpl.java".to_owned(), Role::Service),
            ("Service.java".to_owned(), Role::Service),
            ("Exception.java".to_owned(), Role::Exception),
        ];
        map.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        Self { map }
    }

    /// Which role does this file belong to?
    #[must_use]
    pub fn resolve(&self, path: &Path) -> Option<Role> {
        let name = path.file_name()?.to_str()?;
        for (suffix, role) in &self.map {
            if name.ends_with(suffix) {
                return Some(*role);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RoleRule;
    use std::path::PathBuf;

    #[test]
    fn parses_known_roles() {
        assert_eq!("controller".parse::<Role>().unwrap(), Role::Controller);
        assert_eq!("service".parse::<Role>().unwrap(), Role::Service);
        assert_eq!("exception".parse::<Role>().unwrap(), Role::Exception);
    }

    #[test]
    fn rejects_unknown_role() {
        let err = "repository".parse::<Role>().unwrap_err();
        assert_eq!(err, UnknownRole("repository".into()));
        assert!(err.to_string().contains("repository"));
    }

    #[test]
    fn role_round_trips_through_serde_lowercase() {
        let json = serde_json::to_string(&Role::Controller).unwrap();
        assert_eq!(json, "\"controller\"");
        let back: Role = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Role::Controller);
    }

    #[test]
    fn default_rules_resolve_conventional_names() {
        let r = RoleResolver::default_rules();
        assert_eq!(
            r.resolve(Path::new("src/UserController.java")),
            Some(Role::Controller)
        );
        assert_eq!(
            r.resolve(Path::new("UserServiceImpl.java")),
            Some(Role::Service)
        );
        assert_eq!(
            r.resolve(Path::new("NotFoundException.java")),
            Some(Role::Exception)
        );
        assert_eq!(r.resolve(Path::new("UserRepository.java")), None);
    }

    #[test]
    fn longer_suffix_wins() {
        let config = ScanConfig {
            root: PathBuf::from("."),
            exclude: vec![],
            roles: vec![
                RoleRule {
                    role: Role::Exception,
                    suffixes: vec!["Service.java".into()],
                },
                RoleRule {
                    role: Role::Service,
                    suffixes: vec!["UserService.java".into()],
                },
            ],
        };
        let r = RoleResolver::new(&config);
        assert_eq!(r.resolve(Path::new("UserService.java")), Some(Role::Service));
        assert_eq!(
            r.resolve(Path::new("OrderService.java")),
            Some(Role::Exception)
        );
    }
}
