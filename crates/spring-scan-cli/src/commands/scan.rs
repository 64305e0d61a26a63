//! Scan command implementation.

use anyhow::{Context, Result};
use spring_scan_core::{
    extract_file, FileReport, Role, RoleResolver, ScanConfig, ScanReport,
};
use std::path::{Path, PathBuf};

use crate::OutputFormat;

/// Config file names probed in the scanned directory, in order.
const CONFIG_NAMES: &[&str] = &["spring-scan.toml", ".spring-scan.toml"];

/// Runs the scan command.
pub fn run(
    path: &Path,
    forced_role: Option<Role>,
    format: OutputFormat,
    mut exclude: Vec<String>,
    explicit_config: Option<&Path>,
) -> Result<()> {
    let config = load_config(path, explicit_config)?;
    config.validate().context("Config validation failed")?;
    exclude.extend(config.exclude.iter().cloned());

    let resolver = if config.roles.is_empty() {
        RoleResolver::default_rules()
    } else {
        RoleResolver::new(&config)
    };

    let root = if config.root.as_os_str() == "." {
        path.to_path_buf()
    } else if config.root.is_absolute() {
        config.root.clone()
    } else {
        path.join(&config.root)
    };

    let files = discover_files(&root, &exclude)?;

    tracing::info!("Scanning {} Java files under {}", files.len(), root.display());

    let mut report = ScanReport::new();

    for file_path in &files {
        let rel = file_path
            .strip_prefix(&root)
            .unwrap_or(file_path)
            .to_path_buf();

        let Some(role) = forced_role.or_else(|| resolver.resolve(file_path)) else {
            tracing::debug!("no role for {}, skipped", rel.display());
            continue;
        };

        // One unreadable file must not abort the batch.
        let text = match std::fs::read_to_string(file_path) {
            Ok(t) => t,
            Err(e) => {
                tracing::warn!("failed to read {}: {e}", file_path.display());
                continue;
            }
        };

        report.files.push(FileReport {
            file: rel,
            role,
            extraction: extract_file(&text, role),
        });
        report.files_scanned += 1;
    }

    report.files.sort_by(|a, b| a.file.cmp(&b.file));

    super::output::print(&report, format)?;

    Ok(())
}

/// Loads the scan config: `--config` path, a config file next to the scanned
/// directory, the global `~/.spring-scan/config.toml`, or built-in defaults.
fn load_config(scan_path: &Path, explicit: Option<&Path>) -> Result<ScanConfig> {
    load_from(locate_config(scan_path, explicit, global_config_dir()))
}

/// Split from [`load_config`] so tests never touch the real home directory.
fn load_from(located: Option<PathBuf>) -> Result<ScanConfig> {
    match located {
        Some(found) => {
            tracing::debug!("using config: {}", found.display());
            ScanConfig::from_file(&found)
                .with_context(|| format!("Failed to load {}", found.display()))
        }
        None => {
            tracing::debug!("no config file found, using built-in role rules");
            Ok(ScanConfig {
                root: PathBuf::from("."),
                exclude: Vec::new(),
                roles: Vec::new(),
            })
        }
    }
}

/// Picks the config file to load, if any. An explicit `--config` path is
/// taken as-is (a missing file surfaces as a load error, not a fallback);
/// otherwise the scanned directory is probed, then the global directory.
///
/// `global_dir` is a parameter so tests never depend on the real home.
fn locate_config(
    scan_path: &Path,
    explicit: Option<&Path>,
    global_dir: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(p) = explicit {
        return Some(p.to_path_buf());
    }

    CONFIG_NAMES
        .iter()
        .map(|name| scan_path.join(name))
        .find(|candidate| candidate.is_file())
        .or_else(|| {
            global_dir
                .map(|dir| dir.join("config.toml"))
                .filter(|candidate| candidate.is_file())
        })
}

/// Global config directory: `$SPRING_SCAN_CONFIG_DIR`, else `~/.spring-scan`.
fn global_config_dir() -> Option<PathBuf> {
    std::env::var_os("SPRING_SCAN_CONFIG_DIR")
        .map(PathBuf::from)
        .or_else(|| home::home_dir().map(|h| h.join(".spring-scan")))
}

fn discover_files(root: &Path, exclude: &[String]) -> Result<Vec<PathBuf>> {
    let mut builder = ignore::WalkBuilder::new(root);
    builder.hidden(false).git_ignore(true);

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        if path.extension().and_then(|e| e.to_str()) != Some("java") {
            continue;
        }

        let rel_str = path.strip_prefix(root).unwrap_or(path).to_string_lossy();

        let excluded = exclude.iter().any(|pattern| {
            let clean = pattern.replace("**/", "").replace("/**", "");
            !clean.is_empty() && rel_str.contains(&clean)
        });

        if !excluded {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const ROLES_ONLY: &str = "[[roles]]\nrole = \"service\"\nsuffixes = [\"Svc.java\"]\n";

    #[test]
    fn discovers_only_java_files() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("A.java"), "").unwrap();
        fs::write(tmp.path().join("B.kt"), "").unwrap();
        fs::write(tmp.path().join("notes.md"), "").unwrap();

        let files = discover_files(tmp.path(), &[]).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("A.java"));
    }

    #[test]
    fn exclude_patterns_filter_by_substring() {
        let tmp = TempDir::new().unwrap();
        let gen = tmp.path().join("generated");
        fs::create_dir(&gen).unwrap();
        fs::write(gen.join("Gen.java"), "").unwrap();
        fs::write(tmp.path().join("Kept.java"), "").unwrap();

        let files = discover_files(tmp.path(), &["**/generated/**".into()]).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("Kept.java"));
    }

    #[test]
    fn explicit_config_path_wins_without_existence_check() {
        // A bad --config path must fail loudly later, never fall back.
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("spring-scan.toml"), ROLES_ONLY).unwrap();

        let wanted = tmp.path().join("elsewhere.toml");
        let found = locate_config(tmp.path(), Some(&wanted), None);
        assert_eq!(found, Some(wanted));
    }

    #[test]
    fn scanned_directory_config_is_probed_before_global() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".spring-scan.toml"), ROLES_ONLY).unwrap();

        let global = TempDir::new().unwrap();
        fs::write(global.path().join("config.toml"), ROLES_ONLY).unwrap();

        let found = locate_config(tmp.path(), None, Some(global.path().to_path_buf()));
        assert_eq!(found, Some(tmp.path().join(".spring-scan.toml")));
    }

    #[test]
    fn undotted_name_shadows_dotted_one() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("spring-scan.toml"), ROLES_ONLY).unwrap();
        fs::write(tmp.path().join(".spring-scan.toml"), "").unwrap();

        let found = locate_config(tmp.path(), None, None);
        assert_eq!(found, Some(tmp.path().join("spring-scan.toml")));
    }

    #[test]
    fn global_config_fills_in_when_directory_has_none() {
        let tmp = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();
        fs::write(global.path().join("config.toml"), ROLES_ONLY).unwrap();

        let found = locate_config(tmp.path(), None, Some(global.path().to_path_buf()));
        assert_eq!(found, Some(global.path().join("config.toml")));
    }

    #[test]
    fn global_dir_without_config_file_is_ignored() {
        let tmp = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();

        let found = locate_config(tmp.path(), None, Some(global.path().to_path_buf()));
        assert_eq!(found, None);
    }

    #[test]
    fn no_config_anywhere_loads_defaults() {
        let config = load_from(None).unwrap();
        assert!(config.roles.is_empty());
        assert!(config.exclude.is_empty());
        assert_eq!(config.root, PathBuf::from("."));
    }

    #[test]
    fn located_config_content_is_actually_loaded() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("spring-scan.toml");
        fs::write(&file, ROLES_ONLY).unwrap();

        let config = load_from(Some(file)).unwrap();
        assert_eq!(config.roles.len(), 1);
        assert_eq!(config.roles[0].suffixes, vec!["Svc.java"]);
    }
}
