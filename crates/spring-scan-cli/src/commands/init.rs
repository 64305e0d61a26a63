//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# spring-scan configuration

[scan]
# Root directory to scan, relative to the project path
# root = "./src/main/java"

# Patterns to exclude from scanning
exclude = [
    "**/target/**",
    "**/generated/**",
    "**/test/**",
]

# Filename suffixes mapped to roles. Files matching no rule are skipped
# unless a role is forced with `--role`.

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

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("spring-scan.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;

    println!("Created spring-scan.toml");
    println!("\nNext steps:");
    println!("  1. Edit spring-scan.toml to adjust role suffixes");
    println!("  2. Run: spring-scan scan");

    Ok(())
}
