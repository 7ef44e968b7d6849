//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# docsentry configuration

# Preset: "recommended" (default), "strict", or "minimal"
# preset = "recommended"

[analyzer]
# Root directory to analyze (default: current directory)
# root = "./dumps"

# Glob pattern for declaration dump files, relative to the root
# include = "**/*.decls.json"

# Glob patterns to exclude from analysis
exclude = [
    "**/target/**",
    "**/obj/**",
]

# Rule configurations
# Each rule can be enabled/disabled and have its severity overridden

[rules.require-class-docs]
enabled = true
# severity = "error"  # Override default severity

# [rules.require-field-docs]
# enabled = false

# [rules.blank-line-before-header]
# severity = "info"
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("docsentry.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;

    println!("Created docsentry.toml");
    println!("\nNext steps:");
    println!("  1. Edit docsentry.toml to configure rules");
    println!("  2. Run: docsentry check");

    Ok(())
}
