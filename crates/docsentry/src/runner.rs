//! Test runner for `cargo test` integration.
//!
//! Lets a project gate its build on documentation coverage by calling
//! [`run_as_test`] from an ordinary integration test.

use docsentry_core::{Analyzer, Config, Severity};
use docsentry_rules::Preset;
use std::path::{Path, PathBuf};

/// Config file names to search for, in priority order.
const CONFIG_CANDIDATES: &[&str] = &["docsentry.toml", ".docsentry.toml"];

/// Runs docsentry analysis as part of `cargo test`.
///
/// All arguments override the corresponding config file setting when given:
/// `preset` is one of `recommended`, `strict` or `minimal`; `config_path`
/// points at an alternative TOML file; `fail_on` is the severity threshold
/// (`error`, `warning` or `info`).
///
/// # Panics
///
/// Panics with a formatted report if violations at or above the effective
/// `fail_on` severity are found, or if the analyzer cannot be built.
pub fn run_as_test(preset: Option<&str>, config_path: Option<&str>, fail_on: Option<&str>) {
    let root = find_project_root();
    let config = load_config(&root, config_path);

    let effective_preset = resolve_preset(preset, &config);
    let effective_fail_on = resolve_fail_on(fail_on, &config);

    let mut builder = Analyzer::builder().root(&root).config(config);
    for rule in effective_preset.rules() {
        builder = builder.rule_box(rule);
    }

    let analyzer = builder.build().unwrap_or_else(|e| {
        panic!("docsentry: failed to build analyzer: {e}");
    });

    let result = analyzer.analyze().unwrap_or_else(|e| {
        panic!("docsentry: analysis failed: {e}");
    });

    if result.has_violations_at(effective_fail_on) {
        let report = result.format_test_report(effective_fail_on);
        panic!("{report}");
    }
}

/// Loads the configuration, falling back to defaults when no file is found.
fn load_config(root: &Path, explicit_path: Option<&str>) -> Config {
    if let Some(path) = explicit_path {
        let full_path = if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            root.join(path)
        };
        return Config::from_file(&full_path).unwrap_or_else(|e| {
            panic!("docsentry: failed to load config from {}: {e}", full_path.display());
        });
    }

    for candidate in CONFIG_CANDIDATES {
        let path = root.join(candidate);
        if path.exists() {
            return Config::from_file(&path).unwrap_or_else(|e| {
                panic!("docsentry: failed to load config from {}: {e}", path.display());
            });
        }
    }

    Config::default()
}

/// Checks whether a `Cargo.toml` file defines a `[workspace]` section
/// by parsing as TOML, avoiding false positives from comments or strings.
fn has_workspace_section(cargo_toml: &Path) -> bool {
    let Ok(content) = std::fs::read_to_string(cargo_toml) else {
        return false;
    };
    let Ok(table) = content.parse::<toml::Table>() else {
        return false;
    };
    table.contains_key("workspace")
}

/// Finds the project root by looking for `Cargo.toml` from `CARGO_MANIFEST_DIR`.
fn find_project_root() -> PathBuf {
    // CARGO_MANIFEST_DIR points to the crate containing the test,
    // which may be a workspace member. Walk up to find workspace root.
    if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
        let manifest_path = PathBuf::from(&manifest_dir);

        // Check if there's a workspace Cargo.toml above
        let mut candidate = manifest_path.as_path();
        loop {
            let cargo_toml = candidate.join("Cargo.toml");
            if cargo_toml.exists() && has_workspace_section(&cargo_toml) {
                return candidate.to_path_buf();
            }
            match candidate.parent() {
                Some(parent) => candidate = parent,
                None => break,
            }
        }

        // No workspace root found — use manifest dir itself
        return manifest_path;
    }

    // Fallback: current directory
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Resolves the effective preset from explicit arg > config > default.
fn resolve_preset(arg: Option<&str>, config: &Config) -> Preset {
    let name = arg.or(config.preset.as_deref()).unwrap_or("recommended");

    match name {
        "recommended" => Preset::Recommended,
        "strict" => Preset::Strict,
        "minimal" => Preset::Minimal,
        other => panic!(
            "docsentry: unknown preset `{other}`. Valid presets: recommended, strict, minimal"
        ),
    }
}

/// Resolves the effective `fail_on` severity from explicit arg > config > default.
fn resolve_fail_on(arg: Option<&str>, config: &Config) -> Severity {
    let name = arg.or(config.fail_on.as_deref()).unwrap_or("error");

    match name {
        "error" => Severity::Error,
        "warning" => Severity::Warning,
        "info" => Severity::Info,
        other => {
            panic!("docsentry: unknown severity `{other}`. Valid values: error, warning, info")
        }
    }
}
