//! Check command implementation.

use anyhow::{Context, Result};
use docsentry_core::{Analyzer, Config, RuleBox};
use docsentry_rules::{recommended_rules, BlankLineBeforeHeader, MissingHeader, Preset};
use std::path::Path;

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Runs the check command.
pub fn run(
    path: &Path,
    format: OutputFormat,
    rules_filter: Option<String>,
    exclude: Vec<String>,
    strict_dumps: bool,
    source: &ConfigSource,
) -> Result<()> {
    let config = match source.path() {
        None => Config::default(),
        Some(p) => Config::from_file(p)
            .with_context(|| format!("Failed to load config: {}", p.display()))?,
    };

    let preset = resolve_preset(config.preset.as_deref());

    // Build analyzer
    let mut builder = Analyzer::builder()
        .root(path)
        .config(config)
        .fail_on_parse_error(strict_dumps);

    // Add exclude patterns
    for pattern in exclude {
        builder = builder.exclude(pattern);
    }

    // Add rules based on filter
    let rules_to_add = if let Some(filter) = rules_filter {
        let rule_names: Vec<&str> = filter.split(',').map(str::trim).collect();
        filter_rules(&rule_names)
    } else {
        preset.rules()
    };

    for rule in rules_to_add {
        builder = builder.rule_box(rule);
    }

    let analyzer = builder.build().context("Failed to build analyzer")?;

    tracing::info!("Analyzing {:?} with {} rules", path, analyzer.rule_count());

    let result = analyzer.analyze().context("Analysis failed")?;

    // Output results
    super::output::print(&result, format)?;

    // Exit with error code if there are errors
    if result.has_errors() {
        std::process::exit(1);
    }

    Ok(())
}

fn resolve_preset(name: Option<&str>) -> Preset {
    match name {
        Some("strict") => Preset::Strict,
        Some("minimal") => Preset::Minimal,
        Some("recommended") | None => Preset::Recommended,
        Some(other) => {
            tracing::warn!("Unknown preset '{}', using recommended", other);
            Preset::Recommended
        }
    }
}

fn filter_rules(names: &[&str]) -> Vec<RuleBox> {
    let mut rules: Vec<RuleBox> = Vec::new();

    for name in names {
        match *name {
            "require-class-docs" | "DS0001" => rules.push(Box::new(MissingHeader::classes())),
            "require-struct-docs" | "DS0006" => rules.push(Box::new(MissingHeader::structs())),
            "require-method-docs" | "DS1001" => rules.push(Box::new(MissingHeader::methods())),
            "require-interface-docs" | "DS2001" => {
                rules.push(Box::new(MissingHeader::interfaces()));
            }
            "require-property-docs" | "DS3001" => {
                rules.push(Box::new(MissingHeader::properties()));
            }
            "require-interface-member-docs" | "DS3006" => {
                rules.push(Box::new(MissingHeader::interface_members()));
            }
            "require-field-docs" | "DS4001" => rules.push(Box::new(MissingHeader::fields())),
            "require-event-docs" | "DS5001" => rules.push(Box::new(MissingHeader::events())),
            "require-enum-docs" | "DS6001" => rules.push(Box::new(MissingHeader::enums())),
            "require-delegate-docs" | "DS7001" => {
                rules.push(Box::new(MissingHeader::delegates()));
            }
            "blank-line-before-header" | "DS8000" => {
                rules.push(Box::new(BlankLineBeforeHeader::new()));
            }
            "all" => rules.extend(recommended_rules()),
            _ => tracing::warn!("Unknown rule: {}", name),
        }
    }

    rules
}
