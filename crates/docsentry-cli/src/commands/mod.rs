//! CLI subcommand implementations.

/// `docsentry check` — run lint rules over declaration dumps.
pub mod check;
/// `docsentry init` — write a starter configuration file.
pub mod init;
/// `docsentry list-rules` — print the rule registry.
pub mod list_rules;
/// Output formatting shared by the check command.
pub mod output;
/// `docsentry suggest` — preview synthesized summaries.
pub mod suggest;
