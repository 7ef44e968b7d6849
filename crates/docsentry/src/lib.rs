//! # docsentry
//!
//! Documentation-header linter over declaration dumps.
//!
//! This is the main facade crate that re-exports core functionality and rules.
//!
//! ## Quick Start — `cargo test` Integration
//!
//! ```toml
//! [dev-dependencies]
//! docsentry = "0.4"
//! ```
//!
//! ```rust,ignore
//! // tests/documentation.rs
//! #[test]
//! fn documentation_headers() {
//!     docsentry::run_as_test(None, None, None);
//! }
//! ```
//!
//! This runs docsentry as part of `cargo test`. Configure via `docsentry.toml`.
//!
//! ## Programmatic Usage
//!
//! ```rust,ignore
//! use docsentry::Analyzer;
//! use docsentry::rules::Preset;
//!
//! let mut builder = Analyzer::builder().root("./dumps");
//! for rule in Preset::Recommended.rules() {
//!     builder = builder.rule_box(rule);
//! }
//!
//! let result = builder.build()?.analyze()?;
//! result.print_report();
//! ```

#![forbid(unsafe_code)]

// Re-export core types and traits
pub use docsentry_core::*;

/// Built-in rules and presets.
pub mod rules {
    pub use docsentry_rules::*;
}

mod runner;

pub use runner::run_as_test;
