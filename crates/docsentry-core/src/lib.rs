//! # docsentry-core
//!
//! Core framework for documentation-header linting over declaration dumps.
//!
//! A host front end parses source code and emits one JSON [`FileDump`] per
//! file; this crate supplies everything needed to judge those dumps:
//!
//! - [`Declaration`] and friends: the dump data model
//! - [`bucket_of`]: visibility bucketing with fixed precedence
//! - [`synth`]: identifier-to-summary synthesis for fix suggestions
//! - [`trivia`]: blank-line checks over leading trivia
//! - [`Rule`] trait and [`Analyzer`] for orchestrating lint execution
//! - [`Violation`] and [`LintResult`] for reporting
//!
//! ## Example
//!
//! ```ignore
//! use docsentry_core::Analyzer;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./dumps")
//!     .rule(MyRule::new())
//!     .build()?;
//!
//! let result = analyzer.analyze()?;
//! result.print_report();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod context;
mod decl;
mod rule;
mod types;
mod visibility;

pub mod synth;
pub mod trivia;
pub mod vocabulary;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use config::{AnalyzerConfig, Config, ConfigError, RuleConfig};
pub use context::FileContext;
pub use decl::{
    DeclKind, Declaration, Declarator, DocBlock, FileDump, Modifier, Param, ParentKind,
    PrecedingToken, Span, Trivia, TriviaKind,
};
pub use rule::{Rule, RuleBox};
pub use types::{
    LintResult, Location, Replacement, Severity, Suggestion, Violation, ViolationDiagnostic,
};
pub use visibility::{bucket_of, VisibilityBucket};
