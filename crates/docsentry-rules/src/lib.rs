//! # docsentry-rules
//!
//! Built-in rules for docsentry.
//!
//! The missing-header rules share one parameterized implementation
//! ([`MissingHeader`]) instantiated per declaration kind; the
//! [`BlankLineBeforeHeader`] rule checks header formatting independently.
//! Rule codes are assigned in per-kind blocks by the [`codes`] registry.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod codes;

mod blank_line;
mod missing_header;
mod presets;

pub use blank_line::BlankLineBeforeHeader;
pub use missing_header::MissingHeader;
pub use presets::{all_rules, minimal_rules, recommended_rules, strict_rules, Preset};
