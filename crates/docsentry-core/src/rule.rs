//! Rule trait for defining documentation lint rules.

use crate::context::FileContext;
use crate::decl::FileDump;
use crate::types::{Severity, Violation};

/// A per-file lint rule over a declaration dump.
///
/// Each check is a pure function over one file's declarations; rules hold no
/// mutable state and may be run concurrently across files.
///
/// # Example
///
/// ```ignore
/// use docsentry_core::{FileContext, FileDump, Rule, Severity, Violation};
///
/// pub struct NoEmptyNames;
///
/// impl Rule for NoEmptyNames {
///     fn name(&self) -> &'static str { "no-empty-names" }
///     fn code(&self) -> &'static str { "DS9001" }
///
///     fn check(&self, ctx: &FileContext, dump: &FileDump) -> Vec<Violation> {
///         // inspect dump.declarations ...
///         Vec::new()
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "require-class-docs").
    fn name(&self) -> &'static str;

    /// Returns the representative rule code (e.g., "DS0001").
    ///
    /// Rules that dispatch on visibility buckets own a block of codes; this
    /// returns the first code of the block.
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    ///
    /// Documentation diagnostics are informational warnings, not failures.
    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    /// Checks a single dump and returns any violations found.
    fn check(&self, ctx: &FileContext, dump: &FileDump) -> Vec<Violation>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;
