//! Rule presets for common configurations.

use crate::{BlankLineBeforeHeader, MissingHeader};
use docsentry_core::{RuleBox, Severity};

/// Preset configurations for docsentry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Recommended rules with sensible defaults.
    Recommended,
    /// Strict rules: everything reported as errors.
    Strict,
    /// Minimal rules for gradual adoption: public API surface only.
    Minimal,
}

impl Preset {
    /// Returns the rules for this preset.
    #[must_use]
    pub fn rules(self) -> Vec<RuleBox> {
        match self {
            Self::Recommended => recommended_rules(),
            Self::Strict => strict_rules(),
            Self::Minimal => minimal_rules(),
        }
    }
}

/// Returns the recommended set of rules: every missing-header rule plus the
/// blank-line formatting rule, all at warning severity.
#[must_use]
pub fn recommended_rules() -> Vec<RuleBox> {
    vec![
        Box::new(MissingHeader::classes()),
        Box::new(MissingHeader::structs()),
        Box::new(MissingHeader::interfaces()),
        Box::new(MissingHeader::enums()),
        Box::new(MissingHeader::delegates()),
        Box::new(MissingHeader::methods()),
        Box::new(MissingHeader::properties()),
        Box::new(MissingHeader::fields()),
        Box::new(MissingHeader::events()),
        Box::new(MissingHeader::interface_members()),
        Box::new(BlankLineBeforeHeader::new()),
    ]
}

/// Returns the strict set of rules: the recommended set at error severity.
#[must_use]
pub fn strict_rules() -> Vec<RuleBox> {
    vec![
        Box::new(MissingHeader::classes().severity(Severity::Error)),
        Box::new(MissingHeader::structs().severity(Severity::Error)),
        Box::new(MissingHeader::interfaces().severity(Severity::Error)),
        Box::new(MissingHeader::enums().severity(Severity::Error)),
        Box::new(MissingHeader::delegates().severity(Severity::Error)),
        Box::new(MissingHeader::methods().severity(Severity::Error)),
        Box::new(MissingHeader::properties().severity(Severity::Error)),
        Box::new(MissingHeader::fields().severity(Severity::Error)),
        Box::new(MissingHeader::events().severity(Severity::Error)),
        Box::new(MissingHeader::interface_members().severity(Severity::Error)),
        Box::new(BlankLineBeforeHeader::new().severity(Severity::Error)),
    ]
}

/// Returns the minimal set of rules: types, interfaces and methods only,
/// for teams documenting their public surface first.
#[must_use]
pub fn minimal_rules() -> Vec<RuleBox> {
    vec![
        Box::new(MissingHeader::classes()),
        Box::new(MissingHeader::interfaces()),
        Box::new(MissingHeader::methods()),
    ]
}

/// Returns all available rules.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    recommended_rules()
}
