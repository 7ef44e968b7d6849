//! Rules requiring a documentation header on declarations.
//!
//! # Rationale
//!
//! Declarations without a summary header are invisible to generated API
//! documentation. Each declaration kind owns a block of rule codes, one per
//! visibility bucket, so teams can suppress (say) private-field diagnostics
//! while keeping the public surface strict.
//!
//! # Design
//!
//! A single parameterized implementation covers every kind; the per-kind
//! rules differ only in their [`KindProfile`] (matched kinds, diagnostic
//! noun, anchor selection, interface-member handling). A declaration whose
//! documentation block contains a summary section is never flagged,
//! regardless of content quality.

use crate::codes;
use docsentry_core::synth;
use docsentry_core::{
    bucket_of, DeclKind, Declaration, FileContext, FileDump, Location, ParentKind, Replacement,
    Rule, Severity, Span, Suggestion, Violation, VisibilityBucket,
};
use std::path::Path;

/// Static description of one missing-header rule variant.
#[derive(Debug, Clone, Copy)]
struct KindProfile {
    name: &'static str,
    code: &'static str,
    description: &'static str,
    kinds: &'static [DeclKind],
    /// True for the implied-public interface-member rule; bucketed rules
    /// skip interface members so the two never double-report.
    interface_members: bool,
}

/// Requires a documentation header on declarations of one kind group.
#[derive(Debug, Clone)]
pub struct MissingHeader {
    profile: KindProfile,
    severity: Severity,
}

impl MissingHeader {
    fn with_profile(profile: KindProfile) -> Self {
        Self {
            profile,
            severity: Severity::Warning,
        }
    }

    /// Rule for class declarations (DS0001-0005).
    #[must_use]
    pub fn classes() -> Self {
        Self::with_profile(KindProfile {
            name: "require-class-docs",
            code: "DS0001",
            description: "Requires a documentation header on class declarations",
            kinds: &[DeclKind::Class],
            interface_members: false,
        })
    }

    /// Rule for struct declarations (DS0006-0010).
    #[must_use]
    pub fn structs() -> Self {
        Self::with_profile(KindProfile {
            name: "require-struct-docs",
            code: "DS0006",
            description: "Requires a documentation header on struct declarations",
            kinds: &[DeclKind::Struct],
            interface_members: false,
        })
    }

    /// Rule for interface declarations (DS2001-2005).
    #[must_use]
    pub fn interfaces() -> Self {
        Self::with_profile(KindProfile {
            name: "require-interface-docs",
            code: "DS2001",
            description: "Requires a documentation header on interface declarations",
            kinds: &[DeclKind::Interface],
            interface_members: false,
        })
    }

    /// Rule for enum declarations (DS6001-6005).
    #[must_use]
    pub fn enums() -> Self {
        Self::with_profile(KindProfile {
            name: "require-enum-docs",
            code: "DS6001",
            description: "Requires a documentation header on enum declarations",
            kinds: &[DeclKind::Enum],
            interface_members: false,
        })
    }

    /// Rule for delegate declarations (DS7001-7005).
    #[must_use]
    pub fn delegates() -> Self {
        Self::with_profile(KindProfile {
            name: "require-delegate-docs",
            code: "DS7001",
            description: "Requires a documentation header on delegate declarations",
            kinds: &[DeclKind::Delegate],
            interface_members: false,
        })
    }

    /// Rule for methods, constructors and operators (DS1001-1006).
    #[must_use]
    pub fn methods() -> Self {
        Self::with_profile(KindProfile {
            name: "require-method-docs",
            code: "DS1001",
            description: "Requires a documentation header on methods, constructors and operators",
            kinds: &[DeclKind::Method, DeclKind::Constructor, DeclKind::Operator],
            interface_members: false,
        })
    }

    /// Rule for properties and indexers (DS3001-3005).
    #[must_use]
    pub fn properties() -> Self {
        Self::with_profile(KindProfile {
            name: "require-property-docs",
            code: "DS3001",
            description: "Requires a documentation header on properties and indexers",
            kinds: &[DeclKind::Property, DeclKind::Indexer],
            interface_members: false,
        })
    }

    /// Rule for fields (DS4001-4005).
    #[must_use]
    pub fn fields() -> Self {
        Self::with_profile(KindProfile {
            name: "require-field-docs",
            code: "DS4001",
            description: "Requires a documentation header on field declarations",
            kinds: &[DeclKind::Field],
            interface_members: false,
        })
    }

    /// Rule for events, field-style and accessor-style (DS5001-5005).
    #[must_use]
    pub fn events() -> Self {
        Self::with_profile(KindProfile {
            name: "require-event-docs",
            code: "DS5001",
            description: "Requires a documentation header on event declarations",
            kinds: &[DeclKind::Event],
            interface_members: false,
        })
    }

    /// Rule for members declared inside an interface (DS3006-3008).
    ///
    /// Interface members are implicitly public; visibility bucketing does
    /// not apply.
    #[must_use]
    pub fn interface_members() -> Self {
        Self::with_profile(KindProfile {
            name: "require-interface-member-docs",
            code: codes::INTERFACE_PROPERTY,
            description: "Requires a documentation header on interface members",
            kinds: &[DeclKind::Property, DeclKind::Indexer, DeclKind::Method],
            interface_members: true,
        })
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    fn check_declaration(&self, decl: &Declaration, file: &Path, out: &mut Vec<Violation>) {
        if !self.profile.kinds.contains(&decl.kind) {
            return;
        }
        if decl.is_documented() {
            return;
        }

        let in_interface = decl.parent == ParentKind::Interface;
        if self.profile.interface_members {
            if !in_interface {
                return;
            }
            self.report_interface_member(decl, file, out);
            return;
        }

        // Interface members are covered by the implied-public rule; never
        // double-report them here.
        if in_interface
            && matches!(
                decl.kind,
                DeclKind::Method | DeclKind::Property | DeclKind::Indexer
            )
        {
            return;
        }

        let bucket = bucket_of(decl);

        if decl.kind == DeclKind::Operator {
            self.report_operator(decl, bucket, file, out);
            return;
        }

        let Some(code) = codes::bucket_code(decl.kind, bucket) else {
            return;
        };

        let (span, name) = match anchor_of(decl) {
            Some(anchor) => anchor,
            // Malformed shape (e.g. a field with no declarator): no verdict.
            None => return,
        };

        out.push(self.violation(code, decl, bucket, span, name, file));
    }

    /// Operators are only checked when public, and report at two locations:
    /// the operator keyword and the operator symbol token.
    fn report_operator(
        &self,
        decl: &Declaration,
        bucket: VisibilityBucket,
        file: &Path,
        out: &mut Vec<Violation>,
    ) {
        if bucket != VisibilityBucket::Public {
            return;
        }
        let Some(symbol_span) = decl.operator_span else {
            return;
        };
        let Some(code) = codes::bucket_code(DeclKind::Operator, bucket) else {
            return;
        };
        out.push(self.violation(code, decl, bucket, decl.span, &decl.name, file));
        out.push(self.violation(code, decl, bucket, symbol_span, &decl.name, file));
    }

    fn report_interface_member(&self, decl: &Declaration, file: &Path, out: &mut Vec<Violation>) {
        let code = match decl.kind {
            DeclKind::Property => codes::INTERFACE_PROPERTY,
            DeclKind::Indexer => codes::INTERFACE_INDEXER,
            _ => codes::INTERFACE_METHOD,
        };
        let location = Location::from_span(file.to_path_buf(), decl.span);
        let message = format!(
            "The interface {} `{}` must have a documentation header [{code}]",
            decl.kind.noun(),
            decl.name
        );
        out.push(
            Violation::new(code, self.profile.name, self.severity, location.clone(), message)
                .with_suggestion(Suggestion::with_fix(
                    "Add a documentation header",
                    Replacement::new(location, synth::summary_for(decl)),
                )),
        );
    }

    fn violation(
        &self,
        code: &'static str,
        decl: &Declaration,
        bucket: VisibilityBucket,
        span: Span,
        name: &str,
        file: &Path,
    ) -> Violation {
        let location = Location::from_span(file.to_path_buf(), span);
        let message = format!(
            "The {} {} `{name}` must have a documentation header [{code}]",
            bucket.label(),
            decl.kind.noun(),
        );
        Violation::new(code, self.profile.name, self.severity, location.clone(), message)
            .with_suggestion(Suggestion::with_fix(
                "Add a documentation header",
                Replacement::new(location, synth::summary_for(decl)),
            ))
    }
}

/// Selects the anchor span and display name for a declaration.
///
/// Fields and field-style events anchor at their first declarator; a field
/// without any declarator yields no anchor (and no verdict).
fn anchor_of(decl: &Declaration) -> Option<(Span, &str)> {
    match decl.kind {
        DeclKind::Field => decl
            .first_declarator()
            .map(|d| (d.span, d.name.as_str())),
        DeclKind::Event => Some(
            decl.first_declarator()
                .map_or((decl.span, decl.name.as_str()), |d| {
                    (d.span, d.name.as_str())
                }),
        ),
        _ => Some((decl.span, decl.name.as_str())),
    }
}

impl Rule for MissingHeader {
    fn name(&self) -> &'static str {
        self.profile.name
    }

    fn code(&self) -> &'static str {
        self.profile.code
    }

    fn description(&self) -> &'static str {
        self.profile.description
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, _ctx: &FileContext, dump: &FileDump) -> Vec<Violation> {
        let mut violations = Vec::new();
        for decl in &dump.declarations {
            self.check_declaration(decl, &dump.file, &mut violations);
        }
        violations
    }
}
