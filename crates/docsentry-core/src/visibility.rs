//! Visibility bucketing for undocumented declarations.
//!
//! Every declaration kind shares the same dispatch: the modifier set (plus
//! the parent node for default-access semantics) maps to exactly one bucket,
//! and each (kind, bucket) pair owns a distinct rule code.

use crate::decl::{DeclKind, Declaration, Modifier, ParentKind};
use serde::{Deserialize, Serialize};

/// Visibility bucket of a declaration.
///
/// Buckets are mutually exclusive; [`bucket_of`] assigns exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisibilityBucket {
    /// Explicit `public`.
    Public,
    /// Explicit `internal`, or a top-level type without an access modifier.
    Internal,
    /// Both `internal` and `protected` present.
    InternalProtected,
    /// Explicit `protected`.
    Protected,
    /// Explicit `private`, or a nested member without an access modifier.
    Private,
    /// A static constructor.
    Static,
}

impl VisibilityBucket {
    /// Display label embedded in diagnostic messages.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Internal => "internal",
            Self::InternalProtected => "internal protected",
            Self::Protected => "protected",
            Self::Private => "private",
            Self::Static => "static",
        }
    }
}

impl std::fmt::Display for VisibilityBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Assigns the visibility bucket for a declaration.
///
/// Fixed precedence, first match wins:
///
/// 1. `public`
/// 2. `private`
/// 3. `static` (constructors only)
/// 4. `internal` + `protected`
/// 5. `internal`
/// 6. `protected`
/// 7. no access modifier, parent is a namespace (top-level type defaults
///    to internal)
/// 8. otherwise private (default member access)
#[must_use]
pub fn bucket_of(decl: &Declaration) -> VisibilityBucket {
    if decl.has_modifier(Modifier::Public) {
        return VisibilityBucket::Public;
    }
    if decl.has_modifier(Modifier::Private) {
        return VisibilityBucket::Private;
    }
    if decl.kind == DeclKind::Constructor && decl.has_modifier(Modifier::Static) {
        return VisibilityBucket::Static;
    }
    let internal = decl.has_modifier(Modifier::Internal);
    let protected = decl.has_modifier(Modifier::Protected);
    if internal && protected {
        return VisibilityBucket::InternalProtected;
    }
    if internal {
        return VisibilityBucket::Internal;
    }
    if protected {
        return VisibilityBucket::Protected;
    }
    if decl.parent == ParentKind::Namespace {
        return VisibilityBucket::Internal;
    }
    VisibilityBucket::Private
}
