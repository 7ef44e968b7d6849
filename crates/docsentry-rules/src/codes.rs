//! Rule code registry.
//!
//! Codes are a `DS` prefix plus a four-digit number, with a block reserved
//! per declaration kind:
//!
//! - DS0001-0005 classes, DS0006-0010 structs
//! - DS1001-1005 methods, constructors and operators (shared block);
//!   DS1006 static constructors
//! - DS2001-2005 interfaces
//! - DS3001-3005 properties and indexers (shared block);
//!   DS3006-3008 interface members (property, indexer, method)
//! - DS4001-4005 fields
//! - DS5001-5005 events (both syntactic forms)
//! - DS6001-6005 enums
//! - DS7001-7005 delegates
//! - DS8000 blank-line-before-header
//! - DS9001-9005 reserved for experimental rules, never shipped in presets
//!
//! Within a block the bucket order is fixed: public, internal,
//! internal protected, protected, private.

use docsentry_core::{DeclKind, VisibilityBucket};

/// Code for the blank-line-before-header rule.
pub const BLANK_LINE: &str = "DS8000";

/// Code for an undocumented interface property member.
pub const INTERFACE_PROPERTY: &str = "DS3006";

/// Code for an undocumented interface indexer member.
pub const INTERFACE_INDEXER: &str = "DS3007";

/// Code for an undocumented interface method member.
pub const INTERFACE_METHOD: &str = "DS3008";

/// Returns the rule code for an undocumented declaration of the given kind
/// and visibility bucket.
///
/// Returns `None` for combinations with no assigned code (the Static bucket
/// outside constructors).
#[must_use]
pub fn bucket_code(kind: DeclKind, bucket: VisibilityBucket) -> Option<&'static str> {
    use DeclKind as K;
    use VisibilityBucket as B;

    let code = match (kind, bucket) {
        (K::Class, B::Public) => "DS0001",
        (K::Class, B::Internal) => "DS0002",
        (K::Class, B::InternalProtected) => "DS0003",
        (K::Class, B::Protected) => "DS0004",
        (K::Class, B::Private) => "DS0005",

        (K::Struct, B::Public) => "DS0006",
        (K::Struct, B::Internal) => "DS0007",
        (K::Struct, B::InternalProtected) => "DS0008",
        (K::Struct, B::Protected) => "DS0009",
        (K::Struct, B::Private) => "DS0010",

        (K::Method | K::Constructor | K::Operator, B::Public) => "DS1001",
        (K::Method | K::Constructor | K::Operator, B::Internal) => "DS1002",
        (K::Method | K::Constructor | K::Operator, B::InternalProtected) => "DS1003",
        (K::Method | K::Constructor | K::Operator, B::Protected) => "DS1004",
        (K::Method | K::Constructor | K::Operator, B::Private) => "DS1005",
        (K::Constructor, B::Static) => "DS1006",

        (K::Interface, B::Public) => "DS2001",
        (K::Interface, B::Internal) => "DS2002",
        (K::Interface, B::InternalProtected) => "DS2003",
        (K::Interface, B::Protected) => "DS2004",
        (K::Interface, B::Private) => "DS2005",

        (K::Property | K::Indexer, B::Public) => "DS3001",
        (K::Property | K::Indexer, B::Internal) => "DS3002",
        (K::Property | K::Indexer, B::InternalProtected) => "DS3003",
        (K::Property | K::Indexer, B::Protected) => "DS3004",
        (K::Property | K::Indexer, B::Private) => "DS3005",

        (K::Field, B::Public) => "DS4001",
        (K::Field, B::Internal) => "DS4002",
        (K::Field, B::InternalProtected) => "DS4003",
        (K::Field, B::Protected) => "DS4004",
        (K::Field, B::Private) => "DS4005",

        (K::Event, B::Public) => "DS5001",
        (K::Event, B::Internal) => "DS5002",
        (K::Event, B::InternalProtected) => "DS5003",
        (K::Event, B::Protected) => "DS5004",
        (K::Event, B::Private) => "DS5005",

        (K::Enum, B::Public) => "DS6001",
        (K::Enum, B::Internal) => "DS6002",
        (K::Enum, B::InternalProtected) => "DS6003",
        (K::Enum, B::Protected) => "DS6004",
        (K::Enum, B::Private) => "DS6005",

        (K::Delegate, B::Public) => "DS7001",
        (K::Delegate, B::Internal) => "DS7002",
        (K::Delegate, B::InternalProtected) => "DS7003",
        (K::Delegate, B::Protected) => "DS7004",
        (K::Delegate, B::Private) => "DS7005",

        (_, B::Static) => return None,
    };
    Some(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_a_public_code() {
        use DeclKind::*;
        for kind in [
            Class, Struct, Interface, Enum, Delegate, Method, Constructor, Property, Indexer,
            Field, Event, Operator,
        ] {
            assert!(
                bucket_code(kind, VisibilityBucket::Public).is_some(),
                "kind {kind:?}"
            );
        }
    }

    #[test]
    fn constructors_and_methods_share_the_block() {
        assert_eq!(
            bucket_code(DeclKind::Method, VisibilityBucket::Private),
            bucket_code(DeclKind::Constructor, VisibilityBucket::Private)
        );
        assert_eq!(
            bucket_code(DeclKind::Operator, VisibilityBucket::Public),
            Some("DS1001")
        );
    }

    #[test]
    fn static_bucket_is_constructor_only() {
        assert_eq!(
            bucket_code(DeclKind::Constructor, VisibilityBucket::Static),
            Some("DS1006")
        );
        assert_eq!(bucket_code(DeclKind::Method, VisibilityBucket::Static), None);
        assert_eq!(bucket_code(DeclKind::Class, VisibilityBucket::Static), None);
    }

    #[test]
    fn blocks_do_not_collide() {
        use std::collections::HashSet;
        use DeclKind::*;
        use VisibilityBucket::*;

        let mut seen: HashSet<&str> = HashSet::new();
        // Method/Constructor/Operator and Property/Indexer intentionally
        // share blocks; check the distinct kinds only.
        for kind in [Class, Struct, Interface, Enum, Delegate, Method, Property, Field, Event] {
            for bucket in [Public, Internal, InternalProtected, Protected, Private] {
                let code = bucket_code(kind, bucket).expect("assigned");
                assert!(seen.insert(code), "duplicate code {code}");
            }
        }
    }
}
