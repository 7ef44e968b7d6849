//! Static verb and special-name tables used by the summary synthesizer.
//!
//! Both tables are process-wide constants; lookups are case-insensitive and
//! absence is a normal outcome, not an error.

/// Known action verbs checked against the first word of a method name.
const VERBS: &[&str] = &[
    "add", "append", "apply", "build", "calculate", "call", "cancel", "check", "clean", "clear",
    "clone", "close", "collect", "compare", "compute", "configure", "connect", "convert", "copy",
    "create", "delete", "disable", "dispatch", "dispose", "emit", "enable", "ensure", "execute",
    "export", "fetch", "fill", "filter", "find", "flush", "format", "generate", "get", "handle",
    "import", "initialize", "insert", "invoke", "load", "lookup", "merge", "move", "notify",
    "open", "parse", "populate", "prepare", "process", "publish", "query", "read", "refresh",
    "register", "release", "remove", "render", "reset", "resolve", "restore", "retrieve", "run",
    "save", "search", "select", "send", "set", "sort", "start", "stop", "submit", "subscribe",
    "try", "unregister", "update", "validate", "verify", "write",
];

/// Fixed prose for a small set of well-known declaration names: the program
/// entry point and test-framework lifecycle hooks under the MSTest and NUnit
/// naming conventions.
const SPECIAL_NAMES: &[(&str, &str)] = &[
    ("main", "The main entry point for the application."),
    // MSTest lifecycle hooks.
    ("assemblyinitialize", "Initializes the test assembly."),
    ("assemblycleanup", "Cleans up the test assembly."),
    ("classinitialize", "Initializes the test class."),
    ("classcleanup", "Cleans up the test class."),
    ("testinitialize", "Initializes the test."),
    ("testcleanup", "Cleans up the test."),
    // NUnit lifecycle hooks.
    ("onetimesetup", "Initializes the test class."),
    ("onetimeteardown", "Cleans up the test class."),
    ("setup", "Initializes the test."),
    ("teardown", "Cleans up the test."),
];

/// Tests whether a word is a known verb, case-insensitively.
#[must_use]
pub fn is_verb(word: &str) -> bool {
    VERBS.iter().any(|v| word.eq_ignore_ascii_case(v))
}

/// Returns the fixed documentation sentence for a special declaration name,
/// or `None` when the name is not special.
#[must_use]
pub fn special_declaration_text(name: &str) -> Option<&'static str> {
    SPECIAL_NAMES
        .iter()
        .find(|(special, _)| name.eq_ignore_ascii_case(special))
        .map(|(_, text)| *text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_verb_is_case_insensitive() {
        assert!(is_verb("Get"));
        assert!(is_verb("get"));
        assert!(is_verb("GET"));
    }

    #[test]
    fn unknown_words_are_not_verbs() {
        assert!(!is_verb("Frobnicate"));
        assert!(!is_verb(""));
    }

    #[test]
    fn entry_point_is_special() {
        assert_eq!(
            special_declaration_text("Main"),
            Some("The main entry point for the application.")
        );
    }

    #[test]
    fn lifecycle_hooks_are_special() {
        assert_eq!(
            special_declaration_text("TestInitialize"),
            Some("Initializes the test.")
        );
        assert_eq!(
            special_declaration_text("SetUp"),
            Some("Initializes the test.")
        );
        assert_eq!(
            special_declaration_text("OneTimeTearDown"),
            Some("Cleans up the test class.")
        );
    }

    #[test]
    fn ordinary_names_are_not_special() {
        assert_eq!(special_declaration_text("FetchUsers"), None);
    }
}
