//! Summary synthesis: turns an identifier into a plausible one-sentence
//! documentation summary.
//!
//! All functions are total; empty or unusual identifiers degrade to a
//! generic templated sentence instead of failing. The synthesized text is
//! used as the replacement in missing-header fix suggestions.

use crate::decl::{DeclKind, Declaration, Modifier};
use crate::vocabulary::{is_verb, special_declaration_text};

/// Splits an identifier into words at casing boundaries and underscores.
///
/// A space is inserted before an uppercase letter that follows a lowercase
/// letter, or that follows any letter and precedes a lowercase letter. This
/// keeps acronym runs together (`UserID` splits to `User`, `ID`) while still
/// splitting at the transition back to lowercase (`XMLParser` splits to
/// `XML`, `Parser`). Splitting is lossless over letter and digit content.
#[must_use]
pub fn split_words(identifier: &str) -> Vec<String> {
    let chars: Vec<char> = identifier.chars().collect();
    let mut spaced = String::with_capacity(identifier.len() + 8);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || (prev.is_alphabetic() && next_is_lower) {
                spaced.push(' ');
            }
        }
        if c == '_' {
            spaced.push(' ');
        } else {
            spaced.push(c);
        }
    }

    spaced.split_whitespace().map(str::to_string).collect()
}

/// Lowercases words, preserving acronyms and the pronoun "I".
///
/// Words whose second character is uppercase are left untouched (acronym or
/// proper-noun fragments such as `ID` or `XMLs`). A single-letter word equal
/// to "i" in any case becomes "I"; other single letters are lowercased.
/// When `include_first` is false the first word keeps its original casing.
#[must_use]
pub fn lower_words(words: &[String], include_first: bool) -> Vec<String> {
    words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            if i == 0 && !include_first {
                return word.clone();
            }
            normalize_word(word)
        })
        .collect()
}

fn normalize_word(word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    match chars.next() {
        None => {
            if first.eq_ignore_ascii_case(&'i') {
                "I".to_string()
            } else {
                word.to_lowercase()
            }
        }
        Some(second) if second.is_uppercase() => word.to_string(),
        Some(_) => word.to_lowercase(),
    }
}

/// Splits, lowercases and joins an identifier, falling back to the
/// lowercased raw text when no words are found.
fn phrase(identifier: &str) -> String {
    let words = lower_words(&split_words(identifier), true);
    if words.is_empty() {
        identifier.to_lowercase()
    } else {
        words.join(" ")
    }
}

/// Summary for a type declaration (class, struct, enum, delegate).
///
/// The kind noun is appended unless the identifier's last word already
/// contains it; detected test classes read "unit test class" instead.
#[must_use]
pub fn type_summary(name: &str, kind: DeclKind, is_test: bool) -> String {
    let noun = match (kind, is_test) {
        (DeclKind::Class, true) => "unit test class",
        _ => kind.noun(),
    };
    let words = lower_words(&split_words(name), true);
    if words.is_empty() {
        return format!("The {} {noun}.", name.to_lowercase());
    }
    let keyword = kind.noun();
    let last_has_noun = words
        .last()
        .is_some_and(|w| w.to_lowercase().contains(keyword));
    let joined = words.join(" ");
    if last_has_noun {
        format!("The {joined}.")
    } else {
        format!("The {joined} {noun}.")
    }
}

/// Summary for an interface declaration: fixed template, no word splitting.
#[must_use]
pub fn interface_summary(name: &str) -> String {
    format!("The {name} interface.")
}

/// Summary for a method or constructor-like name.
///
/// Special names (entry point, test lifecycle hooks) short-circuit to fixed
/// prose. Underscore-named test methods get the given/when/then treatment.
/// `On` prefixes read as event raisers, a leading verb keeps its casing, and
/// anything else falls back to "The ...".
#[must_use]
pub fn method_summary(name: &str, is_test: bool) -> String {
    if let Some(text) = special_declaration_text(name) {
        return text.to_string();
    }

    if is_test && name.contains('_') {
        if let Some(text) = test_method_summary(name) {
            return text;
        }
    }

    let words = split_words(name);
    let Some(first) = words.first() else {
        return format!("The {}.", name.to_lowercase());
    };

    if first.eq_ignore_ascii_case("on") {
        let rest = lower_words(&words[1..], true);
        return if rest.is_empty() {
            "Raises the event.".to_string()
        } else {
            format!("Raises the {} event.", rest.join(" "))
        };
    }

    if is_verb(first) {
        if words.len() == 1 {
            return format!("{first}.");
        }
        let rest = lower_words(&words[1..], true);
        return format!("{first} the {}.", rest.join(" "));
    }

    format!("The {}.", lower_words(&words, true).join(" "))
}

/// Given/when/then rendering for underscore-named test methods.
///
/// Each underscore-separated segment is split and lowercased independently;
/// segments that split into a single word are dropped. Returns `None` when
/// nothing non-trivial remains.
fn test_method_summary(name: &str) -> Option<String> {
    let parts: Vec<String> = name
        .split('_')
        .filter_map(|segment| {
            let words = lower_words(&split_words(segment), true);
            (words.len() > 1).then(|| words.join(" "))
        })
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" --> "))
    }
}

/// Summary for a field, with const/readonly labels and initializer value.
#[must_use]
pub fn field_summary(
    name: &str,
    is_const: bool,
    is_readonly: bool,
    initializer: Option<&str>,
) -> String {
    let mut text = format!("The {}", phrase(name));
    if is_const {
        text.push_str(" (const)");
    }
    if is_readonly {
        text.push_str(" (readonly)");
    }
    text.push('.');
    if is_const || is_readonly {
        if let Some(init) = initializer {
            text.push_str(" Value: ");
            text.push_str(&normalize_initializer(init));
            text.push('.');
        }
    }
    text
}

/// Normalizes an initializer expression to a single display line.
///
/// Lines are trimmed and joined with single spaces, `"( "` collapses to
/// `"("`, and angle brackets are HTML-escaped. Best effort; never fails.
#[must_use]
pub fn normalize_initializer(text: &str) -> String {
    let joined = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    joined
        .replace("( ", "(")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Summary for a property or indexer.
///
/// The verb comes from the accessor shape, never from the name. Boolean
/// properties are left intentionally open-ended for a human to finish.
#[must_use]
pub fn property_summary(name: &str, has_getter: bool, has_setter: bool, is_boolean: bool) -> String {
    let prefix = match (has_getter, has_setter) {
        (true, true) => "Gets or sets",
        (true, false) => "Gets",
        _ => "Sets",
    };
    if is_boolean {
        return format!("{prefix} a value indicating whether ");
    }
    format!("{prefix} the {}.", phrase(name))
}

/// Summary for a parameter.
///
/// Parameters of `*EventArgs` types are qualified from the type's last
/// dot-separated segment with its final word rewritten to "arguments".
#[must_use]
pub fn parameter_summary(name: &str, type_text: &str) -> String {
    if type_text.to_ascii_lowercase().ends_with("eventargs") {
        let segment = type_text.rsplit('.').next().unwrap_or(type_text);
        let mut words = lower_words(&split_words(segment), true);
        if let Some(last) = words.last_mut() {
            "arguments".clone_into(last);
        }
        if !words.is_empty() {
            return format!("The {}.", words.join(" "));
        }
    }
    format!("The {name}.")
}

/// Cross-reference sentence for a return type.
///
/// A trailing `?` is stripped; array and generic types get the `T:` marker;
/// angle brackets become braces so the cref text stays well-formed.
#[must_use]
pub fn returns_summary(type_text: &str) -> String {
    let trimmed = type_text.trim();
    let trimmed = trimmed.strip_suffix('?').unwrap_or(trimmed);
    let needs_marker = trimmed.ends_with("[]") || trimmed.ends_with('>');
    let cref = trimmed.replace('<', "{").replace('>', "}");
    if needs_marker {
        format!("The <see cref=\"T:{cref}\"/>.")
    } else {
        format!("The <see cref=\"{cref}\"/>.")
    }
}

/// Summary for an event, cross-referencing its delegate type.
///
/// The word "event" is not repeated when it already appears in the name.
#[must_use]
pub fn event_summary(name: &str, delegate_type: &str) -> String {
    let words = lower_words(&split_words(name), true);
    let cref = delegate_type.replace('<', "{").replace('>', "}");
    let joined = if words.is_empty() {
        name.to_lowercase()
    } else {
        words.join(" ")
    };
    let has_event_word = words.iter().any(|w| w.eq_ignore_ascii_case("event"));
    if has_event_word {
        format!("The {joined} of the <see cref=\"{cref}\"/>.")
    } else {
        format!("The {joined} event of the <see cref=\"{cref}\"/>.")
    }
}

/// Synthesizes the summary sentence for a whole declaration.
///
/// This is the entry point used by the missing-header rules to populate fix
/// suggestions; the per-kind functions above remain available for hosts that
/// build richer headers (parameter and returns sections).
#[must_use]
pub fn summary_for(decl: &Declaration) -> String {
    match decl.kind {
        DeclKind::Class | DeclKind::Struct | DeclKind::Enum | DeclKind::Delegate => {
            type_summary(&decl.name, decl.kind, decl.is_test)
        }
        DeclKind::Interface => interface_summary(&decl.name),
        DeclKind::Method | DeclKind::Operator => method_summary(&decl.name, decl.is_test),
        DeclKind::Constructor => constructor_summary(decl),
        DeclKind::Property | DeclKind::Indexer => {
            property_summary(&decl.name, decl.has_getter, decl.has_setter, decl.is_boolean)
        }
        DeclKind::Field => {
            let declarator = decl.first_declarator();
            let name = declarator.map_or(decl.name.as_str(), |d| d.name.as_str());
            let initializer = declarator.and_then(|d| d.initializer.as_deref());
            field_summary(
                name,
                decl.has_modifier(Modifier::Const),
                decl.has_modifier(Modifier::ReadOnly),
                initializer,
            )
        }
        DeclKind::Event => {
            let name = decl
                .first_declarator()
                .map_or(decl.name.as_str(), |d| d.name.as_str());
            let delegate = decl.delegate_type.as_deref().unwrap_or("EventHandler");
            event_summary(name, delegate)
        }
    }
}

fn constructor_summary(decl: &Declaration) -> String {
    if decl.has_modifier(Modifier::Static) {
        format!(
            "Initializes static members of the <see cref=\"{}\"/> class.",
            decl.name
        )
    } else {
        format!(
            "Initializes a new instance of the <see cref=\"{}\"/> class.",
            decl.name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decl::{Declarator, Span};

    fn words(identifier: &str) -> Vec<String> {
        split_words(identifier)
    }

    #[test]
    fn splits_camel_and_pascal_case() {
        assert_eq!(words("GetUserById"), vec!["Get", "User", "By", "Id"]);
        assert_eq!(words("onClick"), vec!["on", "Click"]);
    }

    #[test]
    fn keeps_acronym_runs_together() {
        assert_eq!(words("UserID"), vec!["User", "ID"]);
        assert_eq!(words("XMLParser"), vec!["XML", "Parser"]);
    }

    #[test]
    fn splits_underscores() {
        assert_eq!(words("m_isEnabled"), vec!["m", "is", "Enabled"]);
    }

    #[test]
    fn splitting_is_lossless() {
        for identifier in ["GetUserById", "m_isEnabled", "XMLParser", "HTTP", "x", "value2Go"] {
            let rejoined: String = words(identifier).concat();
            let stripped: String = identifier.chars().filter(|c| *c != '_').collect();
            assert_eq!(rejoined, stripped, "identifier {identifier}");
        }
    }

    #[test]
    fn all_uppercase_identifier_is_a_single_word() {
        assert_eq!(words("HTTP"), vec!["HTTP"]);
    }

    #[test]
    fn single_character_identifier() {
        assert_eq!(words("x"), vec!["x"]);
    }

    #[test]
    fn lowercasing_preserves_acronyms_and_pronoun() {
        let input: Vec<String> = ["Where", "I", "Store", "IDs"]
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            lower_words(&input, true),
            vec!["where", "I", "store", "IDs"]
        );
    }

    #[test]
    fn lowercasing_can_skip_first_word() {
        let input: Vec<String> = ["Get", "User"].iter().map(ToString::to_string).collect();
        assert_eq!(lower_words(&input, false), vec!["Get", "user"]);
    }

    #[test]
    fn class_summary() {
        assert_eq!(
            type_summary("UserRepository", DeclKind::Class, false),
            "The user repository class."
        );
    }

    #[test]
    fn class_summary_does_not_double_the_noun() {
        assert_eq!(
            type_summary("HelperClass", DeclKind::Class, false),
            "The helper class."
        );
    }

    #[test]
    fn test_class_summary() {
        assert_eq!(
            type_summary("LoginTests", DeclKind::Class, true),
            "The login tests unit test class."
        );
    }

    #[test]
    fn struct_enum_delegate_summaries() {
        assert_eq!(
            type_summary("PixelFormat", DeclKind::Struct, false),
            "The pixel format struct."
        );
        assert_eq!(
            type_summary("ColorKind", DeclKind::Enum, false),
            "The color kind enum."
        );
        assert_eq!(
            type_summary("ChangedHandler", DeclKind::Delegate, false),
            "The changed handler delegate."
        );
    }

    #[test]
    fn interface_summary_uses_raw_name() {
        assert_eq!(interface_summary("IUserService"), "The IUserService interface.");
    }

    #[test]
    fn single_verb_method() {
        assert_eq!(method_summary("Fetch", false), "Fetch.");
    }

    #[test]
    fn verb_method_with_object() {
        assert_eq!(method_summary("GetUserById", false), "Get the user by id.");
    }

    #[test]
    fn event_raiser_method() {
        assert_eq!(method_summary("OnClick", false), "Raises the click event.");
    }

    #[test]
    fn non_verb_method_falls_back() {
        assert_eq!(method_summary("UserLookupTable", false), "The user lookup table.");
        assert_eq!(method_summary("Frobnicate", false), "The frobnicate.");
    }

    #[test]
    fn entry_point_short_circuits() {
        assert_eq!(
            method_summary("Main", false),
            "The main entry point for the application."
        );
    }

    #[test]
    fn underscore_test_method_drops_single_word_segments() {
        assert_eq!(
            method_summary("Add_TwoNumbers_ReturnsSum", true),
            "two numbers --> returns sum"
        );
    }

    #[test]
    fn underscore_test_method_with_only_trivial_segments() {
        // All segments split to a single word; fall back to the plain path.
        assert_eq!(method_summary("Add_Works", true), "Add the works.");
    }

    #[test]
    fn underscores_ignored_for_non_test_methods() {
        assert_eq!(method_summary("Do_The_Thing", false), "The do the thing.");
    }

    #[test]
    fn const_field_with_initializer() {
        assert_eq!(
            field_summary("MaxRetries", true, false, Some("5")),
            "The max retries (const). Value: 5."
        );
    }

    #[test]
    fn readonly_and_const_labels_stack() {
        assert_eq!(
            field_summary("Origin", true, true, None),
            "The origin (const) (readonly)."
        );
    }

    #[test]
    fn plain_field_ignores_initializer() {
        assert_eq!(field_summary("count", false, false, Some("0")), "The count.");
    }

    #[test]
    fn initializer_normalizes_to_one_line() {
        let init = "new List<int>(\n    1,\n    2)";
        assert_eq!(
            normalize_initializer(init),
            "new List&lt;int&gt;(1, 2)"
        );
    }

    #[test]
    fn boolean_property_is_open_ended() {
        assert_eq!(
            property_summary("IsEnabled", true, true, true),
            "Gets or sets a value indicating whether "
        );
    }

    #[test]
    fn property_prefix_follows_accessors() {
        assert_eq!(property_summary("UserName", true, false, false), "Gets the user name.");
        assert_eq!(property_summary("UserName", false, true, false), "Sets the user name.");
        assert_eq!(
            property_summary("UserName", true, true, false),
            "Gets or sets the user name."
        );
    }

    #[test]
    fn event_args_parameter() {
        assert_eq!(
            parameter_summary("e", "System.Windows.MouseClickEventArgs"),
            "The mouse click event arguments."
        );
    }

    #[test]
    fn ordinary_parameter_uses_its_name() {
        assert_eq!(parameter_summary("userId", "int"), "The userId.");
    }

    #[test]
    fn returns_summary_marks_generics_and_arrays() {
        assert_eq!(
            returns_summary("List<int>"),
            "The <see cref=\"T:List{int}\"/>."
        );
        assert_eq!(returns_summary("byte[]"), "The <see cref=\"T:byte[]\"/>.");
        assert_eq!(returns_summary("string?"), "The <see cref=\"string\"/>.");
    }

    #[test]
    fn event_summary_crosses_reference_delegate() {
        assert_eq!(
            event_summary("Clicked", "EventHandler<ClickArgs>"),
            "The clicked event of the <see cref=\"EventHandler{ClickArgs}\"/>."
        );
    }

    #[test]
    fn event_summary_does_not_repeat_event_word() {
        assert_eq!(
            event_summary("ClosedEvent", "EventHandler"),
            "The closed event of the <see cref=\"EventHandler\"/>."
        );
    }

    #[test]
    fn empty_identifier_degrades_gracefully() {
        assert_eq!(method_summary("", false), "The .");
        assert_eq!(field_summary("", false, false, None), "The .");
    }

    #[test]
    fn summary_for_field_uses_first_declarator() {
        let mut decl = Declaration::new(DeclKind::Field, "");
        decl.modifiers = vec![Modifier::Const];
        decl.declarators = vec![Declarator {
            name: "MaxRetries".to_string(),
            initializer: Some("5".to_string()),
            span: Span::new(3, 23),
        }];
        assert_eq!(summary_for(&decl), "The max retries (const). Value: 5.");
    }

    #[test]
    fn summary_for_constructor() {
        let decl = Declaration::new(DeclKind::Constructor, "Widget");
        assert_eq!(
            summary_for(&decl),
            "Initializes a new instance of the <see cref=\"Widget\"/> class."
        );

        let mut static_ctor = Declaration::new(DeclKind::Constructor, "Widget");
        static_ctor.modifiers = vec![Modifier::Static];
        assert_eq!(
            summary_for(&static_ctor),
            "Initializes static members of the <see cref=\"Widget\"/> class."
        );
    }
}
