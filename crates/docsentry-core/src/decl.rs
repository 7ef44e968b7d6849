//! Declaration dump model.
//!
//! A host front end (IDE plugin, compiler-side extractor) parses source code
//! and serializes one [`FileDump`] per source file. docsentry never parses
//! source itself; everything a rule needs is carried on the [`Declaration`].

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Kind of declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclKind {
    /// `class Foo`
    Class,
    /// `struct Foo`
    Struct,
    /// `interface IFoo`
    Interface,
    /// `enum Color`
    Enum,
    /// `delegate void Handler()`
    Delegate,
    /// A method.
    Method,
    /// An instance or static constructor.
    Constructor,
    /// A property with get/set accessors.
    Property,
    /// An indexer (`this[...]`).
    Indexer,
    /// A field declaration.
    Field,
    /// An event (field-style or accessor-style).
    Event,
    /// An operator overload.
    Operator,
}

impl DeclKind {
    /// Noun used in diagnostic messages (e.g. "method", "field").
    #[must_use]
    pub fn noun(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Struct => "struct",
            Self::Interface => "interface",
            Self::Enum => "enum",
            Self::Delegate => "delegate",
            Self::Method => "method",
            Self::Constructor => "constructor",
            Self::Property => "property",
            Self::Indexer => "indexer",
            Self::Field => "field",
            Self::Event => "event",
            Self::Operator => "operator",
        }
    }
}

/// Modifier attached to a declaration.
///
/// Only set membership is ever tested; order in the dump is irrelevant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    /// `public`
    Public,
    /// `private`
    Private,
    /// `protected`
    Protected,
    /// `internal`
    Internal,
    /// `static`
    Static,
    /// `const`
    Const,
    /// `readonly`
    ReadOnly,
    /// `abstract`
    Abstract,
    /// `sealed`
    Sealed,
    /// `virtual`
    Virtual,
    /// `override`
    Override,
}

/// Kind of the node a declaration is nested in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParentKind {
    /// Directly inside a namespace (top-level type).
    Namespace,
    /// Inside a class, struct or enum.
    #[default]
    Type,
    /// Inside an interface declaration.
    Interface,
}

/// Kind of a single piece of leading trivia.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriviaKind {
    /// Spaces and tabs.
    Whitespace,
    /// A line break with nothing else on the line (a blank line).
    EndOfLine,
    /// `#region` marker.
    RegionStart,
    /// `#endregion` marker.
    RegionEnd,
    /// A structured documentation comment block.
    DocComment,
    /// An ordinary line comment.
    LineComment,
    /// A preprocessor directive other than region markers.
    Directive,
}

/// A source span within the dumped file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
    /// Byte offset in the file.
    #[serde(default)]
    pub offset: usize,
    /// Length of the span in bytes.
    #[serde(default)]
    pub length: usize,
}

impl Span {
    /// Creates a span from line and column only.
    #[must_use]
    pub fn new(line: usize, column: usize) -> Self {
        Self {
            line,
            column,
            offset: 0,
            length: 0,
        }
    }
}

/// One piece of leading trivia, in source order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trivia {
    /// What this trivia is.
    pub kind: TriviaKind,
    /// Where it sits in the file.
    #[serde(default)]
    pub span: Span,
}

impl Trivia {
    /// Creates a trivia entry.
    #[must_use]
    pub fn new(kind: TriviaKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// The token immediately before a declaration's leading trivia.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrecedingToken {
    /// Start of the file; nothing precedes.
    #[default]
    StartOfFile,
    /// An opening brace (first member of a block).
    OpenBrace,
    /// Any other token.
    Other,
}

/// The documentation block attached to a declaration, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocBlock {
    /// Whether the block contains a summary section.
    ///
    /// Presence of a summary is the only thing the linter checks; prose
    /// quality is out of scope.
    pub has_summary: bool,
    /// Span of the block.
    #[serde(default)]
    pub span: Span,
}

/// A variable declarator inside a field or field-style event declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declarator {
    /// Declared name.
    pub name: String,
    /// Initializer expression text, if present.
    #[serde(default)]
    pub initializer: Option<String>,
    /// Span of the declarator identifier.
    #[serde(default)]
    pub span: Span,
}

/// A parameter of a method, constructor, delegate or indexer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    /// Parameter name.
    pub name: String,
    /// Type text as written in source.
    pub type_text: String,
}

/// One declaration awaiting a documentation verdict.
///
/// Constructed by the host per declaration and never mutated afterwards.
/// Fields that only apply to some kinds default to empty/`None`; rules treat
/// a missing expected child (e.g. a field with no declarators) as a silent
/// no-verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    /// Kind of declaration.
    pub kind: DeclKind,
    /// Identifier text. For fields and field-style events this may be empty;
    /// the first declarator carries the name instead.
    #[serde(default)]
    pub name: String,
    /// Modifier set.
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    /// Kind of the immediate parent node.
    #[serde(default)]
    pub parent: ParentKind,
    /// Span of the identifier (or keyword for operators/constructors).
    #[serde(default)]
    pub span: Span,
    /// Attached documentation block, if any.
    #[serde(default)]
    pub doc: Option<DocBlock>,
    /// Leading trivia in source order.
    #[serde(default)]
    pub leading_trivia: Vec<Trivia>,
    /// Token immediately before the leading trivia.
    #[serde(default)]
    pub preceding_token: PrecedingToken,
    /// Whether this is a test method or test class.
    #[serde(default)]
    pub is_test: bool,
    /// Property/indexer: a get accessor is present.
    #[serde(default)]
    pub has_getter: bool,
    /// Property/indexer: a set accessor is present.
    #[serde(default)]
    pub has_setter: bool,
    /// Property: the property type is boolean.
    #[serde(default)]
    pub is_boolean: bool,
    /// Parameters, for parameterized kinds.
    #[serde(default)]
    pub params: Vec<Param>,
    /// Return type text, if the kind has one.
    #[serde(default)]
    pub return_type: Option<String>,
    /// Delegate type text, for events.
    #[serde(default)]
    pub delegate_type: Option<String>,
    /// Declarators, for fields and field-style events.
    #[serde(default)]
    pub declarators: Vec<Declarator>,
    /// Span of the operator symbol token, for operators.
    #[serde(default)]
    pub operator_span: Option<Span>,
}

impl Declaration {
    /// Creates a minimal declaration; role data is filled in by the host.
    #[must_use]
    pub fn new(kind: DeclKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            modifiers: Vec::new(),
            parent: ParentKind::default(),
            span: Span::default(),
            doc: None,
            leading_trivia: Vec::new(),
            preceding_token: PrecedingToken::default(),
            is_test: false,
            has_getter: false,
            has_setter: false,
            is_boolean: false,
            params: Vec::new(),
            return_type: None,
            delegate_type: None,
            declarators: Vec::new(),
            operator_span: None,
        }
    }

    /// Tests membership of a modifier.
    #[must_use]
    pub fn has_modifier(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(&modifier)
    }

    /// Whether a qualifying documentation block is already present.
    ///
    /// A block without a summary section does not qualify.
    #[must_use]
    pub fn is_documented(&self) -> bool {
        self.doc.is_some_and(|d| d.has_summary)
    }

    /// The first declarator, for fields and field-style events.
    #[must_use]
    pub fn first_declarator(&self) -> Option<&Declarator> {
        self.declarators.first()
    }
}

/// All declarations extracted from one source file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileDump {
    /// Path of the original source file, as reported by the host.
    pub file: PathBuf,
    /// Declarations in source order.
    #[serde(default)]
    pub declarations: Vec<Declaration>,
}
