//! Suggest command implementation.
//!
//! Synthesizes the documentation summary docsentry would propose for an
//! identifier, without needing a declaration dump. Useful for previewing
//! fix text and for wiring docsentry into editor snippets.

use clap::Args;
use docsentry_core::{synth, DeclKind, Declaration, Declarator, Modifier, Span};

/// Arguments for the suggest command.
#[derive(Args)]
pub struct SuggestArgs {
    /// Declaration kind
    #[arg(value_enum)]
    pub kind: SuggestKind,

    /// Identifier name (for fields and events: the declarator name)
    pub name: String,

    /// Treat as a test class or test method
    #[arg(long)]
    pub test: bool,

    /// Const field
    #[arg(long = "const")]
    pub is_const: bool,

    /// Readonly field
    #[arg(long = "readonly")]
    pub is_readonly: bool,

    /// Static constructor
    #[arg(long = "static")]
    pub is_static: bool,

    /// Field initializer expression
    #[arg(long)]
    pub initializer: Option<String>,

    /// Property has only a getter
    #[arg(long, conflicts_with = "set_only")]
    pub get_only: bool,

    /// Property has only a setter
    #[arg(long)]
    pub set_only: bool,

    /// Boolean-valued property
    #[arg(long)]
    pub boolean: bool,

    /// Event delegate type (default: EventHandler)
    #[arg(long)]
    pub delegate: Option<String>,
}

/// Declaration kinds accepted by the suggest command.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum SuggestKind {
    /// Class declaration
    Class,
    /// Struct declaration
    Struct,
    /// Interface declaration
    Interface,
    /// Enum declaration
    Enum,
    /// Delegate declaration
    Delegate,
    /// Method declaration
    Method,
    /// Constructor declaration
    Constructor,
    /// Property declaration
    Property,
    /// Field declaration
    Field,
    /// Event declaration
    Event,
}

impl From<SuggestKind> for DeclKind {
    fn from(kind: SuggestKind) -> Self {
        match kind {
            SuggestKind::Class => Self::Class,
            SuggestKind::Struct => Self::Struct,
            SuggestKind::Interface => Self::Interface,
            SuggestKind::Enum => Self::Enum,
            SuggestKind::Delegate => Self::Delegate,
            SuggestKind::Method => Self::Method,
            SuggestKind::Constructor => Self::Constructor,
            SuggestKind::Property => Self::Property,
            SuggestKind::Field => Self::Field,
            SuggestKind::Event => Self::Event,
        }
    }
}

/// Runs the suggest command.
pub fn run(args: &SuggestArgs) {
    println!("{}", synthesize(args));
}

fn synthesize(args: &SuggestArgs) -> String {
    synth::summary_for(&declaration_of(args))
}

/// Builds a minimal declaration carrying just what synthesis looks at.
fn declaration_of(args: &SuggestArgs) -> Declaration {
    let mut decl = Declaration::new(args.kind.into(), &args.name);
    decl.is_test = args.test;

    match decl.kind {
        DeclKind::Field | DeclKind::Event => {
            decl.declarators = vec![Declarator {
                name: args.name.clone(),
                initializer: args.initializer.clone(),
                span: Span::default(),
            }];
            if args.is_const {
                decl.modifiers.push(Modifier::Const);
            }
            if args.is_readonly {
                decl.modifiers.push(Modifier::ReadOnly);
            }
            decl.delegate_type = args.delegate.clone();
        }
        DeclKind::Constructor => {
            if args.is_static {
                decl.modifiers.push(Modifier::Static);
            }
        }
        DeclKind::Property => {
            decl.has_getter = !args.set_only;
            decl.has_setter = !args.get_only;
            decl.is_boolean = args.boolean;
        }
        _ => {}
    }

    decl
}
