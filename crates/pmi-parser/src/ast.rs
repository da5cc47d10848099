//! Declaration tree produced by the parser and consumed by the synthesizer.
//!
//! Only the parts of a nominal type declaration that initializer synthesis
//! needs are kept: its kind and attributes, and its `let`/`var` members with
//! their patterns, type annotations, initializers and accessor blocks.

use pmi_common::{Diagnostic, Span};
use std::fmt;

/// Result of parsing one source file.
#[derive(Clone, Debug, Default)]
pub struct SourceFile {
    pub file_name: String,
    /// Every nominal declaration in source order, nested ones included.
    pub declarations: Vec<AggregateDeclaration>,
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    Struct,
    Enum,
    Class,
    Actor,
    Protocol,
    Extension,
}

impl DeclarationKind {
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Some(match keyword {
            "struct" => Self::Struct,
            "enum" => Self::Enum,
            "class" => Self::Class,
            "actor" => Self::Actor,
            "protocol" => Self::Protocol,
            "extension" => Self::Extension,
            _ => return None,
        })
    }

    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Struct => "struct",
            Self::Enum => "enum",
            Self::Class => "class",
            Self::Actor => "actor",
            Self::Protocol => "protocol",
            Self::Extension => "extension",
        }
    }
}

impl fmt::Display for DeclarationKind {
    /// Written with its article, for use in messages ("an enum").
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let article = match self {
            Self::Enum | Self::Actor | Self::Extension => "an",
            Self::Struct | Self::Class | Self::Protocol => "a",
        };
        write!(f, "{article} {}", self.keyword())
    }
}

/// An attribute such as `@PublicMemberwiseInitializer` or `@available(*, deprecated)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    /// From `@` through the closing paren of any argument clause.
    pub span: Span,
}

/// A nominal type declaration and its stored-member bindings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AggregateDeclaration {
    pub kind: DeclarationKind,
    pub name: String,
    pub attributes: Vec<Attribute>,
    pub modifiers: Vec<String>,
    pub keyword_span: Span,
    pub name_span: Span,
    /// From the first attribute or modifier through the closing brace.
    pub span: Span,
    /// From `{` through `}` inclusive.
    pub members_span: Span,
    /// False when the member block ran to end of file without a `}`.
    pub is_terminated: bool,
    pub bindings: Vec<MemberBinding>,
}

impl AggregateDeclaration {
    /// A declaration with no source location, for building trees by hand.
    #[must_use]
    pub fn new(kind: DeclarationKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            attributes: Vec::new(),
            modifiers: Vec::new(),
            keyword_span: Span::DUMMY,
            name_span: Span::DUMMY,
            span: Span::DUMMY,
            members_span: Span::DUMMY,
            is_terminated: true,
            bindings: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_binding(mut self, binding: MemberBinding) -> Self {
        self.bindings.push(binding);
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>) -> Self {
        self.attributes.push(Attribute {
            name: name.into(),
            span: Span::DUMMY,
        });
        self
    }

    /// Keyword through name, where declaration-level diagnostics point.
    #[must_use]
    pub fn head_span(&self) -> Span {
        self.keyword_span.cover(self.name_span)
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|attr| attr.name == name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BindingKeyword {
    Let,
    Var,
}

/// One `let`/`var` statement: `let a, b: String, c = 1`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemberBinding {
    pub keyword: BindingKeyword,
    pub modifiers: Vec<String>,
    pub entries: Vec<BindingEntry>,
    pub span: Span,
}

impl MemberBinding {
    #[must_use]
    pub fn new(keyword: BindingKeyword) -> Self {
        Self {
            keyword,
            modifiers: Vec::new(),
            entries: Vec::new(),
            span: Span::DUMMY,
        }
    }

    #[must_use]
    pub fn with_entry(mut self, entry: BindingEntry) -> Self {
        self.entries.push(entry);
        self
    }

    #[must_use]
    pub fn with_modifier(mut self, modifier: impl Into<String>) -> Self {
        self.modifiers.push(modifier.into());
        self
    }

    /// Any entry carrying a getter/setter or observer block.
    #[must_use]
    pub fn has_accessor_block(&self) -> bool {
        self.entries.iter().any(|entry| entry.has_accessor_block)
    }

    /// `static` and `class` members belong to the type, not the instance.
    #[must_use]
    pub fn is_type_level(&self) -> bool {
        self.modifiers
            .iter()
            .any(|modifier| modifier == "static" || modifier == "class")
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Pattern {
    Identifier(String),
    /// Tuple destructuring, `_`, or anything else that is not a plain name.
    Other(String),
}

impl Pattern {
    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        match self {
            Self::Identifier(name) => Some(name),
            Self::Other(_) => None,
        }
    }
}

/// One pattern within a binding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BindingEntry {
    pub pattern: Pattern,
    pub declared_type: Option<TypeShape>,
    pub has_initializer: bool,
    pub has_accessor_block: bool,
    pub span: Span,
}

impl BindingEntry {
    /// `name` with no annotation.
    #[must_use]
    pub fn untyped(name: impl Into<String>) -> Self {
        Self {
            pattern: Pattern::Identifier(name.into()),
            declared_type: None,
            has_initializer: false,
            has_accessor_block: false,
            span: Span::DUMMY,
        }
    }

    /// `name: ty`
    #[must_use]
    pub fn typed(name: impl Into<String>, ty: TypeShape) -> Self {
        Self {
            declared_type: Some(ty),
            ..Self::untyped(name)
        }
    }

    #[must_use]
    pub fn with_initializer(mut self) -> Self {
        self.has_initializer = true;
        self
    }

    #[must_use]
    pub fn with_accessor_block(mut self) -> Self {
        self.has_accessor_block = true;
        self
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.pattern.identifier()
    }
}

/// The spelling of a type annotation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeShape {
    /// `Int`
    Named(String),
    /// `T?`
    Optional(Box<TypeShape>),
    /// `[T]`
    Sequence(Box<TypeShape>),
    /// `[K: V]`
    Mapping {
        key: Box<TypeShape>,
        value: Box<TypeShape>,
    },
    /// Any other spelling (tuples, functions, generics, member paths),
    /// kept verbatim from source.
    Unsupported(String),
}

impl TypeShape {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    #[must_use]
    pub fn optional(inner: TypeShape) -> Self {
        Self::Optional(Box::new(inner))
    }

    #[must_use]
    pub fn sequence(element: TypeShape) -> Self {
        Self::Sequence(Box::new(element))
    }

    #[must_use]
    pub fn mapping(key: TypeShape, value: TypeShape) -> Self {
        Self::Mapping {
            key: Box::new(key),
            value: Box::new(value),
        }
    }
}
