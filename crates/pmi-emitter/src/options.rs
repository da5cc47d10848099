//! Synthesis and printing options.
//!
//! `EmitOptions::default()` produces exactly the classic output: a `public`
//! initializer, backfill across the whole member list, one parameter per
//! line, four-space indentation.

use serde::{Deserialize, Serialize};

/// Access level written in front of `init`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    #[default]
    Public,
    Package,
    Internal,
    Fileprivate,
    Private,
}

impl AccessLevel {
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Package => "package",
            Self::Internal => "internal",
            Self::Fileprivate => "fileprivate",
            Self::Private => "private",
        }
    }
}

/// How far a trailing type annotation reaches leftward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackfillScope {
    /// Across the whole collected member list, through `let`/`var` boundaries.
    #[default]
    Declaration,
    /// Within one `let`/`var` statement only.
    Binding,
}

/// Parameter list layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    /// One parameter per line.
    #[default]
    Multiline,
    /// All parameters on the `init(` line.
    SingleLine,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrinterOptions {
    pub layout: Layout,
    pub indent_width: usize,
    pub use_tabs: bool,
}

impl Default for PrinterOptions {
    fn default() -> Self {
        Self {
            layout: Layout::Multiline,
            indent_width: 4,
            use_tabs: false,
        }
    }
}

impl PrinterOptions {
    /// One level of indentation.
    #[must_use]
    pub fn indent_unit(&self) -> String {
        if self.use_tabs {
            "\t".to_string()
        } else {
            " ".repeat(self.indent_width)
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmitOptions {
    pub access_level: AccessLevel,
    pub backfill_scope: BackfillScope,
    pub printer: PrinterOptions,
}
