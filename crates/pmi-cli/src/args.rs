use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use pmi_emitter::{AccessLevel, BackfillScope, Layout};

/// CLI arguments for the pmi binary.
#[derive(Parser, Debug, Default)]
#[command(
    name = "pmi",
    version,
    about = "Expand @PublicMemberwiseInitializer into public memberwise initializers"
)]
pub struct CliArgs {
    /// Swift files or directories to expand. Defaults to the project directory.
    pub paths: Vec<PathBuf>,

    /// Path to pmi.json or a directory containing it.
    #[arg(short = 'p', long = "project")]
    pub project: Option<PathBuf>,

    // ==================== Synthesis ====================
    /// Attribute that triggers expansion (without the leading '@').
    #[arg(long)]
    pub attribute: Option<String>,

    /// Access level of the synthesized initializer.
    #[arg(long = "accessLevel", alias = "access-level", value_enum, ignore_case = true)]
    pub access_level: Option<CliAccessLevel>,

    /// How far a trailing type annotation reaches leftward.
    #[arg(long = "backfillScope", alias = "backfill-scope", value_enum, ignore_case = true)]
    pub backfill_scope: Option<CliBackfillScope>,

    // ==================== Formatting ====================
    /// Parameter list layout.
    #[arg(long, value_enum, ignore_case = true)]
    pub layout: Option<CliLayout>,

    /// Spaces per indentation level inside the initializer.
    #[arg(long = "indentWidth", alias = "indent-width")]
    pub indent_width: Option<usize>,

    /// Indent the initializer with tabs.
    #[arg(long = "useTabs", alias = "use-tabs")]
    pub use_tabs: bool,

    /// Leave the triggering attribute in the expanded source.
    #[arg(long = "keepAttribute", alias = "keep-attribute")]
    pub keep_attribute: bool,

    // ==================== Output ====================
    /// Write expanded files under this directory instead of printing them.
    #[arg(long = "outDir", alias = "out-dir", conflicts_with = "write")]
    pub out_dir: Option<PathBuf>,

    /// Rewrite files in place.
    #[arg(short = 'w', long)]
    pub write: bool,

    /// Report files whose expansion differs from their contents; write nothing.
    #[arg(long, conflicts_with_all = ["write", "out_dir"])]
    pub check: bool,

    /// Print diagnostics as JSON.
    #[arg(long)]
    pub json: bool,

    /// Colorize diagnostics. Defaults to whether stderr is a terminal.
    #[arg(long)]
    pub pretty: Option<bool>,

    /// Glob patterns of files to include when walking directories.
    #[arg(long, value_delimiter = ',')]
    pub include: Option<Vec<String>>,

    /// Glob patterns of files to skip when walking directories.
    #[arg(long, value_delimiter = ',')]
    pub exclude: Option<Vec<String>>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum CliAccessLevel {
    Public,
    Package,
    Internal,
    Fileprivate,
    Private,
}

impl From<CliAccessLevel> for AccessLevel {
    fn from(value: CliAccessLevel) -> Self {
        match value {
            CliAccessLevel::Public => Self::Public,
            CliAccessLevel::Package => Self::Package,
            CliAccessLevel::Internal => Self::Internal,
            CliAccessLevel::Fileprivate => Self::Fileprivate,
            CliAccessLevel::Private => Self::Private,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum CliBackfillScope {
    Declaration,
    Binding,
}

impl From<CliBackfillScope> for BackfillScope {
    fn from(value: CliBackfillScope) -> Self {
        match value {
            CliBackfillScope::Declaration => Self::Declaration,
            CliBackfillScope::Binding => Self::Binding,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum CliLayout {
    Multiline,
    SingleLine,
}

impl From<CliLayout> for Layout {
    fn from(value: CliLayout) -> Self {
        match value {
            CliLayout::Multiline => Self::Multiline,
            CliLayout::SingleLine => Self::SingleLine,
        }
    }
}
