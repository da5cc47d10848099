//! `pmi.json` project configuration and its merge with command-line flags.

use anyhow::{Context, Result, bail};
use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};

use crate::args::CliArgs;
use pmi_emitter::{AccessLevel, BackfillScope, EmitOptions, Layout, PrinterOptions};

pub const CONFIG_FILE_NAME: &str = "pmi.json";
pub const DEFAULT_ATTRIBUTE: &str = "PublicMemberwiseInitializer";

/// Custom deserializer for boolean options that accepts both bool and string values.
fn deserialize_bool_or_string<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        String(String),
    }

    match Option::<BoolOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(BoolOrString::Bool(b)) => Ok(Some(b)),
        Some(BoolOrString::String(s)) => match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(Some(true)),
            "false" | "0" | "no" | "off" => Ok(Some(false)),
            _ => Err(Error::custom(format!(
                "invalid boolean value: '{s}'. Expected true, false, 'true', or 'false'"
            ))),
        },
    }
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProjectConfig {
    #[serde(default)]
    pub attribute: Option<String>,
    #[serde(default)]
    pub access_level: Option<AccessLevel>,
    #[serde(default)]
    pub backfill_scope: Option<BackfillScope>,
    #[serde(default)]
    pub layout: Option<Layout>,
    #[serde(default)]
    pub indent_width: Option<usize>,
    #[serde(default, deserialize_with = "deserialize_bool_or_string")]
    pub use_tabs: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_bool_or_string")]
    pub keep_attribute: Option<bool>,
    #[serde(default)]
    pub include: Option<Vec<String>>,
    #[serde(default)]
    pub exclude: Option<Vec<String>>,
}

/// Everything the expansion needs, after config file and flags are merged.
#[derive(Debug, Clone)]
pub struct ResolvedOptions {
    /// Attribute names that trigger expansion.
    pub attributes: Vec<String>,
    pub emit: EmitOptions,
    pub keep_attribute: bool,
    pub include: GlobSet,
    pub exclude: GlobSet,
}

impl Default for ResolvedOptions {
    fn default() -> Self {
        Self {
            attributes: attribute_spellings(DEFAULT_ATTRIBUTE),
            emit: EmitOptions::default(),
            keep_attribute: false,
            include: GlobSet::empty(),
            exclude: GlobSet::empty(),
        }
    }
}

impl ResolvedOptions {
    /// Whether a walked file at `relative` should be expanded.
    #[must_use]
    pub fn is_included(&self, relative: &Path) -> bool {
        (self.include.is_empty() || self.include.is_match(relative)) && !self.exclude.is_match(relative)
    }
}

/// `Name` and the `NameMacro` spelling some packages export.
fn attribute_spellings(name: &str) -> Vec<String> {
    let name = name.trim_start_matches('@');
    vec![name.to_string(), format!("{name}Macro")]
}

pub fn parse_config(source: &str) -> Result<ProjectConfig> {
    let config = serde_json::from_str(source).context("failed to parse pmi.json")?;
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<ProjectConfig> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_config(&source).with_context(|| format!("invalid configuration in {}", path.display()))
}

pub(crate) fn find_config(cwd: &Path) -> Option<PathBuf> {
    let candidate = cwd.join(CONFIG_FILE_NAME);
    candidate.is_file().then_some(candidate)
}

/// Locate the config file: `--project` (a file or a directory holding
/// `pmi.json`), otherwise `pmi.json` in `cwd` if present.
pub fn resolve_config_path(cwd: &Path, project: Option<&Path>) -> Result<Option<PathBuf>> {
    let Some(project) = project else {
        return Ok(find_config(cwd));
    };

    let mut candidate = if project.is_absolute() {
        project.to_path_buf()
    } else {
        cwd.join(project)
    };

    if candidate.is_dir() {
        candidate = candidate.join(CONFIG_FILE_NAME);
    }

    if !candidate.exists() {
        bail!("pmi.json not found at {}", candidate.display());
    }

    if !candidate.is_file() {
        bail!("project path is not a file: {}", candidate.display());
    }

    Ok(Some(candidate))
}

/// Merge `config` with `args`; flags win over file values.
pub fn resolve_options(args: &CliArgs, config: Option<&ProjectConfig>) -> Result<ResolvedOptions> {
    let file = config.cloned().unwrap_or_default();

    let attribute = args
        .attribute
        .as_deref()
        .or(file.attribute.as_deref())
        .unwrap_or(DEFAULT_ATTRIBUTE);
    if attribute.trim_start_matches('@').is_empty() {
        bail!("attribute name must not be empty");
    }

    let printer = PrinterOptions {
        layout: args.layout.map(Layout::from).or(file.layout).unwrap_or_default(),
        indent_width: args.indent_width.or(file.indent_width).unwrap_or(4),
        use_tabs: args.use_tabs || file.use_tabs.unwrap_or(false),
    };
    if printer.indent_width == 0 && !printer.use_tabs {
        bail!("indentWidth must be at least 1");
    }

    let emit = EmitOptions {
        access_level: args
            .access_level
            .map(AccessLevel::from)
            .or(file.access_level)
            .unwrap_or_default(),
        backfill_scope: args
            .backfill_scope
            .map(BackfillScope::from)
            .or(file.backfill_scope)
            .unwrap_or_default(),
        printer,
    };

    let include = args.include.as_ref().or(file.include.as_ref());
    let exclude = args.exclude.as_ref().or(file.exclude.as_ref());

    Ok(ResolvedOptions {
        attributes: attribute_spellings(attribute),
        emit,
        keep_attribute: args.keep_attribute || file.keep_attribute.unwrap_or(false),
        include: build_glob_set(include.map_or(&[][..], Vec::as_slice))?,
        exclude: build_glob_set(exclude.map_or(&[][..], Vec::as_slice))?,
    })
}

fn build_glob_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).with_context(|| format!("invalid glob pattern '{pattern}'"))?;
        builder.add(glob);
    }
    builder.build().context("failed to compile glob patterns")
}
