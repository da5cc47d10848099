//! File discovery, parallel expansion and output.

use anyhow::{Context, Result};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use pmi_common::Diagnostic;

use crate::args::CliArgs;
use crate::config::{ResolvedOptions, load_config, resolve_config_path, resolve_options};
use crate::splice::{FileExpansion, expand_source};

const SWIFT_EXTENSION: &str = "swift";

/// Where expanded text goes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputMode {
    /// Returned to the caller for printing.
    Stdout,
    /// Every file mirrored under a directory, relative to the base directory.
    OutDir(PathBuf),
    /// Changed files written back over themselves.
    InPlace,
    /// Nothing written; differing files are reported.
    Check,
}

impl OutputMode {
    #[must_use]
    pub fn from_args(args: &CliArgs) -> Self {
        if args.check {
            Self::Check
        } else if args.write {
            Self::InPlace
        } else if let Some(dir) = &args.out_dir {
            Self::OutDir(dir.clone())
        } else {
            Self::Stdout
        }
    }
}

#[derive(Debug, Default)]
pub struct RunResult {
    pub files: Vec<FileExpansion>,
    pub diagnostics: Vec<Diagnostic>,
    /// Files written by `--write` or `--outDir`.
    pub written: Vec<PathBuf>,
    /// Files whose expansion differs from disk, under `--check`.
    pub check_failures: Vec<PathBuf>,
}

impl RunResult {
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

/// Resolve configuration from `args`, expand every input and deliver the
/// output the way `args` asks.
pub fn run(args: &CliArgs, cwd: &Path) -> Result<RunResult> {
    let config_path = resolve_config_path(cwd, args.project.as_deref())?;
    let config = config_path.as_deref().map(load_config).transpose()?;
    let options = resolve_options(args, config.as_ref())?;
    let base_dir = config_base_dir(cwd, config_path.as_deref());

    let inputs = if args.paths.is_empty() {
        vec![base_dir.clone()]
    } else {
        args.paths.iter().map(|path| cwd.join(path)).collect()
    };
    let files = discover_files(&inputs, &options)?;
    tracing::debug!(count = files.len(), "discovered input files");

    let expansions = expand_files(&files, cwd, &options)?;
    let mode = match OutputMode::from_args(args) {
        OutputMode::OutDir(dir) => OutputMode::OutDir(cwd.join(dir)),
        mode => mode,
    };
    deliver(expansions, &files, &base_dir, &mode)
}

pub(crate) fn config_base_dir(cwd: &Path, config_path: Option<&Path>) -> PathBuf {
    config_path
        .and_then(|path| path.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| cwd.to_path_buf())
}

/// Explicit files are taken as given. Directories are walked for `.swift`
/// files that pass the include/exclude globs (matched relative to the
/// directory). The result is sorted and free of duplicates.
pub fn discover_files(inputs: &[PathBuf], options: &ResolvedOptions) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_file() {
            files.push(input.clone());
            continue;
        }
        if !input.is_dir() {
            anyhow::bail!("no such file or directory: {}", input.display());
        }

        for entry in WalkDir::new(input).follow_links(true).sort_by_file_name() {
            let entry = entry.with_context(|| format!("failed to walk {}", input.display()))?;
            let path = entry.path();
            if !entry.file_type().is_file() {
                continue;
            }
            if path.extension().is_none_or(|ext| ext != SWIFT_EXTENSION) {
                continue;
            }
            let relative = path.strip_prefix(input).unwrap_or(path);
            if options.is_included(relative) {
                files.push(path.to_path_buf());
            } else {
                tracing::trace!(path = %path.display(), "excluded by glob");
            }
        }
    }
    files.sort();
    files.dedup();
    Ok(files)
}

/// Read and expand each file on the rayon pool. Output order matches `files`.
/// Diagnostics name files relative to `cwd` where possible.
pub fn expand_files(
    files: &[PathBuf],
    cwd: &Path,
    options: &ResolvedOptions,
) -> Result<Vec<FileExpansion>> {
    files
        .par_iter()
        .map(|path| {
            let source = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let name = path.strip_prefix(cwd).unwrap_or(path).display().to_string();
            Ok(expand_source(&name, &source, options))
        })
        .collect()
}

fn deliver(
    expansions: Vec<FileExpansion>,
    files: &[PathBuf],
    base_dir: &Path,
    mode: &OutputMode,
) -> Result<RunResult> {
    let mut result = RunResult::default();

    for (expansion, path) in expansions.iter().zip(files) {
        result.diagnostics.extend(expansion.diagnostics.iter().cloned());
        match mode {
            OutputMode::Stdout => {}
            OutputMode::Check if expansion.changed() => result.check_failures.push(path.clone()),
            OutputMode::Check => {}
            OutputMode::InPlace if !expansion.changed() => {}
            OutputMode::InPlace => {
                std::fs::write(path, &expansion.expanded)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                result.written.push(path.clone());
            }
            OutputMode::OutDir(out_dir) => {
                let relative = path
                    .strip_prefix(base_dir)
                    .ok()
                    .or_else(|| path.file_name().map(Path::new))
                    .unwrap_or(path);
                let target = out_dir.join(relative);
                if let Some(parent) = target.parent() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("failed to create {}", parent.display()))?;
                }
                std::fs::write(&target, &expansion.expanded)
                    .with_context(|| format!("failed to write {}", target.display()))?;
                result.written.push(target);
            }
        }
    }

    result.files = expansions;
    Ok(result)
}
