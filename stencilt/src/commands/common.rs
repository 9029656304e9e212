//! Common types and utilities for stencilt commands.
//!
//! This module provides shared types, constants, and utility functions
//! used across all command implementations to ensure consistency.

use std::path::{Path, PathBuf};

use stencil_lex::{tokenize, Token};
use stencil_util::{Diagnostic, DiagnosticCode, SourceFile};
use tracing::debug;

use crate::error::{Result, StencilError};

// ============================================================================
// Output Format
// ============================================================================

/// Supported output formats for token dumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `row:column TOK_KIND value` line per token
    Text,
    /// A JSON array of token objects
    Json,
}

impl OutputFormat {
    /// Parse a format name (case-insensitive).
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

// ============================================================================
// Template Utilities
// ============================================================================

/// Expand `paths` into the list of template files to process.
///
/// Files named explicitly are always included. Directories are walked
/// recursively and contribute files whose extension is in `extensions`;
/// hidden entries are skipped. Returns the files plus a warning for every
/// directory that held no templates.
pub fn collect_templates(
    paths: &[PathBuf],
    extensions: &[String],
) -> Result<(Vec<PathBuf>, Vec<String>)> {
    if paths.is_empty() {
        return Err(StencilError::Validation(
            error_messages::NO_INPUT_FILES.to_string(),
        ));
    }

    let mut files = Vec::new();
    let mut warnings = Vec::new();

    for path in paths {
        if path.is_file() {
            files.push(path.clone());
        } else if path.is_dir() {
            let before = files.len();
            walk_dir(path, extensions, &mut files)?;
            if files.len() == before {
                warnings.push(format!(
                    "{}: {}",
                    error_messages::NO_TEMPLATES_IN_DIR,
                    path.display()
                ));
            }
        } else {
            return Err(StencilError::Validation(format!(
                "{}: {}",
                error_messages::INPUT_PATH_NOT_EXIST,
                path.display()
            )));
        }
    }

    Ok((files, warnings))
}

fn walk_dir(dir: &Path, extensions: &[String], files: &mut Vec<PathBuf>) -> Result<()> {
    let entries = std::fs::read_dir(dir).map_err(|e| {
        StencilError::FileOperation(format!("Failed to read directory {}: {}", dir.display(), e))
    })?;

    let mut paths = entries
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()?;
    paths.sort();

    for path in paths {
        if is_hidden(&path) {
            continue;
        }
        if path.is_dir() {
            walk_dir(&path, extensions, files)?;
        } else if has_template_extension(&path, extensions) {
            files.push(path);
        }
    }

    Ok(())
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}

/// True if the extension of `path` is one of `extensions`.
///
/// Extensions may be written with or without the leading dot.
pub fn has_template_extension(path: &Path, extensions: &[String]) -> bool {
    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
        return false;
    };
    extensions
        .iter()
        .any(|wanted| wanted.trim_start_matches('.').eq_ignore_ascii_case(ext))
}

/// Read a template, rejecting files larger than `max_size` bytes.
pub fn read_template(path: &Path, max_size: u64) -> std::result::Result<String, Diagnostic> {
    let unreadable = |e: std::io::Error| {
        Diagnostic::error(format!("{}: {}", error_messages::UNREADABLE_FILE, e))
            .with_code(DiagnosticCode::E_UNREADABLE_FILE)
    };

    let size = std::fs::metadata(path).map_err(unreadable)?.len();
    if size > max_size {
        return Err(Diagnostic::error(format!(
            "{} ({} bytes, limit {})",
            error_messages::FILE_TOO_LARGE,
            size,
            max_size
        ))
        .with_code(DiagnosticCode::E_FILE_TOO_LARGE)
        .with_help("raise `check.max_file_size` in stencilt.toml"));
    }

    std::fs::read_to_string(path).map_err(unreadable)
}

/// Tokenize `source`, turning a lexical error into a diagnostic that
/// quotes the offending line.
pub fn tokenize_template(path: &Path, source: &str) -> std::result::Result<Vec<Token>, Diagnostic> {
    tokenize(source).map_err(|err| {
        debug!(file = %path.display(), error = %err, "template failed to tokenize");
        let file = SourceFile::new(path.display().to_string(), source);
        err.to_diagnostic_with_source(&file)
    })
}

/// Print a diagnostic for `path` to stderr.
pub fn report(diagnostic: &Diagnostic, path: &Path, color: bool) {
    let origin = path.display().to_string();
    eprintln!("{}", diagnostic.render(Some(&origin), color));
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
pub mod error_messages {
    /// Error when no input files are specified.
    pub const NO_INPUT_FILES: &str = "No input files specified";

    /// Error when input path does not exist.
    pub const INPUT_PATH_NOT_EXIST: &str = "Input path does not exist";

    /// Warning when a directory contains no templates.
    pub const NO_TEMPLATES_IN_DIR: &str = "No templates found in directory";

    /// Error when target path is not a directory.
    pub const TARGET_NOT_DIR: &str = "Target path is not a directory";

    /// Error when a configuration file would be overwritten.
    pub const CONFIG_EXISTS: &str = "Configuration file already exists (use --force to overwrite)";

    /// Error when an unknown format is specified.
    pub const UNKNOWN_FORMAT: &str = "Unknown format";

    /// Error when config has invalid format.
    pub const INVALID_CONFIG_FORMAT: &str = "Invalid format in configuration";

    /// Error when templates failed to tokenize.
    pub const FILES_FAILED: &str = "file(s) failed to tokenize";

    /// Error when a template cannot be read.
    pub const UNREADABLE_FILE: &str = "cannot read template";

    /// Error when a template exceeds the size limit.
    pub const FILE_TOO_LARGE: &str = "template exceeds the maximum file size";
}

// ============================================================================
// Output Messages
// ============================================================================

/// Standard output message templates.
pub mod output_messages {
    /// Message when a file is created.
    pub const CREATED_FILE: &str = "✅ Created file:";

    /// Message when a directory is created.
    pub const CREATED_DIR: &str = "ℹ️ Creating directory:";

    /// Message when checking a file.
    pub const CHECKING_FILE: &str = "🔄 Checking:";

    /// Message when a check is completed.
    pub const CHECK_COMPLETED: &str = "✅ Check completed in";

    /// Generic warning prefix.
    pub const WARNING: &str = "⚠️";
}
