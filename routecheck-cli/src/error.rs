//! Error types emitted by the routecheck CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use routecheck_core::StructuralError;
use thiserror::Error;

/// Errors emitted by the routecheck CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (pass them as arguments or set {env})")]
    MissingArgument {
        /// Name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Option the path was given for.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option the path was given for.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option the path was given for.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Opening a solution document failed.
    #[error("failed to open solution document at {path:?}: {source}")]
    OpenDocument {
        /// Document path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// A solution document could not be decoded.
    #[error("failed to parse solution document JSON at {path:?}: {source}")]
    ParseDocument {
        /// Document path.
        path: Utf8PathBuf,
        /// Decoding failure.
        #[source]
        source: serde_json::Error,
    },
    /// A document references missing ids or carries a malformed instance.
    #[error("solution document {path:?} cannot be validated: {source}")]
    StructuralDefect {
        /// Document path.
        path: Utf8PathBuf,
        /// Structural problem found before any route was checked.
        #[source]
        source: StructuralError,
    },
    /// Serialising a report failed.
    #[error("failed to serialise report: {0}")]
    SerialiseReport(#[source] serde_json::Error),
    /// Writing a report failed.
    #[error("failed to write report: {0}")]
    WriteReport(#[source] std::io::Error),
    /// At least one document holds an infeasible or misquoted solution.
    #[error("{failing} of {total} solution(s) failed validation")]
    InvalidSolutions {
        /// Documents whose report was not empty.
        failing: usize,
        /// Documents validated.
        total: usize,
    },
}
