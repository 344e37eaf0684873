//! Error taxonomy for the analysis entry points
//!
//! Rule-level failures never surface here; they are reported as
//! `RuleDiagnostic` entries on the result. Only file access can fail an
//! analyze call outright.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
