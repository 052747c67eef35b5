//! Error types for the transform core.

use thiserror::Error;

/// Errors that abort the transform.
///
/// Row-level data problems (bad dates, non-numeric fields, out-of-range
/// values) are deliberately NOT errors: they drop rows and are reported
/// through [`crate::CleanReport`] counters instead.
#[derive(Debug, Error)]
pub enum TransformError {
    /// One or more required columns are absent after name normalization.
    /// Lists every missing column, not just the first.
    #[error(
        "missing required columns: [{}] (columns present: [{}])",
        .missing.join(", "),
        .present.join(", ")
    )]
    MissingColumns {
        missing: Vec<String>,
        present: Vec<String>,
    },
}

pub type Result<T> = std::result::Result<T, TransformError>;
