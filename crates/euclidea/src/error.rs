//! Error types for the geometry kernel, renderer, and solver.

use std::fmt;

#[derive(Debug)]
pub enum EuclideaError {
    /// The renderer could not determine a usable bounding box or failed to
    /// write the image file.
    Render { reason: String },
    /// A requested parallel depth or thread count was invalid.
    InvalidSearchConfig { reason: String },
}

impl EuclideaError {
    pub(crate) fn render(reason: impl Into<String>) -> Self {
        Self::Render {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_search_config(reason: impl Into<String>) -> Self {
        Self::InvalidSearchConfig {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for EuclideaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Render { reason } => write!(f, "failed to render board: {reason}"),
            Self::InvalidSearchConfig { reason } => {
                write!(f, "invalid search configuration: {reason}")
            }
        }
    }
}

impl std::error::Error for EuclideaError {}

pub type Result<T> = std::result::Result<T, EuclideaError>;
