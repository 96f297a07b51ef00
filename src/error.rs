use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to access `{path}`: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    /// an XYZ file needs the atom count and comment lines before any atoms
    #[error("geometry is missing the two XYZ header lines")]
    MissingHeader,

    #[error("malformed geometry line `{line}`: {reason}")]
    MalformedGeometryLine { line: String, reason: String },

    #[error("split index {index} is out of range for {atoms} atoms")]
    InvalidSplitIndex { index: usize, atoms: usize },

    #[error("failed to parse config file `{path}`: {source}")]
    Config {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` if the error is [`MalformedGeometryLine`].
    ///
    /// [`MalformedGeometryLine`]: Error::MalformedGeometryLine
    #[must_use]
    pub fn is_malformed_geometry_line(&self) -> bool {
        matches!(self, Self::MalformedGeometryLine { .. })
    }

    /// Returns `true` if the error is [`InvalidSplitIndex`].
    ///
    /// [`InvalidSplitIndex`]: Error::InvalidSplitIndex
    #[must_use]
    pub fn is_invalid_split_index(&self) -> bool {
        matches!(self, Self::InvalidSplitIndex { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
