use std::fmt;

use crate::hierarchy::Level;

/// Why a cache geometry was rejected at construction time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    ZeroSets,
    ZeroAssociativity,
    /// The set count, which must be a power of two to derive the index bits
    SetsNotPowerOfTwo(u32),
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::ZeroSets => write!(f, "set count is zero"),
            GeometryError::ZeroAssociativity => write!(f, "associativity is zero"),
            GeometryError::SetsNotPowerOfTwo(sets) => write!(f, "set count {sets} is not a power of two"),
        }
    }
}

/// Every failure the library can report. All of them are fatal to the current run
#[derive(thiserror::Error, Debug)]
pub enum SimError {
    #[error("invalid geometry for the {level}: {reason}")]
    InvalidGeometry { level: Level, reason: GeometryError },

    #[error("malformed trace record on line {line}: {content:?}")]
    MalformedTrace { line: usize, content: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("couldn't parse the configuration: {0}")]
    Config(#[from] serde_json::Error),
}
