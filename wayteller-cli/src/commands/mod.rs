//! CLI command implementations.

pub mod simulate;

use std::fmt;

/// Errors surfaced to the CLI user.
#[derive(Debug)]
pub enum CliError {
    /// Failed to read an input file.
    Io(std::path::PathBuf, std::io::Error),

    /// Failed to parse an input file as JSON.
    Parse(std::path::PathBuf, serde_json::Error),

    /// A coordinate in the input was outside the valid domain.
    Coord(wayteller::CoordError),

    /// Failed to serialize an announcement for JSON output.
    Serialize(serde_json::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(path, e) => write!(f, "failed to read {}: {}", path.display(), e),
            CliError::Parse(path, e) => write!(f, "failed to parse {}: {}", path.display(), e),
            CliError::Coord(e) => write!(f, "invalid coordinate: {}", e),
            CliError::Serialize(e) => write!(f, "failed to serialize announcement: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(_, e) => Some(e),
            CliError::Parse(_, e) => Some(e),
            CliError::Coord(e) => Some(e),
            CliError::Serialize(e) => Some(e),
        }
    }
}

impl From<wayteller::CoordError> for CliError {
    fn from(e: wayteller::CoordError) -> Self {
        CliError::Coord(e)
    }
}
