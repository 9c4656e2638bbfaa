//! Bundle export
//!
//! Writes bundles to RON files so they can be inspected or replayed by an
//! external renderer.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use ndcube_core::Bundle;

/// Save a bundle to a RON file
pub fn save_bundle<P: AsRef<Path>>(bundle: &Bundle, path: P, pretty: bool) -> Result<(), ExportError> {
    let contents = if pretty {
        let config = ron::ser::PrettyConfig::new()
            .struct_names(true)
            .enumerate_arrays(false);
        ron::ser::to_string_pretty(bundle, config)?
    } else {
        ron::to_string(bundle)?
    };
    fs::write(path, contents)?;
    Ok(())
}

/// Load a bundle back from a RON file
pub fn load_bundle<P: AsRef<Path>>(path: P) -> Result<Bundle, ExportError> {
    let contents = fs::read_to_string(path)?;
    let bundle = ron::from_str(&contents)?;
    Ok(bundle)
}

/// Error reading or writing a bundle file
#[derive(Debug)]
pub enum ExportError {
    /// IO error
    Io(io::Error),
    /// RON serialization error
    Serialize(ron::Error),
    /// RON parse error
    Parse(ron::error::SpannedError),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Io(e) => write!(f, "Bundle IO error: {}", e),
            ExportError::Serialize(e) => write!(f, "Bundle serialization error: {}", e),
            ExportError::Parse(e) => write!(f, "Bundle parse error: {}", e),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Io(e) => Some(e),
            ExportError::Serialize(e) => Some(e),
            ExportError::Parse(e) => Some(e),
        }
    }
}

impl From<io::Error> for ExportError {
    fn from(e: io::Error) -> Self {
        ExportError::Io(e)
    }
}

impl From<ron::Error> for ExportError {
    fn from(e: ron::Error) -> Self {
        ExportError::Serialize(e)
    }
}

impl From<ron::error::SpannedError> for ExportError {
    fn from(e: ron::error::SpannedError) -> Self {
        ExportError::Parse(e)
    }
}
