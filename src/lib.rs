pub mod command;
pub mod hierarchy;
pub mod utils;

use std::path::PathBuf;

pub use hierarchy::{HierarchyBuilder, HierarchyNode, SampleMetadata};

// Extension stripped from sample names
pub const SAMPLE_EXTENSION: &str = ".mp3";

pub const DEFAULT_INSTRUMENT: &str = "PIANO";

pub const DEFAULT_OUTPUT_FILE: &str = "netsbloxSoundLibraryPiano.json";

// Key holding the children of a directory node
pub const LIBRARY_KEY: &str = "netsbloxSoundLibrary";

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CatalogError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CatalogError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
