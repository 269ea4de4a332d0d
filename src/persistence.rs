use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::document::Document;
use crate::drag_path::DragPath;
use crate::element::Shape;
use crate::util::time;

/// Default file the canvas is saved to, relative to the working directory
pub const DEFAULT_CANVAS_FILE: &str = "canvas.json";

/// Errors that can occur while saving or loading a canvas
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Failed to serialize canvas: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to write canvas: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read canvas file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for persistence operations
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// On-disk form of a canvas
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanvasSnapshot {
    /// Version of the application that wrote the file
    pub version: String,
    /// Seconds since the UNIX epoch when the snapshot was taken
    pub timestamp: u64,
    pub shapes: Vec<Shape>,
    pub drag_paths: Vec<DragPath>,
}

impl CanvasSnapshot {
    pub fn new(document: &Document) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: time::timestamp_secs(),
            shapes: document.shapes().to_vec(),
            drag_paths: document.drag_paths().to_vec(),
        }
    }

    pub fn into_document(self) -> Document {
        if self.version != env!("CARGO_PKG_VERSION") {
            log::warn!(
                "Canvas was saved by version {}, running {}",
                self.version,
                env!("CARGO_PKG_VERSION")
            );
        }
        Document::from_parts(self.shapes, self.drag_paths)
    }
}

/// Write the shapes and drag paths of `document` to `path`
pub fn save(document: &Document, path: &Path) -> PersistenceResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(&CanvasSnapshot::new(document))?;
    fs::write(path, json)?;

    log::info!(
        "Saved {} shapes and {} drag paths to {}",
        document.shapes().len(),
        document.drag_paths().len(),
        path.display()
    );
    Ok(())
}

/// Read a document back from `path`
pub fn load(path: &Path) -> PersistenceResult<Document> {
    let json = fs::read_to_string(path).map_err(|source| PersistenceError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let snapshot: CanvasSnapshot = serde_json::from_str(&json)?;

    log::info!(
        "Loaded {} shapes and {} drag paths from {}",
        snapshot.shapes.len(),
        snapshot.drag_paths.len(),
        path.display()
    );
    Ok(snapshot.into_document())
}
