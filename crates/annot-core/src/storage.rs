//! Read/write annotation documents as flat JSON files.
//!
//! Both calls are blocking and synchronous with no timeout or cancellation;
//! saving truncates an existing file wholesale, with no atomic-rename or
//! partial-write protection.

use crate::error::{AnnotationError, Result};
use crate::model::FormAnnotation;
use crate::schema;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load a document from a JSON file.
pub fn load_from_file(path: impl AsRef<Path>) -> Result<FormAnnotation> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| AnnotationError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let annotation = schema::from_json(&json)?;
    debug!(
        path = %path.display(),
        pages = annotation.pages.len(),
        "loaded form annotation"
    );
    Ok(annotation)
}

/// Save a document to a JSON file, creating or truncating the target.
pub fn save_to_file(annotation: &FormAnnotation, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let json = schema::to_json(annotation)?;
    fs::write(path, json).map_err(|source| AnnotationError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        path = %path.display(),
        pages = annotation.pages.len(),
        "saved form annotation"
    );
    Ok(())
}
