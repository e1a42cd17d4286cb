//! JSON codec for annotated form documents.
//!
//! Output is deterministic: two-space indentation, keys in struct declaration
//! order. Decoding ignores unknown keys and defaults missing optional keys;
//! a key whose value has the wrong type is a decode error. Decoding followed
//! by encoding and decoding again yields a structurally equal document, but
//! the bytes of the original input (key order, whitespace) are not preserved.

use crate::error::Result;
use crate::model::FormAnnotation;

/// Serialize a document to a pretty-printed JSON string.
pub fn to_json(annotation: &FormAnnotation) -> Result<String> {
    Ok(serde_json::to_string_pretty(annotation)?)
}

/// Deserialize a document from a JSON string.
pub fn from_json(json: &str) -> Result<FormAnnotation> {
    Ok(serde_json::from_str(json)?)
}

/// Serialize a document to pretty-printed JSON bytes.
pub fn to_bytes(annotation: &FormAnnotation) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(annotation)?)
}

/// Deserialize a document from JSON bytes.
pub fn from_bytes(bytes: &[u8]) -> Result<FormAnnotation> {
    Ok(serde_json::from_slice(bytes)?)
}
