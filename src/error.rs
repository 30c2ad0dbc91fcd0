//! Error types for rowshape
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for rowshape
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Inference Errors
    // ============================================================================
    #[error("unsupported input shape {shape}: schemas are inferred from record types and string-keyed mappings")]
    UnsupportedTopShape { shape: String },

    #[error("map keys must be strings, got {key}")]
    UnsupportedMapKey { key: String },

    #[error("embedded field '{field}' must be a record or an optional record, got {shape}")]
    UnsupportedEmbedding { field: String, shape: String },

    #[error("cannot map field '{field}' of type {shape} to a column type")]
    UnsupportedLeafShape { field: String, shape: String },

    // ============================================================================
    // Encoding Errors
    // ============================================================================
    #[error("failed to encode schema attribute: {0}")]
    JsonEncode(#[from] serde_json::Error),
}

impl Error {
    /// Create an unsupported-top-shape error
    pub fn unsupported_top_shape(shape: impl Into<String>) -> Self {
        Self::UnsupportedTopShape {
            shape: shape.into(),
        }
    }

    /// Create an unsupported-map-key error
    pub fn unsupported_map_key(key: impl Into<String>) -> Self {
        Self::UnsupportedMapKey { key: key.into() }
    }

    /// Create an unsupported-embedding error
    pub fn unsupported_embedding(field: impl Into<String>, shape: impl Into<String>) -> Self {
        Self::UnsupportedEmbedding {
            field: field.into(),
            shape: shape.into(),
        }
    }

    /// Create an unsupported-leaf-shape error
    pub fn unsupported_leaf(field: impl Into<String>, shape: impl Into<String>) -> Self {
        Self::UnsupportedLeafShape {
            field: field.into(),
            shape: shape.into(),
        }
    }
}

/// Result type alias for rowshape
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::unsupported_top_shape("int64");
        assert_eq!(
            err.to_string(),
            "unsupported input shape int64: schemas are inferred from record types and string-keyed mappings"
        );

        let err = Error::unsupported_map_key("int32");
        assert_eq!(err.to_string(), "map keys must be strings, got int32");

        let err = Error::unsupported_embedding("Inner", "string");
        assert_eq!(
            err.to_string(),
            "embedded field 'Inner' must be a record or an optional record, got string"
        );

        let err = Error::unsupported_leaf("ratio", "float64");
        assert_eq!(
            err.to_string(),
            "cannot map field 'ratio' of type float64 to a column type"
        );
    }
}
