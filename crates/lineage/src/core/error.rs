//! Core error types for diagram generation
//!
//! This module defines the error types used throughout the pipeline, from
//! loading a type model to building and rendering a diagram.

use thiserror::Error;

/// Result alias used by the library
pub type Result<T> = std::result::Result<T, DiagramError>;

/// Core error types for diagram generation
#[derive(Error, Debug)]
pub enum DiagramError {
    #[error("Invalid direction: '{direction}' (expected one of: up, down)")]
    InvalidDirection { direction: String },

    #[error("Unknown template: {template}")]
    UnknownTemplate { template: String },

    #[error("Unknown type: {name}")]
    UnknownType { name: String },

    #[error("Duplicate type: {name}")]
    DuplicateType { name: String },

    #[error("Cyclic base chain through type: {name}")]
    CyclicModel { name: String },

    #[error("Model error: {message}")]
    ModelError { message: String },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl DiagramError {
    /// Create a new invalid direction error
    pub fn invalid_direction(direction: impl Into<String>) -> Self {
        Self::InvalidDirection {
            direction: direction.into(),
        }
    }

    /// Create a new unknown type error
    pub fn unknown_type(name: impl Into<String>) -> Self {
        Self::UnknownType { name: name.into() }
    }

    /// Create a new model error
    pub fn model_error(message: String) -> Self {
        Self::ModelError { message }
    }
}

impl From<serde_json::Error> for DiagramError {
    fn from(err: serde_json::Error) -> Self {
        Self::model_error(err.to_string())
    }
}
