//! Cross-cutting error types for Haul.
//!
//! `DatabaseError` lives in `haul-db`. The errors here are the ones that cross
//! crate seams: the linking workflow only ever sees `StoreError` and
//! `LinkUpdateError`, so any store implementation can stand behind it.

use serde::Serialize;
use thiserror::Error;

/// Errors that can be raised by any Haul crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("{entity_type} {id} not found")]
    NotFound { entity_type: &'static str, id: String },

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}

impl CoreError {
    #[must_use]
    pub fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }
}

/// An underlying persistence call failed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Store operation failed: {message}")]
pub struct StoreError {
    pub message: String,
}

impl StoreError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A bulk link update was rejected. Nothing from the batch was committed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LinkUpdateError {
    #[error("link {link_id} references unknown classification {classification_id}")]
    UnknownClassification { link_id: i64, classification_id: i64 },

    #[error("link {link_id} does not exist")]
    UnknownLink { link_id: i64 },

    #[error("bulk update called with no entries")]
    EmptyBatch,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Why a staged classification id was not accepted.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationError {
    #[error("no classification id entered")]
    Missing,

    #[error("'{text}' is not a number")]
    NotANumber { text: String },

    #[error("classification id must be positive, got {value}")]
    NotPositive { value: i64 },
}
