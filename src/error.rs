//! # Error Types
//!
//! This module defines error types used throughout the etiqueta library.
//!
//! The error surface is deliberately narrow: unresolved placeholders and
//! empty row selections are normal outcomes, not errors. Only invalid
//! configuration fails a batch, and it fails atomically before any
//! instruction is produced.

use thiserror::Error;

/// Main error type for etiqueta operations
#[derive(Debug, Error)]
pub enum EtiquetaError {
    /// Label footprint with a non-positive or non-finite dimension
    #[error("Invalid label footprint: {0}")]
    Footprint(String),

    /// Page format with a non-positive dimension, or a negative margin/gap
    #[error("Invalid page format: {0}")]
    PageFormat(String),

    /// A selected row index that does not exist in the supplied data
    #[error("Row {index} not found ({rows} rows available)")]
    RowIndex { index: usize, rows: usize },
}
