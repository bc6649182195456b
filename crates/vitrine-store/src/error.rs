//! # Store Error Types
//!
//! Error types for the stateful store layer.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  CartError (vitrine-core)          std::io::Error / serde_json::Error  │
//! │       │                                 │                               │
//! │       └──────────────┬──────────────────┘                               │
//! │                      ▼                                                  │
//! │             StoreError (this module)                                    │
//! │                      │                                                  │
//! │                      ▼                                                  │
//! │  Renderer shows a user-facing notice; the store stays usable            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;
use vitrine_core::CartError;

/// Store operation errors.
///
/// Cart rule rejections pass through unchanged; storage failures gain
/// context about which half of the persistence round trip broke.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A cart rule rejected the operation. State is unchanged.
    #[error(transparent)]
    Cart(#[from] CartError),

    /// The storage adapter failed to read or write a blob.
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A snapshot blob could not be produced.
    ///
    /// Only the outbound direction raises this: an *inbound* blob that does
    /// not parse is degraded to an empty cart at rehydration, never an error.
    #[error("Snapshot serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// No usable data directory for file-backed storage.
    #[error("Data directory unavailable: {message}")]
    DataDir { message: String },
}

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
