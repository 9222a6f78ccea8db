//! Storage Errors
//!
//! `TigerStyle`: Explicit error types with context. These never cross the
//! catalog store boundary; the store logs and continues from memory.

use thiserror::Error;

/// Errors from persistence adapter operations.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// Read failed
    #[error("read failed: {0}")]
    ReadFailed(String),

    /// Write failed
    #[error("write failed: {0}")]
    WriteFailed(String),

    /// Serialization of a collection blob failed
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Simulated fault (for DST)
    #[error("simulated fault: {fault_type}")]
    SimulatedFault {
        /// Type of simulated fault
        fault_type: String,
    },
}

impl StorageError {
    /// Create a read error.
    #[must_use]
    pub fn read(message: impl Into<String>) -> Self {
        Self::ReadFailed(message.into())
    }

    /// Create a write error.
    #[must_use]
    pub fn write(message: impl Into<String>) -> Self {
        Self::WriteFailed(message.into())
    }

    /// Create a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Create a simulated fault error.
    #[must_use]
    pub fn simulated_fault(fault_type: impl Into<String>) -> Self {
        Self::SimulatedFault {
            fault_type: fault_type.into(),
        }
    }
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
