// src/core/mod.rs

//! Core data structures and types

// Declare modules within core
pub mod error;
pub mod labels;
pub mod state;

// Re-export public types for convenient access via `qstate::core::TypeName`
pub use error::{Result, StateError};
pub use labels::{basis_label, label_index, parse_label};
pub use state::StateVector;

pub mod constants;
pub use constants::{DEFAULT_TOLERANCE, MAX_QUBITS}; // Re-export
