//! Unified error types for wordhtml.

// Submodule declarations
pub mod types;

// Re-exports
pub use types::{Error, Result};
