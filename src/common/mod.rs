//! Common types, traits, and utilities shared by the document model and
//! the HTML writers.

// Submodule declarations
pub mod error;
pub mod style;
pub mod unit;

// Re-exports for convenience
pub use error::{Error, Result};
pub use style::{RGBColor, contrasting_foreground};
