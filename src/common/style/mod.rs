//! Common style and colour types.

// Submodule declarations
pub mod color;

// Re-exports
pub use color::{RGBColor, contrasting_foreground};
