//! Unified error type for wordhtml.
//!
//! Rendering itself is lenient and never fails on malformed tables; the
//! variants here cover the plumbing around it (formatting into buffers and
//! custom content renderers).
use thiserror::Error;

/// Main error type for wordhtml operations.
///
/// Custom [`ContentRenderer`](crate::html::ContentRenderer)s that format with
/// `write!` can propagate [`Error::Fmt`] with `?`.
#[derive(Error, Debug)]
pub enum Error {
    /// Writing into an output buffer failed
    #[error("Format error: {0}")]
    Fmt(#[from] std::fmt::Error),

    /// A content renderer could not render a cell
    #[error("Content render error: {0}")]
    Content(String),
}

/// Result type for wordhtml operations.
pub type Result<T> = std::result::Result<T, Error>;
