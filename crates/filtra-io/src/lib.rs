#![deny(missing_docs)]
//! Image reading and writing.

/// error types for the io module.
pub mod error;

/// high-level image reading.
pub mod functional;

/// png image encoding.
pub mod png;

pub use crate::error::IoError;
