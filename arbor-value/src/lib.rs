//! Arbor value model - Shared dynamic values and classification
//!
//! This crate provides the data layer for the Arbor accessor system with no
//! proxy dependencies. It includes:
//!
//! - The `Value` enum: scalars plus shared handles to mappings, sequences,
//!   and opaque reference kinds
//! - Kind classification
//! - Error types
//! - Conversions from plain Rust types and `serde_json::Value`
//!
//! Containers are shared by handle (`Rc<RefCell<..>>`): cloning a `Value`
//! clones the handle, never the contents, so every view of a container
//! observes every write.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod convert;
pub mod error;
pub mod kind;
pub mod value;

// Re-export commonly used types
pub use error::{ArborError, Result};
pub use kind::Kind;
pub use regex::Regex;
pub use value::{CellRef, HandleRef, MapRef, NativeFn, SeqRef, Value};
