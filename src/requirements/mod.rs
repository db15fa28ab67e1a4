//! Runtime requirement detection.
//!
//! The installer and the OCR launcher both need the Python interpreter on
//! the search path before they can do anything useful.
//!
//! # Modules
//!
//! - [`probe`] - PATH lookup for the runtime executable

pub mod probe;

pub use probe::{parse_system_path, resolve_runtime, resolve_tool_path, RuntimeProbe};
