//! Error types for the front end.
//!
//! This module defines the syntax errors the parser records. It includes:
//!
//! - Error structures carrying the span of the offending token
//! - Specific error variants for each kind of syntax failure
//! - Error names and suggestions used by diagnostic rendering

pub mod errors;
