//! Error types and error handling for the parser.
//!
//! Every failure carries the byte position of the offending token and a
//! typed [`errors::ErrorImpl`] kind. Parsing fails fast: the first error
//! aborts the enclosing parse and is handed back to the caller unchanged.

pub mod errors;
