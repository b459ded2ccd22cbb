//! Lexical analysis module.
//!
//! Converts SEL source text into a vector of tokens and exposes it to the
//! parser through the [`source::TokenSource`] trait. It handles:
//!
//! - Tokenization of source code using regex patterns
//! - Recognition of keywords, identifiers, numbers and punctuation
//! - Token position tracking for error reporting
//! - The raw trailing character used to glue two-character operators

pub mod lexer;
pub mod source;
pub mod tokens;

#[cfg(test)]
mod tests;
