//! Lexical analysis module.
//!
//! This module contains the tokenizer that converts source code into a
//! flat stream of classified tokens. It handles:
//!
//! - Word segmentation with quoted strings kept atomic
//! - Grammar-symbol segmentation (longest match first)
//! - Literal classification using regex patterns
//! - Recognition of keywords, identifiers, literals, and operators

pub mod lexer;
pub mod literals;
pub mod segment;
pub mod tokens;
