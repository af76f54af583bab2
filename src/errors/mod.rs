//! Error types for the lexer.
//!
//! This module defines the single lexical error the tokenizer can
//! produce, along with the name/tip accessors used for CLI reporting.
//! Malformed literals and stray punctuation are not errors: they degrade
//! into identifier tokens instead.

pub mod errors;
