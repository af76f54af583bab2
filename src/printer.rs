//! Token table rendering.
//!
//! Renders a token sequence as a two-column table (category, text) for
//! the CLI driver. This is presentation glue only; the tokenizer itself
//! never prints.

use crate::lexer::tokens::Token;

const TYPE_WIDTH: usize = 20;
const TEXT_WIDTH: usize = 100;

/// Renders the token table as a string. An empty token list renders as
/// an empty string, no header.
pub fn render(tokens: &[Token]) -> String {
    if tokens.is_empty() {
        return String::new();
    }

    let rule = "-".repeat(TYPE_WIDTH + TEXT_WIDTH);
    let mut out = String::new();

    out.push_str(&format!("{:<TYPE_WIDTH$}{:<TEXT_WIDTH$}\n", "Token Type", "Value"));
    out.push_str(&rule);
    out.push('\n');

    for token in tokens {
        out.push_str(&format!("{:<TYPE_WIDTH$}{:<TEXT_WIDTH$}\n", token.kind, token.text));
    }

    out.push_str(&rule);
    out.push('\n');

    out
}

pub fn print_tokens(tokens: &[Token]) {
    print!("{}", render(tokens));
}
