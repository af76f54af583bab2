use std::fmt::Display;

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum Error {
    #[error("unterminated string literal: {context:?}")]
    UnterminatedQuote { context: String },
}

impl Error {
    pub fn get_error_name(&self) -> &str {
        match self {
            Error::UnterminatedQuote { .. } => "UnterminatedQuote",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match self {
            Error::UnterminatedQuote { context } => ErrorTip::Suggestion(format!(
                "The string starting at `{}` is never closed, did you miss a `\"`?",
                snippet(context)
            )),
        }
    }
}

// The open word buffer runs to end of input, keep the message readable
fn snippet(context: &str) -> String {
    const MAX_LEN: usize = 20;

    if context.chars().count() <= MAX_LEN {
        context.to_string()
    } else {
        let truncated: String = context.chars().take(MAX_LEN).collect();
        format!("{}...", truncated)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}
