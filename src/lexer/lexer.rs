use crate::{errors::errors::Error, MK_TOKEN};

use super::{
    literals::{classify, LiteralKind},
    segment::{split_grammar, split_words},
    tokens::{Token, TokenKind, KEYWORD_LOOKUP, SYMBOL_LOOKUP},
};

type Classifier = fn(&str) -> Option<Token>;

// Tried in priority order: grammar symbols, then keywords, then literals.
// Identifier is the unconditional fallback, so an unmatched unit is never
// an error at this stage.
const CLASSIFIERS: [Classifier; 3] = [classify_symbol, classify_keyword, classify_literal];

fn classify_symbol(unit: &str) -> Option<Token> {
    SYMBOL_LOOKUP
        .get(unit)
        .map(|kind| MK_TOKEN!(*kind, unit.to_string()))
}

fn classify_keyword(unit: &str) -> Option<Token> {
    KEYWORD_LOOKUP
        .get(unit)
        .map(|kind| MK_TOKEN!(*kind, unit.to_string()))
}

fn classify_literal(unit: &str) -> Option<Token> {
    let constant = classify(unit);

    let kind = match constant.kind {
        LiteralKind::Integer => TokenKind::IntegerLiteral,
        LiteralKind::Float => TokenKind::FloatLiteral,
        LiteralKind::Boolean => TokenKind::BooleanLiteral,
        LiteralKind::String => TokenKind::StringLiteral,
        LiteralKind::Character => TokenKind::CharacterLiteral,
        LiteralKind::Unknown => return None,
    };

    Some(MK_TOKEN!(kind, constant.text))
}

/// Converts source text into an ordered token sequence.
///
/// The pipeline is word segmentation, grammar segmentation, then per-unit
/// classification. Classification of a unit never looks at neighboring
/// units. The only failure is an unterminated string literal, which
/// aborts the whole call with no partial token list.
pub fn tokenize(source: String) -> Result<Vec<Token>, Error> {
    let words = split_words(&source)?;
    let units = split_grammar(&words);

    let mut tokens = Vec::with_capacity(units.len());

    for unit in units {
        let token = CLASSIFIERS
            .iter()
            .find_map(|classifier| classifier(&unit))
            .unwrap_or_else(|| MK_TOKEN!(TokenKind::Identifier, unit));

        tokens.push(token);
    }

    Ok(tokens)
}
