use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref INTEGER_REGEX: Regex = Regex::new(r"^\d+$").unwrap();
    static ref FLOAT_REGEX: Regex = Regex::new(r"^[+-]?\d+\.\d+$").unwrap();
    static ref BOOLEAN_REGEX: Regex = Regex::new(r"^(?:true|false)$").unwrap();
    static ref STRING_REGEX: Regex = Regex::new(r#"(?s)^".*"$"#).unwrap();
    static ref CHARACTER_REGEX: Regex = Regex::new(r"^'[^']'$").unwrap();
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum LiteralKind {
    Integer,
    Float,
    Boolean,
    String,
    Character,
    Unknown,
}

/// Transient classification result for a single raw lexical unit.
#[derive(Debug, Clone)]
pub struct LiteralConstant {
    pub kind: LiteralKind,
    pub text: String,
}

/// Classifies a raw unit against the literal grammars, first match wins:
/// integer, float, boolean, string, then character.
///
/// The grammar is deliberately minimal: plain decimal numbers only (no
/// hex, no scientific notation, no underscores), and character literals
/// are exactly one interior character with no escape sequences. Anything
/// that matches no pattern is `Unknown` and the caller falls back to
/// treating the unit as an identifier.
pub fn classify(unit: &str) -> LiteralConstant {
    let checks = [
        (&*INTEGER_REGEX, LiteralKind::Integer),
        (&*FLOAT_REGEX, LiteralKind::Float),
        (&*BOOLEAN_REGEX, LiteralKind::Boolean),
        (&*STRING_REGEX, LiteralKind::String),
        (&*CHARACTER_REGEX, LiteralKind::Character),
    ];

    for (regex, kind) in checks {
        if regex.is_match(unit) {
            return LiteralConstant {
                kind,
                text: unit.to_string(),
            };
        }
    }

    LiteralConstant {
        kind: LiteralKind::Unknown,
        text: unit.to_string(),
    }
}
