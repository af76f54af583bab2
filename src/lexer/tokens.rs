use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    /// Grammar-symbol lexeme -> token kind. Every lexeme is 1 or 2
    /// punctuation characters; two-character symbols are matched before
    /// single characters during segmentation.
    pub static ref SYMBOL_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert(";", TokenKind::Semi);
        map.insert("+", TokenKind::Plus);
        map.insert("-", TokenKind::Minus);
        map.insert("*", TokenKind::Mult);
        map.insert("/", TokenKind::Divide);
        map.insert("%", TokenKind::Mod);
        map.insert("<", TokenKind::Lt);
        map.insert(">", TokenKind::Gt);
        map.insert("(", TokenKind::LParen);
        map.insert(")", TokenKind::RParen);
        map.insert("{", TokenKind::LBracket);
        map.insert("}", TokenKind::RBracket);
        map.insert("==", TokenKind::DoubleEquals);
        map.insert("<=", TokenKind::Lte);
        map.insert(">=", TokenKind::Gte);
        map.insert("=", TokenKind::Equals);
        map.insert("!", TokenKind::Not);
        map.insert("!=", TokenKind::NotEquals);
        map.insert("||", TokenKind::LogicalOr);
        map.insert("&&", TokenKind::LogicalAnd);
        map
    };

    /// Reserved identifier spellings. Disjoint from the symbol lexemes by
    /// construction: keywords are alphabetic, symbols are punctuation.
    pub static ref KEYWORD_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("function", TokenKind::Function);
        map.insert("int", TokenKind::Int);
        map.insert("char", TokenKind::Char);
        map.insert("float", TokenKind::Float);
        map.insert("string", TokenKind::String);
        map.insert("bool", TokenKind::Bool);
        map.insert("if", TokenKind::If);
        map.insert("while", TokenKind::While);
        map.insert("return", TokenKind::Return);
        map.insert("void", TokenKind::Void);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Identifier,

    // Literals
    IntegerLiteral,
    FloatLiteral,
    BooleanLiteral,
    StringLiteral,
    CharacterLiteral,

    // Grammar symbols
    Semi,         // ;
    Plus,         // +
    Minus,        // -
    Mult,         // *
    Divide,       // /
    Mod,          // %
    Lt,           // <
    Gt,           // >
    LParen,       // (
    RParen,       // )
    LBracket,     // {
    RBracket,     // }
    DoubleEquals, // ==
    Lte,          // <=
    Gte,          // >=
    Equals,       // =
    Not,          // !
    NotEquals,    // !=
    LogicalOr,    // ||
    LogicalAnd,   // &&

    // Reserved
    Function,
    Int,
    Char,
    Float,
    String,
    Bool,
    If,
    While,
    Return,
    Void,
}

impl TokenKind {
    /// The category name as it appears in the printed token table.
    /// Symbols use their symbolic names, keywords their own spelling.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Identifier => "identifier",
            TokenKind::IntegerLiteral => "integerLiteral",
            TokenKind::FloatLiteral => "floatLiteral",
            TokenKind::BooleanLiteral => "booleanLiteral",
            TokenKind::StringLiteral => "stringLiteral",
            TokenKind::CharacterLiteral => "characterLiteral",
            TokenKind::Semi => "semi",
            TokenKind::Plus => "plus",
            TokenKind::Minus => "minus",
            TokenKind::Mult => "mult",
            TokenKind::Divide => "divide",
            TokenKind::Mod => "mod",
            TokenKind::Lt => "lt",
            TokenKind::Gt => "gt",
            TokenKind::LParen => "l_paren",
            TokenKind::RParen => "r_paren",
            TokenKind::LBracket => "l_bracket",
            TokenKind::RBracket => "r_bracket",
            TokenKind::DoubleEquals => "double_equals",
            TokenKind::Lte => "lte",
            TokenKind::Gte => "gte",
            TokenKind::Equals => "equals",
            TokenKind::Not => "not",
            TokenKind::NotEquals => "not_equals",
            TokenKind::LogicalOr => "logical_or",
            TokenKind::LogicalAnd => "logical_and",
            TokenKind::Function => "function",
            TokenKind::Int => "int",
            TokenKind::Char => "char",
            TokenKind::Float => "float",
            TokenKind::String => "string",
            TokenKind::Bool => "bool",
            TokenKind::If => "if",
            TokenKind::While => "while",
            TokenKind::Return => "return",
            TokenKind::Void => "void",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A classified lexical unit. The text is an owned copy of the source
/// substring, so the token stream does not borrow from the source buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\ntext: {}}}", self.kind, self.text)
    }
}
