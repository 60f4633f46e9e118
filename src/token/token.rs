use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

/* The token catalog is a closed set: every lexeme the lexer can ever produce maps to
exactly one of these kinds. Adding a new kind means teaching both the lexer how to
recognize it and the parser how to react to it in prefix/infix position. */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // structural
    Illegal,
    Eof,

    // atoms
    Ident,
    Int,

    // operators
    Assign,
    Plus,
    Minus,
    Bang,
    Asterisk,
    Slash,
    Lt,
    Gt,
    Eq,
    NotEq,

    // punctuation
    Comma,
    Semicolon,
    LParen,
    RParen,
    LBrace,
    RBrace,

    // keywords
    Let,
    Return,
    Function,
    If,
    Else,
    True,
    False,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A single lexeme: its kind and the exact source substring that produced it.
///
/// `literal` is empty only for `Eof`. For every other token it is the verbatim
/// slice of source text consumed to produce the token, which is what lets the
/// parser recover identifier names and numeric digits without going back to
/// the source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.into(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.literal)
    }
}

static KEYWORDS: Lazy<HashMap<&'static str, TokenKind>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert("let", TokenKind::Let);
    m.insert("return", TokenKind::Return);
    m.insert("fn", TokenKind::Function);
    m.insert("if", TokenKind::If);
    m.insert("else", TokenKind::Else);
    m.insert("true", TokenKind::True);
    m.insert("false", TokenKind::False);
    m
});

/// Looks up an identifier literal in the keyword table, falling back to `Ident`
/// for anything that isn't a reserved word.
pub fn lookup_ident(literal: &str) -> TokenKind {
    KEYWORDS.get(literal).copied().unwrap_or(TokenKind::Ident)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_map_to_their_kind() {
        assert_eq!(lookup_ident("let"), TokenKind::Let);
        assert_eq!(lookup_ident("fn"), TokenKind::Function);
        assert_eq!(lookup_ident("return"), TokenKind::Return);
        assert_eq!(lookup_ident("true"), TokenKind::True);
        assert_eq!(lookup_ident("false"), TokenKind::False);
        assert_eq!(lookup_ident("if"), TokenKind::If);
        assert_eq!(lookup_ident("else"), TokenKind::Else);
    }

    #[test]
    fn non_keyword_identifiers_fall_through() {
        assert_eq!(lookup_ident("foobar"), TokenKind::Ident);
        assert_eq!(lookup_ident("x"), TokenKind::Ident);
    }
}
