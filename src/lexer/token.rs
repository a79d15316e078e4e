//! Token definitions for the CodeGo language
//!
//! A token is an immutable triple of kind, value, and 1-based source
//! line. The kind set is the closed contract surface between the
//! tokenizer and the parser.

use std::fmt;

/// A token in a CodeGo source text
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    pub line: usize,
}

impl Token {
    /// Create a new token
    pub fn new(kind: TokenKind, value: TokenValue, line: usize) -> Self {
        Self { kind, value, line }
    }

    /// Text payload for kinds that carry a lexeme or string content.
    /// Empty for kinds that carry a number or nothing.
    pub fn text(&self) -> &str {
        match &self.value {
            TokenValue::Str(s) => s,
            _ => "",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            TokenValue::None => write!(f, "{}", self.kind),
            value => write!(f, "{} '{}'", self.kind, value),
        }
    }
}

/// Token kinds in the CodeGo language (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Type-name keyword: Numero, Desimal, Teksto, Tsek, Lista, Bagay
    BasicType,
    /// Numeric literal
    Numero,
    /// String literal
    Teksto,
    /// Boolean keyword: Tama or Mali
    Tsek,

    // Control-construct keywords
    Kung,
    Kapag,
    Kaso,
    Hinto,
    Habang,
    Bawat,
    Sa,
    Gawa,

    Identifier,
    Comment,

    // Punctuation and operators
    Dot,
    Plus,
    Minus,
    Times,
    Divide,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Comma,
    Semicolon,
    Colon,
    Equals,
    Greater,
    Less,
    GreaterEqual,
    LessEqual,

    Eof,
}

impl TokenKind {
    /// Contract-surface name of the kind, as used in error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BasicType => "BASIC_TYPE",
            Self::Numero => "NUMERO",
            Self::Teksto => "TEKSTO",
            Self::Tsek => "TSEK",
            Self::Kung => "KUNG",
            Self::Kapag => "KAPAG",
            Self::Kaso => "KASO",
            Self::Hinto => "HINTO",
            Self::Habang => "HABANG",
            Self::Bawat => "BAWAT",
            Self::Sa => "SA",
            Self::Gawa => "GAWA",
            Self::Identifier => "IDENTIFIER",
            Self::Comment => "COMMENT",
            Self::Dot => "DOT",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Times => "TIMES",
            Self::Divide => "DIVIDE",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::LBrace => "LBRACE",
            Self::RBrace => "RBRACE",
            Self::LBracket => "LBRACKET",
            Self::RBracket => "RBRACKET",
            Self::Comma => "COMMA",
            Self::Semicolon => "SEMICOLON",
            Self::Colon => "COLON",
            Self::Equals => "EQUALS",
            Self::Greater => "GREATER",
            Self::Less => "LESS",
            Self::GreaterEqual => "GREATER_EQUAL",
            Self::LessEqual => "LESS_EQUAL",
            Self::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Token value payload
///
/// Numeric literals carry a parsed number; string literals carry their
/// content with the quotes stripped; keywords, identifiers, punctuation
/// and comments carry raw text; `EOF` carries nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    None,
    Integer(i64),
    Float(f64),
    Str(String),
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => Ok(()),
            Self::Integer(n) => write!(f, "{}", n),
            Self::Float(x) => write!(f, "{}", x),
            Self::Str(s) => write!(f, "{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(TokenKind::BasicType.as_str(), "BASIC_TYPE");
        assert_eq!(TokenKind::GreaterEqual.as_str(), "GREATER_EQUAL");
        assert_eq!(TokenKind::Eof.as_str(), "EOF");
    }

    #[test]
    fn test_token_display() {
        let token = Token::new(TokenKind::Times, TokenValue::Str("*".to_string()), 3);
        assert_eq!(token.to_string(), "TIMES '*'");

        let eof = Token::new(TokenKind::Eof, TokenValue::None, 1);
        assert_eq!(eof.to_string(), "EOF");
    }

    #[test]
    fn test_token_text() {
        let token = Token::new(TokenKind::Identifier, TokenValue::Str("luto".to_string()), 1);
        assert_eq!(token.text(), "luto");

        let number = Token::new(TokenKind::Numero, TokenValue::Integer(5), 1);
        assert_eq!(number.text(), "");
    }
}
