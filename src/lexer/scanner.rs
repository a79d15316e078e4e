//! Scanner implementation for the CodeGo language
//!
//! The scanner walks the source left to right once. At each position an
//! ordered table of lexical categories is tried and the first category
//! that matches wins. Keyword categories sit ahead of the identifier
//! catch-all, so a keyword lexeme is classified before the identifier
//! rule can claim it; a side effect is that an identifier starting with
//! a keyword spelling is split into a keyword token plus a trailing
//! identifier token.

use super::token::{Token, TokenKind, TokenValue};
use crate::error::{LexError, LexResult};

/// What the scanner does with a matched lexeme
#[derive(Debug, Clone, Copy)]
enum Category {
    /// Emit a token of this kind with the raw lexeme as its value
    Emit(TokenKind),
    /// Emit a numeric token, parsing the lexeme as integer or float
    Number,
    /// Emit a string token with the surrounding quotes stripped
    Text,
    /// Emit a comment token carrying the text after the `#` marker
    Comment,
    /// Count the line and emit nothing
    Newline,
    /// Discard the lexeme
    Whitespace,
}

/// How a category recognizes a lexeme at the scan position
enum Pattern {
    /// Exact prefix; no word boundary is applied
    Literal(&'static str),
    /// First alternative that is a prefix wins
    AnyOf(&'static [&'static str]),
    /// Custom matcher returning the matched byte length
    Matcher(fn(&str) -> Option<usize>),
}

impl Pattern {
    fn matched_len(&self, rest: &str) -> Option<usize> {
        match self {
            Self::Literal(lit) => rest.starts_with(lit).then(|| lit.len()),
            Self::AnyOf(alts) => alts
                .iter()
                .find(|alt| rest.starts_with(*alt))
                .map(|alt| alt.len()),
            Self::Matcher(matcher) => matcher(rest),
        }
    }
}

/// The fixed category table, in priority order. The two-character
/// comparison operators sit ahead of their one-character prefixes so
/// that `>=` and `<=` are producible.
const CATEGORIES: &[(Category, Pattern)] = &[
    (
        Category::Emit(TokenKind::BasicType),
        Pattern::AnyOf(&["Numero", "Desimal", "Teksto", "Tsek", "Lista", "Bagay"]),
    ),
    (Category::Number, Pattern::Matcher(match_number)),
    (Category::Text, Pattern::Matcher(match_string)),
    (
        Category::Emit(TokenKind::Tsek),
        Pattern::AnyOf(&["Tama", "Mali"]),
    ),
    (Category::Emit(TokenKind::Kung), Pattern::Literal("Kung")),
    (Category::Emit(TokenKind::Kapag), Pattern::Literal("Kapag")),
    (Category::Emit(TokenKind::Kaso), Pattern::Literal("Kaso")),
    (Category::Emit(TokenKind::Hinto), Pattern::Literal("Hinto")),
    (
        Category::Emit(TokenKind::Habang),
        Pattern::Literal("Habang"),
    ),
    (Category::Emit(TokenKind::Bawat), Pattern::Literal("Bawat")),
    (Category::Emit(TokenKind::Sa), Pattern::Literal("Sa")),
    (Category::Emit(TokenKind::Gawa), Pattern::Literal("Gawa")),
    (
        Category::Emit(TokenKind::Identifier),
        Pattern::Matcher(match_identifier),
    ),
    (Category::Newline, Pattern::Literal("\n")),
    (Category::Comment, Pattern::Matcher(match_comment)),
    (Category::Whitespace, Pattern::Matcher(match_whitespace)),
    (Category::Emit(TokenKind::Dot), Pattern::Literal(".")),
    (Category::Emit(TokenKind::Plus), Pattern::Literal("+")),
    (Category::Emit(TokenKind::Minus), Pattern::Literal("-")),
    (Category::Emit(TokenKind::Times), Pattern::Literal("*")),
    (Category::Emit(TokenKind::Divide), Pattern::Literal("/")),
    (Category::Emit(TokenKind::LParen), Pattern::Literal("(")),
    (Category::Emit(TokenKind::RParen), Pattern::Literal(")")),
    (Category::Emit(TokenKind::LBrace), Pattern::Literal("{")),
    (Category::Emit(TokenKind::RBrace), Pattern::Literal("}")),
    (Category::Emit(TokenKind::LBracket), Pattern::Literal("[")),
    (Category::Emit(TokenKind::RBracket), Pattern::Literal("]")),
    (Category::Emit(TokenKind::Comma), Pattern::Literal(",")),
    (
        Category::Emit(TokenKind::Semicolon),
        Pattern::Literal(";"),
    ),
    (Category::Emit(TokenKind::Colon), Pattern::Literal(":")),
    (
        Category::Emit(TokenKind::GreaterEqual),
        Pattern::Literal(">="),
    ),
    (
        Category::Emit(TokenKind::LessEqual),
        Pattern::Literal("<="),
    ),
    (Category::Emit(TokenKind::Equals), Pattern::Literal("=")),
    (Category::Emit(TokenKind::Greater), Pattern::Literal(">")),
    (Category::Emit(TokenKind::Less), Pattern::Literal("<")),
];

/// Scanner for CodeGo source text
pub struct Scanner<'src> {
    source: &'src str,
    pos: usize,
    line: usize,
    tokens: Vec<Token>,
}

impl<'src> Scanner<'src> {
    /// Create a new scanner
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            pos: 0,
            line: 1,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the source text
    ///
    /// Produces the ordered token sequence ending in `EOF`, or the first
    /// `LexError`. No partial sequence is returned on failure.
    pub fn tokenize(mut self) -> LexResult<Vec<Token>> {
        while self.pos < self.source.len() {
            self.scan_token()?;
        }

        // EOF carries the final line number (line 1 for empty input)
        self.tokens
            .push(Token::new(TokenKind::Eof, TokenValue::None, self.line));

        Ok(self.tokens)
    }

    /// Scan one lexeme at the current position
    fn scan_token(&mut self) -> LexResult<()> {
        let rest = &self.source[self.pos..];

        for (category, pattern) in CATEGORIES {
            let Some(len) = pattern.matched_len(rest) else {
                continue;
            };
            // A zero-width match would stall the scan
            if len == 0 {
                continue;
            }
            self.emit(*category, &rest[..len]);
            self.pos += len;
            return Ok(());
        }

        // Fallback single-character category: fatal
        let character = rest.chars().next().unwrap_or('\0');
        Err(LexError {
            character,
            line: self.line,
        })
    }

    /// Emit a token (or nothing) for a matched lexeme
    fn emit(&mut self, category: Category, lexeme: &str) {
        match category {
            Category::Emit(kind) => {
                self.push(kind, TokenValue::Str(lexeme.to_string()));
            }
            Category::Number => {
                let value = if lexeme.contains('.') {
                    TokenValue::Float(lexeme.parse().unwrap_or(f64::INFINITY))
                } else {
                    match lexeme.parse::<i64>() {
                        Ok(n) => TokenValue::Integer(n),
                        // digit runs beyond i64 range keep the float payload
                        Err(_) => TokenValue::Float(lexeme.parse().unwrap_or(f64::INFINITY)),
                    }
                };
                self.push(TokenKind::Numero, value);
            }
            Category::Text => {
                let content = &lexeme[1..lexeme.len() - 1];
                self.push(TokenKind::Teksto, TokenValue::Str(content.to_string()));
                // The content may span newlines; keep later tokens accurate
                self.line += content.matches('\n').count();
            }
            Category::Comment => {
                let text = &lexeme[1..];
                self.push(TokenKind::Comment, TokenValue::Str(text.to_string()));
            }
            Category::Newline => {
                self.line += 1;
            }
            Category::Whitespace => {}
        }
    }

    fn push(&mut self, kind: TokenKind, value: TokenValue) {
        self.tokens.push(Token::new(kind, value, self.line));
    }
}

/// `\d+(\.\d+)?` — the decimal point is consumed only when digits follow
fn match_number(rest: &str) -> Option<usize> {
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }

    let mut len = digits;
    if let Some(fraction) = rest[digits..].strip_prefix('.') {
        let fraction_digits = fraction.bytes().take_while(u8::is_ascii_digit).count();
        if fraction_digits > 0 {
            len += 1 + fraction_digits;
        }
    }
    Some(len)
}

/// Double-quoted, no escape processing; the content cannot contain a
/// quote but may contain newlines. An unterminated string does not
/// match, so the opening quote falls through to the fatal fallback.
fn match_string(rest: &str) -> Option<usize> {
    let body = rest.strip_prefix('"')?;
    let close = body.find('"')?;
    Some(close + 2)
}

/// `[A-Za-z_][A-Za-z0-9_]*`
fn match_identifier(rest: &str) -> Option<usize> {
    let first = rest.bytes().next()?;
    if !(first.is_ascii_alphabetic() || first == b'_') {
        return None;
    }
    Some(
        rest.bytes()
            .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
            .count(),
    )
}

/// `#` through end of line, newline excluded
fn match_comment(rest: &str) -> Option<usize> {
    if !rest.starts_with('#') {
        return None;
    }
    Some(rest.find('\n').unwrap_or(rest.len()))
}

/// Whitespace other than newline; newlines go through their own
/// category so the line counter stays exact
fn match_whitespace(rest: &str) -> Option<usize> {
    let len = rest
        .chars()
        .take_while(|c| c.is_whitespace() && *c != '\n')
        .map(char::len_utf8)
        .sum();
    if len == 0 {
        None
    } else {
        Some(len)
    }
}
