//! Token definitions shared by the lexer, the parser and the token dump.

use std::fmt;

/// Every kind of node that can appear in a syntax tree.
///
/// The first ten variants are produced by the lexer; the last two only ever
/// label expression nodes built by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxKind {
    // Tokens
    NumberToken,
    WhiteSpaceToken,
    PlusToken,
    MinusToken,
    StarToken,
    SlashToken,
    LeftParenToken,
    RightParenToken,
    BadToken,
    EndOfFileToken,

    // Expressions
    NumberExpression,
    BinaryExpression,
}

impl SyntaxKind {
    /// Kind of a single-character operator token, if `ch` is one.
    pub fn from_operator(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(SyntaxKind::PlusToken),
            '-' => Some(SyntaxKind::MinusToken),
            '*' => Some(SyntaxKind::StarToken),
            '/' => Some(SyntaxKind::SlashToken),
            '(' => Some(SyntaxKind::LeftParenToken),
            ')' => Some(SyntaxKind::RightParenToken),
            _ => None,
        }
    }

    /// Whitespace and unrecognized characters never reach the parser.
    pub fn is_trivia(self) -> bool {
        matches!(self, SyntaxKind::WhiteSpaceToken | SyntaxKind::BadToken)
    }
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A lexical token.
///
/// `text` is only `None` for placeholders the parser synthesizes when an
/// expected token is missing; their `position` is an index into the
/// parser's token buffer rather than a character offset. `value` is only set
/// on number tokens, and is 0 when the digits do not parse as an `i32`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub position: usize,
    pub text: Option<String>,
    pub value: Option<i32>,
}

impl Token {
    pub fn new(kind: SyntaxKind, position: usize, text: impl Into<String>, value: Option<i32>) -> Self {
        Token {
            kind,
            position,
            text: Some(text.into()),
            value,
        }
    }

    /// Stand-in for a token the parser expected but did not find.
    pub fn missing(kind: SyntaxKind, position: usize) -> Self {
        Token {
            kind,
            position,
            text: None,
            value: None,
        }
    }

    pub fn is_missing(&self) -> bool {
        self.text.is_none()
    }
}

/// Token dump line: `<Kind> : '<Text>'`, with ` | val=<Value>` for numbers.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : '{}'", self.kind, self.text.as_deref().unwrap_or(""))?;
        if let Some(value) = self.value {
            write!(f, " | val={}", value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_kinds() {
        assert_eq!(SyntaxKind::from_operator('+'), Some(SyntaxKind::PlusToken));
        assert_eq!(SyntaxKind::from_operator(')'), Some(SyntaxKind::RightParenToken));
        assert_eq!(SyntaxKind::from_operator('%'), None);
    }

    #[test]
    fn test_display() {
        let number = Token::new(SyntaxKind::NumberToken, 0, "42", Some(42));
        assert_eq!(number.to_string(), "NumberToken : '42' | val=42");

        let plus = Token::new(SyntaxKind::PlusToken, 3, "+", None);
        assert_eq!(plus.to_string(), "PlusToken : '+'");
    }

    #[test]
    fn test_missing_token() {
        let token = Token::missing(SyntaxKind::NumberToken, 2);
        assert!(token.is_missing());
        assert_eq!(token.value, None);
        assert!(!Token::new(SyntaxKind::BadToken, 0, "?", None).is_missing());
    }
}
