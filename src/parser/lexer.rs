//! Lexer (tokenizer) for additive expressions
//!
//! Pull-based: each call to [`Lexer::next_token`] scans one token and moves
//! the cursor past it. Every character classifies to some token, so lexing
//! never fails; unrecognized characters come out as
//! [`SyntaxKind::BadToken`].

use super::token::{SyntaxKind, Token};
use tracing::{trace, warn};

/// Text carried by the end-of-file token.
pub const EOF_TEXT: &str = "\0";

/// Lexer for a single line of source
pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
        }
    }

    /// Lex the whole input, up to and including the end-of-file token.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.kind == SyntaxKind::EndOfFileToken;
            tokens.push(token);
            if done {
                break;
            }
        }
        tokens
    }

    /// Scan the next token.
    ///
    /// Once the input is exhausted this keeps returning an end-of-file token
    /// positioned at the input length.
    pub fn next_token(&mut self) -> Token {
        let token = self.scan();
        trace!(kind = %token.kind, position = token.position, "lexed token");
        token
    }

    fn scan(&mut self) -> Token {
        let start = self.position;
        let Some(ch) = self.peek() else {
            return Token::new(SyntaxKind::EndOfFileToken, start, EOF_TEXT, None);
        };

        if ch.is_numeric() {
            self.advance_while(char::is_numeric);
            let text = self.text_from(start);
            let value = text.parse::<i32>().unwrap_or_else(|_| {
                warn!(text = %text, position = start, "number literal is not a valid i32, using 0");
                0
            });
            return Token::new(SyntaxKind::NumberToken, start, text, Some(value));
        }

        if ch.is_whitespace() {
            self.advance_while(char::is_whitespace);
            return Token::new(SyntaxKind::WhiteSpaceToken, start, self.text_from(start), None);
        }

        self.position += 1;
        let kind = SyntaxKind::from_operator(ch).unwrap_or(SyntaxKind::BadToken);
        Token::new(kind, start, ch, None)
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.position += 1;
        }
    }

    fn text_from(&self, start: usize) -> String {
        self.input[start..self.position].iter().collect()
    }
}

/// Yields tokens up to, but not including, end of file.
impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        (token.kind != SyntaxKind::EndOfFileToken).then_some(token)
    }
}
