//! Recursive descent parser
//!
//! [`Parser::new`] lexes the whole line up front and keeps only the tokens
//! the grammar cares about: whitespace and bad tokens are dropped, the
//! end-of-file token is kept so lookahead always has something to return.
//!
//! # Grammar
//!
//! ```text
//! expression := primary (('+' | '-') primary)*
//! primary    := NUMBER
//! ```
//!
//! Operators fold to the left. `*`, `/` and parentheses are lexed but not
//! part of the grammar; reaching one simply ends the expression.
//!
//! Parsing never fails. When an expected token is missing, [`Parser::match_token`]
//! hands back a placeholder of the expected kind with no text or value and
//! leaves the cursor where it is.

use crate::parser::ast::ExpressionSyntax;
use crate::parser::lexer::Lexer;
use crate::parser::token::{SyntaxKind, Token};
use tracing::debug;

pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) position: usize,
}

impl Parser {
    pub fn new(source: &str) -> Self {
        let tokens: Vec<Token> = Lexer::new(source)
            .tokenize()
            .into_iter()
            .filter(|token| !token.kind.is_trivia())
            .collect();
        debug!(count = tokens.len(), "buffered tokens");

        Self {
            tokens,
            position: 0,
        }
    }

    /// The filtered token buffer. Always ends with the end-of-file token.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Look ahead `offset` tokens, clamped to the end-of-file token.
    pub fn peek(&self, offset: usize) -> &Token {
        let index = self.position + offset;
        let last = self.tokens.len() - 1;
        &self.tokens[index.min(last)]
    }

    pub fn current(&self) -> &Token {
        self.peek(0)
    }

    /// Return the current token and move past it.
    pub fn next_token(&mut self) -> Token {
        let current = self.current().clone();
        self.position += 1;
        current
    }

    /// Consume a token of `kind`, or synthesize a placeholder for it.
    ///
    /// The placeholder's position is the buffer index of the cursor, not a
    /// source offset.
    pub fn match_token(&mut self, kind: SyntaxKind) -> Token {
        if self.current().kind == kind {
            return self.next_token();
        }

        debug!(expected = %kind, found = %self.current().kind, index = self.position, "inserting missing token");
        Token::missing(kind, self.position)
    }

    /// Parse an additive expression.
    pub fn parse(&mut self) -> ExpressionSyntax {
        let mut left = self.parse_primary_expression();

        while matches!(
            self.current().kind,
            SyntaxKind::PlusToken | SyntaxKind::MinusToken
        ) {
            let operator_token = self.next_token();
            let right = self.parse_primary_expression();
            left = ExpressionSyntax::binary(left, operator_token, right);
        }

        left
    }

    fn parse_primary_expression(&mut self) -> ExpressionSyntax {
        let number_token = self.match_token(SyntaxKind::NumberToken);
        ExpressionSyntax::number(number_token)
    }
}
