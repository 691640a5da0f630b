// Syntax tree definitions for additive expressions

use super::token::{SyntaxKind, Token};

/// An expression node. Children are owned; the tree has no sharing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpressionSyntax {
    Number {
        number_token: Token,
    },
    Binary {
        left: Box<ExpressionSyntax>,
        operator_token: Token,
        right: Box<ExpressionSyntax>,
    },
}

impl ExpressionSyntax {
    pub fn number(number_token: Token) -> Self {
        ExpressionSyntax::Number { number_token }
    }

    pub fn binary(left: ExpressionSyntax, operator_token: Token, right: ExpressionSyntax) -> Self {
        ExpressionSyntax::Binary {
            left: Box::new(left),
            operator_token,
            right: Box::new(right),
        }
    }

    pub fn kind(&self) -> SyntaxKind {
        match self {
            ExpressionSyntax::Number { .. } => SyntaxKind::NumberExpression,
            ExpressionSyntax::Binary { .. } => SyntaxKind::BinaryExpression,
        }
    }

    /// View of this expression as a generic tree node.
    pub fn as_node(&self) -> SyntaxNode<'_> {
        SyntaxNode::Expression(self)
    }
}

/// Borrowed view over any node of the tree, tokens included.
///
/// Consumers that only need the shape of the tree (the printer) walk it
/// through [`SyntaxNode::kind`] and [`SyntaxNode::children`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxNode<'a> {
    Token(&'a Token),
    Expression(&'a ExpressionSyntax),
}

impl<'a> SyntaxNode<'a> {
    pub fn kind(&self) -> SyntaxKind {
        match self {
            SyntaxNode::Token(token) => token.kind,
            SyntaxNode::Expression(expr) => expr.kind(),
        }
    }

    /// Immediate children in source order. Empty for tokens.
    pub fn children(&self) -> Vec<SyntaxNode<'a>> {
        match *self {
            SyntaxNode::Token(_) => Vec::new(),
            SyntaxNode::Expression(ExpressionSyntax::Number { number_token }) => {
                vec![SyntaxNode::Token(number_token)]
            }
            SyntaxNode::Expression(ExpressionSyntax::Binary {
                left,
                operator_token,
                right,
            }) => vec![
                SyntaxNode::Expression(left),
                SyntaxNode::Token(operator_token),
                SyntaxNode::Expression(right),
            ],
        }
    }

    /// Parsed value, for number tokens.
    pub fn value(&self) -> Option<i32> {
        match self {
            SyntaxNode::Token(token) => token.value,
            SyntaxNode::Expression(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(value: i32, position: usize) -> ExpressionSyntax {
        ExpressionSyntax::number(Token::new(
            SyntaxKind::NumberToken,
            position,
            value.to_string(),
            Some(value),
        ))
    }

    #[test]
    fn test_number_children() {
        let expr = num(5, 0);
        let node = expr.as_node();
        let children = node.children();

        assert_eq!(node.kind(), SyntaxKind::NumberExpression);
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].kind(), SyntaxKind::NumberToken);
        assert_eq!(children[0].value(), Some(5));
        assert!(children[0].children().is_empty());
    }

    #[test]
    fn test_binary_children_order() {
        let plus = Token::new(SyntaxKind::PlusToken, 2, "+", None);
        let expr = ExpressionSyntax::binary(num(1, 0), plus, num(2, 4));
        let kinds: Vec<SyntaxKind> = expr.as_node().children().iter().map(|c| c.kind()).collect();

        assert_eq!(expr.kind(), SyntaxKind::BinaryExpression);
        assert_eq!(
            kinds,
            vec![
                SyntaxKind::NumberExpression,
                SyntaxKind::PlusToken,
                SyntaxKind::NumberExpression,
            ]
        );
    }

    #[test]
    fn test_children_repeatable() {
        let expr = num(9, 0);
        assert_eq!(expr.as_node().children(), expr.as_node().children());
    }
}
