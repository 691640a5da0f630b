//! Box-drawing tree printer
//!
//! Depth-first, pre-order: one line per node, prefixed by the indentation
//! built up from its ancestors and a branch glyph. Only
//! [`SyntaxNode::kind`] and [`SyntaxNode::children`] are used, so any node
//! shape prints the same way.

use crate::parser::ast::SyntaxNode;
use std::io::{self, Write};

const BRANCH: &str = "├──";
const LAST_BRANCH: &str = "└──";
const CONTINUATION: &str = "│   ";
const BLANK: &str = "    ";

/// Print `root` and everything below it.
pub fn write_tree<W: Write>(out: &mut W, root: SyntaxNode<'_>) -> io::Result<()> {
    // The root has no siblings.
    write_node(out, root, "", true)
}

fn write_node<W: Write>(
    out: &mut W,
    node: SyntaxNode<'_>,
    indent: &str,
    is_last: bool,
) -> io::Result<()> {
    let marker = if is_last { LAST_BRANCH } else { BRANCH };
    write!(out, "{}{}{}", indent, marker, node.kind())?;
    if let Some(value) = node.value() {
        write!(out, " {}", value)?;
    }
    writeln!(out)?;

    let indent = format!("{}{}", indent, if is_last { BLANK } else { CONTINUATION });
    let children = node.children();
    let last = children.len().saturating_sub(1);
    for (i, child) in children.into_iter().enumerate() {
        write_node(out, child, &indent, i == last)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse::Parser;

    fn render(source: &str) -> String {
        let expr = Parser::new(source).parse();
        let mut out = Vec::new();
        write_tree(&mut out, expr.as_node()).unwrap();
        String::from_utf8(out).unwrap()
    }

    // The root has no siblings, so it is drawn as a last child and its
    // subtree is indented with blanks rather than a continuation bar.
    #[test]
    fn test_single_number() {
        assert_eq!(render("42"), "└──NumberExpression\n    └──NumberToken 42\n");
    }

    #[test]
    fn test_lines_have_no_trailing_padding() {
        let out = render("10 + 20 - 3");

        assert!(out.contains("NumberToken 10\n"));
        assert!(out.lines().all(|line| !line.ends_with(' ')));
    }

    #[test]
    fn test_binary() {
        let expected = "\
└──BinaryExpression
    ├──NumberExpression
    │   └──NumberToken 1
    ├──PlusToken
    └──NumberExpression
        └──NumberToken 2
";
        assert_eq!(render("1 + 2"), expected);
    }

    #[test]
    fn test_missing_operand_has_no_value() {
        let expected = "\
└──BinaryExpression
    ├──NumberExpression
    │   └──NumberToken 1
    ├──MinusToken
    └──NumberExpression
        └──NumberToken
";
        assert_eq!(render("1 -"), expected);
    }
}
