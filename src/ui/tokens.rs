//! Token dump: the raw lexer output for a line, one token per line.

use crate::parser::lexer::Lexer;
use std::io::{self, Write};

/// Write every token of `source` before end of file, whitespace and bad
/// tokens included.
pub fn write_tokens<W: Write>(out: &mut W, source: &str) -> io::Result<()> {
    for token in Lexer::new(source) {
        writeln!(out, "{}", token)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dump() {
        let mut out = Vec::new();
        write_tokens(&mut out, "12 +x").unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "NumberToken : '12' | val=12\n\
             WhiteSpaceToken : ' '\n\
             PlusToken : '+'\n\
             BadToken : 'x'\n"
        );
    }

    #[test]
    fn test_empty_line_prints_nothing() {
        let mut out = Vec::new();
        write_tokens(&mut out, "").unwrap();
        assert!(out.is_empty());
    }
}
