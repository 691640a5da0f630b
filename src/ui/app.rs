//! Read loop state and logic

use crate::parser::parse::Parser;
use crate::ui::theme::{ForegroundGuard, DEFAULT_THEME};
use crate::ui::tokens::write_tokens;
use crate::ui::tree::write_tree;
use std::io::{self, BufRead, Write};
use tracing::debug;

pub const PROMPT: &str = "c[_] >> ";

/// What is shown for each line of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Parse the line and print its syntax tree
    #[default]
    Tree,
    /// Print the raw lexer output
    Tokens,
}

/// The read loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct App {
    pub mode: Mode,

    /// Whether the tree is drawn in the theme color
    pub color: bool,
}

impl App {
    pub fn new(mode: Mode, color: bool) -> Self {
        Self { mode, color }
    }

    /// Prompt, read a line, show it; until a blank line or end of input.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, output: &mut W) -> io::Result<()> {
        let mut line = String::new();

        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                debug!("end of input");
                break;
            }
            if line.trim().is_empty() {
                break;
            }

            self.evaluate(line.trim_end_matches(&['\r', '\n'][..]), output)?;
        }

        Ok(())
    }

    /// Show a single line according to the current mode.
    pub fn evaluate<W: Write>(&self, line: &str, output: &mut W) -> io::Result<()> {
        match self.mode {
            Mode::Tokens => write_tokens(output, line),
            Mode::Tree => {
                let expression = Parser::new(line).parse();
                let color = self.color.then_some(DEFAULT_THEME.tree);
                let mut out = ForegroundGuard::new(output, color)?;
                write_tree(&mut out, expression.as_node())
            }
        }
    }
}
