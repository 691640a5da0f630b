//! # Introduction
//!
//! `ttc` reads one line at a time, lexes it, and either dumps the tokens or
//! parses an additive expression and prints its syntax tree.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Parser → Syntax tree → Printer
//!        └───────────────────────────────→ Token dump
//! ```
//!
//! 1. [`parser`] — tokenises the line and builds the tree.
//! 2. [`ui`] — the read loop, tree printer and token dump.
//!
//! ## Supported grammar
//!
//! Integer literals joined by `+` and `-`, folded left to right. `*`, `/`
//! and parentheses are recognised by the lexer but end the expression.
//! Nothing here reports errors: unknown characters are skipped and missing
//! numbers become empty placeholder tokens.

pub mod parser;
pub mod ui;
