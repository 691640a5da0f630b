//! Expression parser
//!
//! This module turns one line of text into a syntax tree:
//! - [`token`]: Token kinds and the [`token::Token`] value
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: Parsing (tokens → syntax tree)
//! - [`ast`]: Syntax tree node definitions
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser. Additive operators fold to the
//! left; there is no precedence climbing.

pub mod ast;
pub mod lexer;
pub mod parse;
pub mod token;
