//! Console front end.
//!
//! - **[`app`]** — the read loop and mode selection
//! - **[`tree`]** — box-drawing syntax tree printer
//! - **[`tokens`]** — token dump
//! - **[`theme`]** — color palette and the scoped color guard
//!
//! The entry point for consumers is [`App`]: construct it with a [`Mode`]
//! and call [`App::run`] with any reader and writer.
//!
//! [`App::run`]: app::App::run

pub mod app;
pub mod theme;
pub mod tokens;
pub mod tree;

pub use app::{App, Mode};
