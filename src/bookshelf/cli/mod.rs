//! # CLI Layer
//!
//! One possible front-end for the catalog. This is the only place that knows
//! about the terminal: argument parsing, drawing the view, reading form input
//! and exit codes.
//!
//! - `setup`: clap definitions
//! - `commands`: dispatch and one-shot handlers (`add`, `list`, `remove`, `config`)
//! - `shell`: the interactive session
//! - `render`: table and banner drawing

mod commands;
mod render;
mod setup;
mod shell;

pub use commands::run;
