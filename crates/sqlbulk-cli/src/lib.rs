//! Building blocks of the `sqlbulk` binary: argument parsing, name input, config and
//! mapping file loading, batch resolution and report formatting. Split out of
//! `main.rs` so each step can be unit tested.

pub mod cli;
pub mod input;
pub mod output;
pub mod resolve;
pub mod settings;

pub use cli::Args;
