//! Command modules for the sablet CLI.
//!
//! This module contains implementations for all available subcommands.
//! Each subcommand lives in its own file and exposes an `*Args` struct plus
//! a `run_*` function.

pub mod common;

pub mod check;
pub mod lex;
pub mod names;
pub mod normalize;

// Re-export command types and functions
pub use check::{run_check, CheckArgs};
pub use lex::{run_lex, LexArgs};
pub use names::{run_names, NamesArgs};
pub use normalize::{run_normalize, NormalizeArgs};
