//! Command handlers module
//!
//! Each command drives one of the screen state machines with values taken
//! from the command line and returns the text to print.

pub mod commands;

pub use commands::*;
