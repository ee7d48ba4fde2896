//! Command handlers

pub mod add;
pub mod nearby;

pub use add::{handle_add, AddOptions};
pub use nearby::{handle_nearby, render_card};
