//! Data models module
//!
//! This module contains the data structures exchanged with the bhandara
//! service and shared by the form and feed state machines.

pub mod bhandara;
pub mod coordinates;

// Re-export commonly used models
pub use bhandara::{Bhandara, CreateBhandaraRequest};
pub use coordinates::{Coordinates, CoordinateSource};
