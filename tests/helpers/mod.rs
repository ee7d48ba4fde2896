//! Test helpers module
//!
//! Mock bhandara service, scripted location providers and sample data
//! shared by the integration tests.

#![allow(dead_code)]

pub mod bhandara_mock;
pub mod test_data;

pub use bhandara_mock::*;
pub use test_data::*;
