//! Shared utilities.

pub mod shuffle;

pub use shuffle::{shuffle, shuffle_with};
