//! Counting the ways to make change from an unlimited supply of coins.
//!
//! See [`cs::dynamic::coin_change`] for the algorithm.

pub mod cs;

pub use cs::dynamic;
pub use cs::dynamic::*;
pub use cs::error::{Error, Result};
