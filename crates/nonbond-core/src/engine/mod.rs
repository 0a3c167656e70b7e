//! # Engine Module
//!
//! Driver-side accumulation of per-pair kernel results into system totals.
//! The kernels themselves are pure and total; this layer owns pair selection
//! (neighbor list or all pairs), minimum-image displacement construction,
//! parallel reduction, and input validation.

pub mod error;
pub mod neighbors;
pub mod tasks;

pub use error::EngineError;
pub use neighbors::{NeighborList, NeighborPair};
