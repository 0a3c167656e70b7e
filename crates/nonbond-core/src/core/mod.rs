//! # Core Module
//!
//! The computational foundation of the library: data models, unit-tagged
//! quantities, the cutoff policy, and the three pairwise Coulomb kernels.
//!
//! ## Overview
//!
//! Everything in this module is a pure value type or a pure function. The
//! kernels in [`interactions`] are evaluated once per candidate pair on the
//! simulation's innermost loop and never touch shared mutable state, so they
//! are safe to call from any number of parallel workers.
//!
//! - **Data models** ([`models`]) - particle property records and boundary geometry
//! - **Quantities** ([`units`]) - unit-tagged energy and force values
//! - **Cutoff policy** ([`cutoffs`]) - distance-based tapering of interactions
//! - **Interaction kernels** ([`interactions`]) - the three Coulomb models
//! - **Parameter loading** ([`params`]) - TOML construction-time configuration
//! - **Pair tables** ([`io`]) - CSV input of candidate pairs

pub mod cutoffs;
pub mod interactions;
pub mod io;
pub mod models;
pub mod params;
pub mod units;
