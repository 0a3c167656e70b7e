//! # Nonbond Core Library
//!
//! Pairwise non-bonded Coulomb interactions for molecular simulation: a plain
//! Coulomb kernel, a soft-core variant for free-energy perturbation, and a
//! reaction-field-corrected variant, all sharing one per-pair calling contract.
//!
//! ## Architectural Philosophy
//!
//! The library is split into two layers with a strict dependency direction,
//! so that the innermost-loop math stays pure and trivially parallelizable.
//!
//! - **[`core`]: The Foundation.** Stateless data models (`ParticleProps`,
//!   `Boundary`, unit-tagged quantities), the cutoff policy, the three
//!   interaction kernels, and parameter/pair-table loading. Every kernel
//!   evaluation is a pure, allocation-free function of its inputs.
//!
//! - **[`engine`]: The Driver Layer.** Accumulation of per-pair results into
//!   system totals (potential energy, per-particle forces) over a neighbor
//!   list or all pairs, with parallel reduction. This layer owns the error
//!   handling for malformed inputs; the kernels themselves are total.
pub mod core;
pub mod engine;
