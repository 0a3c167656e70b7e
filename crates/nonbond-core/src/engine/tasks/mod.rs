//! Accumulation tasks: each takes one interaction parameter set, the system
//! state, and an optional neighbor list, and reduces per-pair kernel results
//! into a system total.

pub mod forces;
pub mod total_energy;

use crate::core::interactions::PairwiseInteraction;
use crate::core::models::ParticleProps;
use crate::engine::error::EngineError;
use crate::engine::neighbors::NeighborList;
use nalgebra::Point3;
use std::borrow::Cow;

/// Validates inputs and selects the pair source: the supplied neighbor list
/// when the parameter set asks for one, every unordered pair otherwise.
fn candidate_pairs<'a, I: PairwiseInteraction>(
    interaction: &I,
    coords: &[Point3<f64>],
    props: &[ParticleProps],
    neighbors: Option<&'a NeighborList>,
) -> Result<Cow<'a, NeighborList>, EngineError> {
    if coords.len() != props.len() {
        return Err(EngineError::MismatchedLengths {
            coords: coords.len(),
            props: props.len(),
        });
    }

    let pairs = if interaction.use_neighbors() {
        Cow::Borrowed(neighbors.ok_or(EngineError::MissingNeighborList)?)
    } else {
        Cow::Owned(NeighborList::all_pairs(coords.len()))
    };

    for pair in &pairs.pairs {
        if pair.i >= coords.len() || pair.j >= coords.len() {
            return Err(EngineError::PairOutOfBounds {
                i: pair.i,
                j: pair.j,
                particles: coords.len(),
            });
        }
    }
    Ok(pairs)
}
