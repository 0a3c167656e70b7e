use crate::core::interactions::PairwiseInteraction;
use crate::core::models::{Boundary, ParticleProps};
use crate::core::units::Force;
use crate::engine::error::EngineError;
use crate::engine::neighbors::NeighborList;
use nalgebra::{Point3, Vector3};
use rayon::prelude::*;
use tracing::instrument;

/// Net force on every particle from the candidate pairs.
///
/// Each pair contributes `+f` to particle `j` and `−f` to particle `i`, so
/// the totals sum to zero for any closed system. Accumulation runs as a
/// parallel fold over per-worker partial sums.
#[instrument(skip_all, name = "forces_task")]
pub fn run<I: PairwiseInteraction + Sync>(
    interaction: &I,
    coords: &[Point3<f64>],
    props: &[ParticleProps],
    boundary: &Boundary,
    neighbors: Option<&NeighborList>,
) -> Result<Vec<Force>, EngineError> {
    let pairs = super::candidate_pairs(interaction, coords, props, neighbors)?;
    let n = coords.len();

    let accumulated = pairs
        .pairs
        .par_iter()
        .fold(
            || vec![Vector3::zeros(); n],
            |mut acc, pair| {
                let dr = boundary.displacement(&coords[pair.i], &coords[pair.j]);
                let f = interaction
                    .force(
                        dr,
                        &coords[pair.i],
                        &coords[pair.j],
                        &props[pair.i],
                        &props[pair.j],
                        boundary,
                        pair.special,
                    )
                    .vector;
                acc[pair.j] += f;
                acc[pair.i] -= f;
                acc
            },
        )
        .reduce(
            || vec![Vector3::zeros(); n],
            |mut a, b| {
                for (lhs, rhs) in a.iter_mut().zip(b) {
                    *lhs += rhs;
                }
                a
            },
        );

    Ok(accumulated
        .into_iter()
        .map(|vector| Force::new(vector, interaction.force_unit()))
        .collect())
}
