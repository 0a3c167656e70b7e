use crate::core::interactions::PairwiseInteraction;
use crate::core::models::{Boundary, ParticleProps};
use crate::core::units::Energy;
use crate::engine::error::EngineError;
use crate::engine::neighbors::NeighborList;
use nalgebra::Point3;
use rayon::prelude::*;
use tracing::instrument;

/// Total non-bonded potential energy over the candidate pairs.
///
/// Per-pair evaluations are independent, so they are reduced in parallel;
/// the result is deterministic up to floating-point summation order.
#[instrument(skip_all, name = "total_energy_task")]
pub fn run<I: PairwiseInteraction + Sync>(
    interaction: &I,
    coords: &[Point3<f64>],
    props: &[ParticleProps],
    boundary: &Boundary,
    neighbors: Option<&NeighborList>,
) -> Result<Energy, EngineError> {
    let pairs = super::candidate_pairs(interaction, coords, props, neighbors)?;

    let total = pairs
        .pairs
        .par_iter()
        .map(|pair| {
            let dr = boundary.displacement(&coords[pair.i], &coords[pair.j]);
            interaction.potential_energy(
                dr,
                &coords[pair.i],
                &coords[pair.j],
                &props[pair.i],
                &props[pair.j],
                boundary,
                pair.special,
            )
        })
        .reduce(|| Energy::zero(interaction.energy_unit()), |a, b| a + b);

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::interactions::{Coulomb, Interaction};
    use crate::core::units::EnergyUnit;
    use crate::engine::neighbors::NeighborPair;
    use nalgebra::Vector3;

    #[test]
    fn two_particle_total_matches_direct_kernel_call() {
        let inter = Coulomb::default();
        let coords = vec![Point3::origin(), Point3::new(0.3, 0.0, 0.0)];
        let props = vec![ParticleProps::new(1.0, 0.0), ParticleProps::new(-1.0, 0.0)];
        let boundary = Boundary::Open;

        let total = run(&inter, &coords, &props, &boundary, None).unwrap();
        let direct = inter.potential_energy(
            Vector3::new(0.3, 0.0, 0.0),
            &coords[0],
            &coords[1],
            &props[0],
            &props[1],
            &boundary,
            false,
        );
        assert!((total.value - direct.value).abs() < 1e-12);
        assert_eq!(total.unit, EnergyUnit::KilojoulePerMole);
    }

    #[test]
    fn empty_system_yields_unit_tagged_zero() {
        let inter = Coulomb {
            energy_unit: EnergyUnit::KilocaloriePerMole,
            ..Coulomb::default()
        };
        let total = run(&inter, &[], &[], &Boundary::Open, None).unwrap();
        assert_eq!(total.value, 0.0);
        assert_eq!(total.unit, EnergyUnit::KilocaloriePerMole);
    }

    #[test]
    fn neighbor_list_restricts_which_pairs_contribute() {
        let inter = Coulomb {
            use_neighbors: true,
            ..Coulomb::default()
        };
        let coords = vec![
            Point3::origin(),
            Point3::new(0.3, 0.0, 0.0),
            Point3::new(0.0, 0.4, 0.0),
        ];
        let props = vec![
            ParticleProps::new(1.0, 0.0),
            ParticleProps::new(-1.0, 0.0),
            ParticleProps::new(1.0, 0.0),
        ];
        let boundary = Boundary::Open;

        let only_first = NeighborList::new(vec![NeighborPair::new(0, 1, false)]);
        let restricted = run(&inter, &coords, &props, &boundary, Some(&only_first)).unwrap();

        let all = Coulomb::default();
        let full = run(&all, &coords, &props, &boundary, None).unwrap();
        assert!((restricted.value - (-463.118_192_133_333_3)).abs() < 1e-6);
        assert!(full.value != restricted.value);
    }

    #[test]
    fn minimum_image_is_applied_under_periodic_boundary() {
        let inter = Coulomb::default();
        // 0.1 nm apart through the boundary, 1.9 nm apart in raw coordinates.
        let coords = vec![Point3::new(0.05, 0.0, 0.0), Point3::new(1.95, 0.0, 0.0)];
        let props = vec![ParticleProps::new(1.0, 0.0), ParticleProps::new(1.0, 0.0)];
        let boundary = Boundary::Cuboid {
            side_lengths: Vector3::new(2.0, 2.0, 2.0),
        };

        let total = run(&inter, &coords, &props, &boundary, None).unwrap();
        let expected = inter.coulomb_const / 0.1;
        assert!((total.value - expected).abs() < 1e-6);
    }

    #[test]
    fn model_erased_interaction_accumulates_identically() {
        let plain = Coulomb::default();
        let erased = Interaction::Coulomb(plain.clone());
        let coords = vec![Point3::origin(), Point3::new(0.3, 0.1, 0.0)];
        let props = vec![ParticleProps::new(0.5, 0.0), ParticleProps::new(-0.5, 0.0)];
        let boundary = Boundary::Open;

        let a = run(&plain, &coords, &props, &boundary, None).unwrap();
        let b = run(&erased, &coords, &props, &boundary, None).unwrap();
        assert_eq!(a, b);
    }
}
