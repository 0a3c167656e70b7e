//! # Interaction Kernels
//!
//! The three pairwise Coulomb models. All share one calling contract
//! ([`PairwiseInteraction`]) and differ only in closed-form math and in how
//! they delegate to the cutoff policy:
//!
//! - [`Coulomb`] - standard electrostatics, tapered by a [`Cutoff`](crate::core::cutoffs::Cutoff).
//! - [`CoulombSoftCore`] - softened denominator for alchemical insertion/removal.
//! - [`CoulombReactionField`] - continuum correction beyond a hard cutoff distance.
//!
//! Every evaluation is a pure function of its inputs; the kernels allocate
//! nothing and touch no shared state, so they may run on any number of
//! parallel workers against a shared parameter set.

pub mod coulomb;
pub mod reaction_field;
pub mod soft_core;

pub use coulomb::Coulomb;
pub use reaction_field::CoulombReactionField;
pub use soft_core::CoulombSoftCore;

use crate::core::models::{Boundary, ParticleProps};
use crate::core::units::{Energy, EnergyUnit, Force, ForceUnit};
use nalgebra::{Point3, Vector3};

/// Coulomb's constant in kJ·mol⁻¹·nm·e⁻².
pub const COULOMB_CONST: f64 = 138.935_457_64;

/// The per-pair calling contract shared by every non-bonded model.
///
/// `dr` is the minimum-image displacement from particle `i` to particle `j`,
/// already boundary-corrected by the caller. `coord_i`, `coord_j`, and
/// `boundary` are part of the contract for uniformity with interaction
/// families that need them; the Coulomb models ignore them. All three models
/// are defined only for strictly positive separation; a zero-distance pair
/// is a caller contract violation, not guarded here.
///
/// `special` marks pairs subject to modified weighting (typically 1-4
/// bonded exclusions): the result is scaled by the configured
/// `weight_special` factor, and the reaction-field model additionally drops
/// its continuum correction terms for such pairs.
pub trait PairwiseInteraction {
    /// Force exerted on particle `j` by particle `i`.
    #[allow(clippy::too_many_arguments)]
    fn force(
        &self,
        dr: Vector3<f64>,
        coord_i: &Point3<f64>,
        coord_j: &Point3<f64>,
        props_i: &ParticleProps,
        props_j: &ParticleProps,
        boundary: &Boundary,
        special: bool,
    ) -> Force;

    /// Potential energy of the pair.
    #[allow(clippy::too_many_arguments)]
    fn potential_energy(
        &self,
        dr: Vector3<f64>,
        coord_i: &Point3<f64>,
        coord_j: &Point3<f64>,
        props_i: &ParticleProps,
        props_j: &ParticleProps,
        boundary: &Boundary,
        special: bool,
    ) -> Energy;

    /// Whether the driver should feed this interaction from a neighbor list.
    fn use_neighbors(&self) -> bool;

    /// Unit tag carried by returned energies.
    fn energy_unit(&self) -> EnergyUnit;

    /// Unit tag carried by returned forces.
    fn force_unit(&self) -> ForceUnit;

    /// The additive identity for this parameter set: neighbor usage disabled,
    /// combinable numeric fields zeroed, cutoff and unit tags carried through.
    fn zero_like(&self) -> Self
    where
        Self: Sized;

    /// Pairwise sum of two same-model parameter sets: combinable numeric
    /// fields are summed, non-combinable configuration is taken from `self`.
    /// Callers must only combine sets sharing cutoff and unit configuration.
    fn combine(&self, other: &Self) -> Self
    where
        Self: Sized;
}

/// Model-erased interaction parameter set, for drivers configured at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Interaction {
    Coulomb(Coulomb),
    SoftCore(CoulombSoftCore),
    ReactionField(CoulombReactionField),
}

impl PairwiseInteraction for Interaction {
    fn force(
        &self,
        dr: Vector3<f64>,
        coord_i: &Point3<f64>,
        coord_j: &Point3<f64>,
        props_i: &ParticleProps,
        props_j: &ParticleProps,
        boundary: &Boundary,
        special: bool,
    ) -> Force {
        match self {
            Interaction::Coulomb(inner) => {
                inner.force(dr, coord_i, coord_j, props_i, props_j, boundary, special)
            }
            Interaction::SoftCore(inner) => {
                inner.force(dr, coord_i, coord_j, props_i, props_j, boundary, special)
            }
            Interaction::ReactionField(inner) => {
                inner.force(dr, coord_i, coord_j, props_i, props_j, boundary, special)
            }
        }
    }

    fn potential_energy(
        &self,
        dr: Vector3<f64>,
        coord_i: &Point3<f64>,
        coord_j: &Point3<f64>,
        props_i: &ParticleProps,
        props_j: &ParticleProps,
        boundary: &Boundary,
        special: bool,
    ) -> Energy {
        match self {
            Interaction::Coulomb(inner) => {
                inner.potential_energy(dr, coord_i, coord_j, props_i, props_j, boundary, special)
            }
            Interaction::SoftCore(inner) => {
                inner.potential_energy(dr, coord_i, coord_j, props_i, props_j, boundary, special)
            }
            Interaction::ReactionField(inner) => {
                inner.potential_energy(dr, coord_i, coord_j, props_i, props_j, boundary, special)
            }
        }
    }

    fn use_neighbors(&self) -> bool {
        match self {
            Interaction::Coulomb(inner) => inner.use_neighbors(),
            Interaction::SoftCore(inner) => inner.use_neighbors(),
            Interaction::ReactionField(inner) => inner.use_neighbors(),
        }
    }

    fn energy_unit(&self) -> EnergyUnit {
        match self {
            Interaction::Coulomb(inner) => inner.energy_unit(),
            Interaction::SoftCore(inner) => inner.energy_unit(),
            Interaction::ReactionField(inner) => inner.energy_unit(),
        }
    }

    fn force_unit(&self) -> ForceUnit {
        match self {
            Interaction::Coulomb(inner) => inner.force_unit(),
            Interaction::SoftCore(inner) => inner.force_unit(),
            Interaction::ReactionField(inner) => inner.force_unit(),
        }
    }

    fn zero_like(&self) -> Self {
        match self {
            Interaction::Coulomb(inner) => Interaction::Coulomb(inner.zero_like()),
            Interaction::SoftCore(inner) => Interaction::SoftCore(inner.zero_like()),
            Interaction::ReactionField(inner) => Interaction::ReactionField(inner.zero_like()),
        }
    }

    fn combine(&self, other: &Self) -> Self {
        match (self, other) {
            (Interaction::Coulomb(a), Interaction::Coulomb(b)) => {
                Interaction::Coulomb(a.combine(b))
            }
            (Interaction::SoftCore(a), Interaction::SoftCore(b)) => {
                Interaction::SoftCore(a.combine(b))
            }
            (Interaction::ReactionField(a), Interaction::ReactionField(b)) => {
                Interaction::ReactionField(a.combine(b))
            }
            // Mixed-model combination is a caller contract violation; the
            // result is implementation-defined.
            _ => {
                debug_assert!(false, "combined interactions must share a model");
                self.clone()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn enum_dispatch_matches_direct_kernel_call() {
        let coulomb = Coulomb::default();
        let erased = Interaction::Coulomb(coulomb.clone());

        let dr = Vector3::new(0.3, 0.1, -0.2);
        let ri = Point3::origin();
        let rj = Point3::new(0.3, 0.1, -0.2);
        let pi = ParticleProps::new(1.0, 0.0);
        let pj = ParticleProps::new(-1.0, 0.0);
        let boundary = Boundary::Open;

        let direct = coulomb.potential_energy(dr, &ri, &rj, &pi, &pj, &boundary, false);
        let erased_pe = erased.potential_energy(dr, &ri, &rj, &pi, &pj, &boundary, false);
        assert!(f64_approx_equal(direct.value, erased_pe.value));
        assert_eq!(direct.unit, erased_pe.unit);

        let direct_f = coulomb.force(dr, &ri, &rj, &pi, &pj, &boundary, false);
        let erased_f = erased.force(dr, &ri, &rj, &pi, &pj, &boundary, false);
        assert!(f64_approx_equal(
            (direct_f.vector - erased_f.vector).norm(),
            0.0
        ));
    }

    #[test]
    fn enum_zero_like_preserves_model() {
        let rf = Interaction::ReactionField(CoulombReactionField::default());
        assert!(matches!(rf.zero_like(), Interaction::ReactionField(_)));
    }

    #[test]
    fn enum_combine_of_matching_models_sums_weights() {
        let a = Interaction::Coulomb(Coulomb {
            weight_special: 0.5,
            ..Coulomb::default()
        });
        let b = Interaction::Coulomb(Coulomb {
            weight_special: 0.25,
            ..Coulomb::default()
        });
        let combined = a.combine(&b);
        match combined {
            Interaction::Coulomb(inner) => assert!(f64_approx_equal(inner.weight_special, 0.75)),
            _ => panic!("combine changed the model"),
        }
    }
}
