use super::{COULOMB_CONST, PairwiseInteraction};
use crate::core::cutoffs::Cutoff;
use crate::core::models::{Boundary, ParticleProps};
use crate::core::units::{Energy, EnergyUnit, Force, ForceUnit};
use nalgebra::{Point3, Vector3};

/// Standard Coulomb electrostatics between two point charges.
///
/// Force and energy are first computed as pure functions of the squared
/// distance and then scaled by whatever tapering factor the cutoff policy
/// prescribes; the kernel is agnostic to the policy's internal shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Coulomb {
    pub cutoff: Cutoff,
    pub use_neighbors: bool,
    pub weight_special: f64,
    pub coulomb_const: f64,
    pub force_unit: ForceUnit,
    pub energy_unit: EnergyUnit,
}

impl Default for Coulomb {
    fn default() -> Self {
        Self {
            cutoff: Cutoff::None,
            use_neighbors: false,
            weight_special: 1.0,
            coulomb_const: COULOMB_CONST,
            force_unit: ForceUnit::default(),
            energy_unit: EnergyUnit::default(),
        }
    }
}

impl PairwiseInteraction for Coulomb {
    fn force(
        &self,
        dr: Vector3<f64>,
        _coord_i: &Point3<f64>,
        _coord_j: &Point3<f64>,
        props_i: &ParticleProps,
        props_j: &ParticleProps,
        _boundary: &Boundary,
        special: bool,
    ) -> Force {
        let r2 = dr.norm_squared();
        let ccq = self.coulomb_const * props_i.charge * props_j.charge;
        // Force divided by distance, so the displacement vector itself
        // carries the direction: F = (k·qᵢ·qⱼ / r³) · dr.
        let mut f_dr = ccq / (r2 * r2.sqrt()) * self.cutoff.force_scale(r2);
        if special {
            f_dr *= self.weight_special;
        }
        Force::new(dr * f_dr, self.force_unit)
    }

    fn potential_energy(
        &self,
        dr: Vector3<f64>,
        _coord_i: &Point3<f64>,
        _coord_j: &Point3<f64>,
        props_i: &ParticleProps,
        props_j: &ParticleProps,
        _boundary: &Boundary,
        special: bool,
    ) -> Energy {
        let r2 = dr.norm_squared();
        let ccq = self.coulomb_const * props_i.charge * props_j.charge;
        let mut pe = ccq / r2.sqrt() * self.cutoff.energy_scale(r2);
        if special {
            pe *= self.weight_special;
        }
        Energy::new(pe, self.energy_unit)
    }

    fn use_neighbors(&self) -> bool {
        self.use_neighbors
    }

    fn energy_unit(&self) -> EnergyUnit {
        self.energy_unit
    }

    fn force_unit(&self) -> ForceUnit {
        self.force_unit
    }

    fn zero_like(&self) -> Self {
        Self {
            cutoff: self.cutoff,
            use_neighbors: false,
            weight_special: 0.0,
            coulomb_const: 0.0,
            force_unit: self.force_unit,
            energy_unit: self.energy_unit,
        }
    }

    fn combine(&self, other: &Self) -> Self {
        Self {
            cutoff: self.cutoff,
            use_neighbors: self.use_neighbors,
            weight_special: self.weight_special + other.weight_special,
            coulomb_const: self.coulomb_const + other.coulomb_const,
            force_unit: self.force_unit,
            energy_unit: self.energy_unit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    fn test_pair() -> (ParticleProps, ParticleProps) {
        (ParticleProps::new(1.0, 0.0), ParticleProps::new(-1.0, 0.0))
    }

    fn eval_at(
        inter: &Coulomb,
        dr: Vector3<f64>,
        special: bool,
    ) -> (Force, Energy) {
        let (pi, pj) = test_pair();
        let ri = Point3::origin();
        let rj = Point3::from(dr);
        let boundary = Boundary::Open;
        (
            inter.force(dr, &ri, &rj, &pi, &pj, &boundary, special),
            inter.potential_energy(dr, &ri, &rj, &pi, &pj, &boundary, special),
        )
    }

    #[test]
    fn unit_charges_at_0_3_nm_give_reference_energy_and_force() {
        let inter = Coulomb::default();
        let (force, energy) = eval_at(&inter, Vector3::new(0.3, 0.0, 0.0), false);

        // 138.93545764 / 0.3 and 138.93545764 / 0.09^1.5, attractive.
        assert!((energy.value - (-463.118_192_133_333_3)).abs() < 1e-6);
        let f_dr = force.vector.x / 0.3;
        assert!((f_dr - (-5145.757_690_370_37)).abs() < 1e-5);
    }

    #[test]
    fn force_points_along_displacement_for_repulsive_pair() {
        let inter = Coulomb::default();
        let pi = ParticleProps::new(1.0, 0.0);
        let pj = ParticleProps::new(1.0, 0.0);
        let dr = Vector3::new(0.0, 0.5, 0.0);
        let force = inter.force(
            dr,
            &Point3::origin(),
            &Point3::from(dr),
            &pi,
            &pj,
            &Boundary::Open,
            false,
        );
        assert!(force.vector.y > 0.0);
        assert_eq!(force.vector.x, 0.0);
        assert_eq!(force.vector.z, 0.0);
    }

    #[test]
    fn doubling_special_weight_doubles_special_results_only() {
        let base = Coulomb {
            weight_special: 0.4,
            ..Coulomb::default()
        };
        let doubled = Coulomb {
            weight_special: 0.8,
            ..Coulomb::default()
        };
        let dr = Vector3::new(0.2, 0.1, 0.3);

        let (f1, e1) = eval_at(&base, dr, true);
        let (f2, e2) = eval_at(&doubled, dr, true);
        assert!(f64_approx_equal(e2.value, 2.0 * e1.value));
        assert!(f64_approx_equal((f2.vector - f1.vector * 2.0).norm(), 0.0));

        let (f1, e1) = eval_at(&base, dr, false);
        let (f2, e2) = eval_at(&doubled, dr, false);
        assert!(f64_approx_equal(e2.value, e1.value));
        assert!(f64_approx_equal((f2.vector - f1.vector).norm(), 0.0));
    }

    #[test]
    fn distance_cutoff_zeroes_results_beyond_threshold() {
        let inter = Coulomb {
            cutoff: Cutoff::Distance { dist_cutoff: 0.5 },
            ..Coulomb::default()
        };
        let (force, energy) = eval_at(&inter, Vector3::new(0.6, 0.0, 0.0), false);
        assert_eq!(energy.value, 0.0);
        assert_eq!(energy.unit, inter.energy_unit);
        assert_eq!(force.vector, Vector3::zeros());
        assert_eq!(force.unit, inter.force_unit);

        let (force, energy) = eval_at(&inter, Vector3::new(0.4, 0.0, 0.0), false);
        assert!(energy.value != 0.0);
        assert!(force.vector.norm() > 0.0);
    }

    #[test]
    fn force_is_negative_gradient_of_energy() {
        let inter = Coulomb::default();
        let (pi, pj) = test_pair();
        let boundary = Boundary::Open;
        let x = 0.37;
        let h = 1e-6;

        let energy_at = |x: f64| {
            let dr = Vector3::new(x, 0.0, 0.0);
            inter
                .potential_energy(dr, &Point3::origin(), &Point3::from(dr), &pi, &pj, &boundary, false)
                .value
        };
        let numeric = -(energy_at(x + h) - energy_at(x - h)) / (2.0 * h);

        let dr = Vector3::new(x, 0.0, 0.0);
        let analytic = inter
            .force(dr, &Point3::origin(), &Point3::from(dr), &pi, &pj, &boundary, false)
            .vector
            .x;
        assert!((numeric - analytic).abs() / analytic.abs() < 1e-6);
    }

    #[test]
    fn adding_zero_element_is_identity() {
        let inter = Coulomb {
            cutoff: Cutoff::Distance { dist_cutoff: 1.5 },
            use_neighbors: true,
            weight_special: 0.5,
            ..Coulomb::default()
        };
        let combined = inter.combine(&inter.zero_like());
        assert_eq!(combined, inter);

        let dr = Vector3::new(0.3, 0.2, -0.1);
        let (f1, e1) = eval_at(&inter, dr, true);
        let (f2, e2) = eval_at(&combined, dr, true);
        assert_eq!(e1, e2);
        assert_eq!(f1, f2);
    }

    #[test]
    fn zero_element_disables_neighbors_and_zeroes_numeric_fields() {
        let inter = Coulomb {
            use_neighbors: true,
            energy_unit: EnergyUnit::KilocaloriePerMole,
            ..Coulomb::default()
        };
        let zero = inter.zero_like();
        assert!(!zero.use_neighbors);
        assert_eq!(zero.weight_special, 0.0);
        assert_eq!(zero.coulomb_const, 0.0);
        assert_eq!(zero.energy_unit, EnergyUnit::KilocaloriePerMole);
        assert_eq!(zero.cutoff, inter.cutoff);
    }
}
