use super::{COULOMB_CONST, PairwiseInteraction};
use crate::core::cutoffs::Cutoff;
use crate::core::models::{Boundary, ParticleProps};
use crate::core::units::{Energy, EnergyUnit, Force, ForceUnit};
use nalgebra::{Point3, Vector3};

/// Soft-core Coulomb electrostatics for alchemical free-energy perturbation.
///
/// The singular `1/r` divergence is replaced by a softened denominator
/// `r_sc⁶ = r⁶ + α·λᵖ·σ⁶`, which stays finite at small separations whenever
/// `α·λᵖ > 0`. With `λ = 0` (or `α = 0`) the model reduces exactly to plain
/// Coulomb. The pair `σ` is formed from the per-particle values by either
/// Lorentz (arithmetic-mean) or geometric mixing.
///
/// Fields are private: `sigma6_factor` caches `α·λᵖ` and must never drift
/// from its source fields, so changing `α`, `λ`, or `p` means building a new
/// parameter set through [`CoulombSoftCoreBuilder`].
#[derive(Debug, Clone, PartialEq)]
pub struct CoulombSoftCore {
    cutoff: Cutoff,
    use_neighbors: bool,
    alpha: f64,
    lambda: f64,
    p: i32,
    sigma6_factor: f64,
    lorentz_mixing: bool,
    weight_special: f64,
    coulomb_const: f64,
    force_unit: ForceUnit,
    energy_unit: EnergyUnit,
}

impl Default for CoulombSoftCore {
    fn default() -> Self {
        CoulombSoftCoreBuilder::new().build()
    }
}

impl CoulombSoftCore {
    pub fn builder() -> CoulombSoftCoreBuilder {
        CoulombSoftCoreBuilder::new()
    }

    pub fn cutoff(&self) -> Cutoff {
        self.cutoff
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    pub fn p(&self) -> i32 {
        self.p
    }

    /// The cached `α·λᵖ` prefactor applied to `σ⁶` in the softened denominator.
    pub fn sigma6_factor(&self) -> f64 {
        self.sigma6_factor
    }

    pub fn lorentz_mixing(&self) -> bool {
        self.lorentz_mixing
    }

    pub fn weight_special(&self) -> f64 {
        self.weight_special
    }

    pub fn coulomb_const(&self) -> f64 {
        self.coulomb_const
    }

    fn mixed_sigma(&self, props_i: &ParticleProps, props_j: &ParticleProps) -> f64 {
        if self.lorentz_mixing {
            0.5 * (props_i.sigma + props_j.sigma)
        } else {
            (props_i.sigma * props_j.sigma).sqrt()
        }
    }
}

impl PairwiseInteraction for CoulombSoftCore {
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
        let sigma = self.mixed_sigma(props_i, props_j);
        let rsc6 = r2.powi(3) + self.sigma6_factor * sigma.powi(6);
        let ccq = self.coulomb_const * props_i.charge * props_j.charge;
        // Analytic gradient of the energy below, divided by distance:
        // E = k·(r⁶ + a·σ⁶)^(-1/6) gives F/r = k·r⁴·(r⁶ + a·σ⁶)^(-7/6).
        let mut f_dr = ccq * r2 * r2 * rsc6.powf(-7.0 / 6.0) * self.cutoff.force_scale(r2);
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
        let sigma = self.mixed_sigma(props_i, props_j);
        let rsc6 = r2.powi(3) + self.sigma6_factor * sigma.powi(6);
        let ccq = self.coulomb_const * props_i.charge * props_j.charge;
        let mut pe = ccq * rsc6.powf(-1.0 / 6.0) * self.cutoff.energy_scale(r2);
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
            alpha: 0.0,
            lambda: 0.0,
            p: self.p,
            sigma6_factor: 0.0,
            lorentz_mixing: self.lorentz_mixing,
            weight_special: 0.0,
            coulomb_const: 0.0,
            force_unit: self.force_unit,
            energy_unit: self.energy_unit,
        }
    }

    fn combine(&self, other: &Self) -> Self {
        let alpha = self.alpha + other.alpha;
        let lambda = self.lambda + other.lambda;
        Self {
            cutoff: self.cutoff,
            use_neighbors: self.use_neighbors,
            alpha,
            lambda,
            p: self.p,
            // The cache is derived state; recompute it from the summed sources.
            sigma6_factor: alpha * lambda.powi(self.p),
            lorentz_mixing: self.lorentz_mixing,
            weight_special: self.weight_special + other.weight_special,
            coulomb_const: self.coulomb_const + other.coulomb_const,
            force_unit: self.force_unit,
            energy_unit: self.energy_unit,
        }
    }
}

/// Builder for [`CoulombSoftCore`]; every field has the documented default,
/// so `build` is infallible.
#[derive(Debug, Clone)]
pub struct CoulombSoftCoreBuilder {
    cutoff: Cutoff,
    use_neighbors: bool,
    alpha: f64,
    lambda: f64,
    p: i32,
    lorentz_mixing: bool,
    weight_special: f64,
    coulomb_const: f64,
    force_unit: ForceUnit,
    energy_unit: EnergyUnit,
}

impl Default for CoulombSoftCoreBuilder {
    fn default() -> Self {
        Self {
            cutoff: Cutoff::None,
            use_neighbors: false,
            alpha: 1.0,
            lambda: 0.0,
            p: 2,
            lorentz_mixing: true,
            weight_special: 1.0,
            coulomb_const: COULOMB_CONST,
            force_unit: ForceUnit::default(),
            energy_unit: EnergyUnit::default(),
        }
    }
}

impl CoulombSoftCoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cutoff(mut self, cutoff: Cutoff) -> Self {
        self.cutoff = cutoff;
        self
    }

    pub fn use_neighbors(mut self, use_neighbors: bool) -> Self {
        self.use_neighbors = use_neighbors;
        self
    }

    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn lambda(mut self, lambda: f64) -> Self {
        self.lambda = lambda;
        self
    }

    pub fn p(mut self, p: i32) -> Self {
        self.p = p;
        self
    }

    pub fn lorentz_mixing(mut self, lorentz_mixing: bool) -> Self {
        self.lorentz_mixing = lorentz_mixing;
        self
    }

    pub fn weight_special(mut self, weight_special: f64) -> Self {
        self.weight_special = weight_special;
        self
    }

    pub fn coulomb_const(mut self, coulomb_const: f64) -> Self {
        self.coulomb_const = coulomb_const;
        self
    }

    pub fn force_unit(mut self, force_unit: ForceUnit) -> Self {
        self.force_unit = force_unit;
        self
    }

    pub fn energy_unit(mut self, energy_unit: EnergyUnit) -> Self {
        self.energy_unit = energy_unit;
        self
    }

    pub fn build(self) -> CoulombSoftCore {
        CoulombSoftCore {
            cutoff: self.cutoff,
            use_neighbors: self.use_neighbors,
            alpha: self.alpha,
            lambda: self.lambda,
            p: self.p,
            sigma6_factor: self.alpha * self.lambda.powi(self.p),
            lorentz_mixing: self.lorentz_mixing,
            weight_special: self.weight_special,
            coulomb_const: self.coulomb_const,
            force_unit: self.force_unit,
            energy_unit: self.energy_unit,
        }
    }
}
