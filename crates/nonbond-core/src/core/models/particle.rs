use serde::{Deserialize, Serialize};

/// Read-only per-particle physical properties consumed by the kernels.
///
/// This is a view type: it is owned by the simulation state, handed to the
/// kernels by reference, and never mutated by them. Only the fields the
/// Coulomb family actually reads are carried here.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ParticleProps {
    /// Signed partial charge, in elementary charge units.
    pub charge: f64,
    /// Length-scale parameter, read only by the soft-core model.
    pub sigma: f64,
}

impl ParticleProps {
    pub fn new(charge: f64, sigma: f64) -> Self {
        Self { charge, sigma }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_stores_charge_and_sigma() {
        let props = ParticleProps::new(-0.8, 0.32);
        assert_eq!(props.charge, -0.8);
        assert_eq!(props.sigma, 0.32);
    }

    #[test]
    fn default_is_uncharged_with_zero_sigma() {
        let props = ParticleProps::default();
        assert_eq!(props.charge, 0.0);
        assert_eq!(props.sigma, 0.0);
    }
}
