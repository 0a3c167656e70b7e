use serde::{Deserialize, Serialize};

/// Distance-based tapering policy consumed by the plain and soft-core kernels.
///
/// The policy exposes exactly two pure operations: a dimensionless multiplier
/// for the force and one for the energy, both evaluated at the squared
/// pair distance. The set of shapes is closed, so a sum type is used rather
/// than trait dispatch.
///
/// The reaction-field model does not use this policy; its cutoff distance is
/// part of the correction formula itself and is handled inside that kernel.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "kebab-case")]
pub enum Cutoff {
    /// Full interaction at every distance; both scales are 1.
    #[default]
    None,
    /// Hard truncation: both scales drop to 0 beyond `dist_cutoff`.
    Distance { dist_cutoff: f64 },
}

impl Cutoff {
    /// Multiplier applied to the unscaled force at squared distance `r2`.
    #[inline]
    pub fn force_scale(&self, r2: f64) -> f64 {
        match self {
            Cutoff::None => 1.0,
            Cutoff::Distance { dist_cutoff } => {
                if r2 > dist_cutoff * dist_cutoff {
                    0.0
                } else {
                    1.0
                }
            }
        }
    }

    /// Multiplier applied to the unscaled potential energy at squared distance `r2`.
    #[inline]
    pub fn energy_scale(&self, r2: f64) -> f64 {
        match self {
            Cutoff::None => 1.0,
            Cutoff::Distance { dist_cutoff } => {
                if r2 > dist_cutoff * dist_cutoff {
                    0.0
                } else {
                    1.0
                }
            }
        }
    }
}
