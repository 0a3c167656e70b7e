use crate::core::cutoffs::Cutoff;
use crate::core::interactions::{
    COULOMB_CONST, Coulomb, CoulombReactionField, CoulombSoftCore, Interaction,
    reaction_field::DEFAULT_SOLVENT_DIELECTRIC,
};
use crate::core::units::{EnergyUnit, ForceUnit};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParamLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

fn default_weight_special() -> f64 {
    1.0
}

fn default_coulomb_const() -> f64 {
    COULOMB_CONST
}

fn default_alpha() -> f64 {
    1.0
}

fn default_p() -> i32 {
    2
}

fn default_true() -> bool {
    true
}

fn default_solvent_dielectric() -> f64 {
    DEFAULT_SOLVENT_DIELECTRIC
}

/// Construction-time configuration for one interaction model, as read from a
/// TOML document tagged by `model`. Unset options take the documented
/// defaults; `into_interaction` performs the actual parameter-set
/// construction (including the cached soft-core `sigma6_factor`).
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(tag = "model", rename_all = "kebab-case")]
pub enum InteractionParams {
    Coulomb {
        #[serde(default)]
        cutoff: Cutoff,
        #[serde(default)]
        use_neighbors: bool,
        #[serde(default = "default_weight_special")]
        weight_special: f64,
        #[serde(default = "default_coulomb_const")]
        coulomb_const: f64,
        #[serde(default)]
        force_unit: ForceUnit,
        #[serde(default)]
        energy_unit: EnergyUnit,
    },
    SoftCoreCoulomb {
        #[serde(default)]
        cutoff: Cutoff,
        #[serde(default)]
        use_neighbors: bool,
        #[serde(default = "default_alpha")]
        alpha: f64,
        #[serde(default)]
        lambda: f64,
        #[serde(default = "default_p")]
        p: i32,
        #[serde(default = "default_true")]
        lorentz_mixing: bool,
        #[serde(default = "default_weight_special")]
        weight_special: f64,
        #[serde(default = "default_coulomb_const")]
        coulomb_const: f64,
        #[serde(default)]
        force_unit: ForceUnit,
        #[serde(default)]
        energy_unit: EnergyUnit,
    },
    ReactionFieldCoulomb {
        dist_cutoff: f64,
        #[serde(default = "default_solvent_dielectric")]
        solvent_dielectric: f64,
        #[serde(default)]
        use_neighbors: bool,
        #[serde(default = "default_weight_special")]
        weight_special: f64,
        #[serde(default = "default_coulomb_const")]
        coulomb_const: f64,
        #[serde(default)]
        force_unit: ForceUnit,
        #[serde(default)]
        energy_unit: EnergyUnit,
    },
}

impl InteractionParams {
    pub fn load(path: &Path) -> Result<Self, ParamLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| ParamLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ParamLoadError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
    }

    pub fn into_interaction(self) -> Interaction {
        match self {
            InteractionParams::Coulomb {
                cutoff,
                use_neighbors,
                weight_special,
                coulomb_const,
                force_unit,
                energy_unit,
            } => Interaction::Coulomb(Coulomb {
                cutoff,
                use_neighbors,
                weight_special,
                coulomb_const,
                force_unit,
                energy_unit,
            }),
            InteractionParams::SoftCoreCoulomb {
                cutoff,
                use_neighbors,
                alpha,
                lambda,
                p,
                lorentz_mixing,
                weight_special,
                coulomb_const,
                force_unit,
                energy_unit,
            } => Interaction::SoftCore(
                CoulombSoftCore::builder()
                    .cutoff(cutoff)
                    .use_neighbors(use_neighbors)
                    .alpha(alpha)
                    .lambda(lambda)
                    .p(p)
                    .lorentz_mixing(lorentz_mixing)
                    .weight_special(weight_special)
                    .coulomb_const(coulomb_const)
                    .force_unit(force_unit)
                    .energy_unit(energy_unit)
                    .build(),
            ),
            InteractionParams::ReactionFieldCoulomb {
                dist_cutoff,
                solvent_dielectric,
                use_neighbors,
                weight_special,
                coulomb_const,
                force_unit,
                energy_unit,
            } => Interaction::ReactionField(CoulombReactionField {
                dist_cutoff,
                solvent_dielectric,
                use_neighbors,
                weight_special,
                coulomb_const,
                force_unit,
                energy_unit,
            }),
        }
    }
}
