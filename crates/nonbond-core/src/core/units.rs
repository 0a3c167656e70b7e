use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg};

/// Unit tag for potential energy values.
///
/// Carried alongside every energy the kernels return so that downstream
/// accumulation stays dimensionally consistent: an exact zero produced by a
/// cutoff is still a zero *in a particular unit*, never a bare number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EnergyUnit {
    /// Kilojoules per mole, the default for the kJ·mol⁻¹·nm·e⁻² Coulomb constant.
    #[default]
    KilojoulePerMole,
    /// Kilocalories per mole.
    KilocaloriePerMole,
}

impl fmt::Display for EnergyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnergyUnit::KilojoulePerMole => write!(f, "kJ/mol"),
            EnergyUnit::KilocaloriePerMole => write!(f, "kcal/mol"),
        }
    }
}

/// Unit tag for force vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ForceUnit {
    /// Kilojoules per mole per nanometer.
    #[default]
    KilojoulePerMoleNm,
    /// Kilocalories per mole per Angstrom.
    KilocaloriePerMoleAngstrom,
}

impl fmt::Display for ForceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForceUnit::KilojoulePerMoleNm => write!(f, "kJ/(mol·nm)"),
            ForceUnit::KilocaloriePerMoleAngstrom => write!(f, "kcal/(mol·Å)"),
        }
    }
}

/// A scalar potential energy tagged with its unit.
///
/// Addition requires both operands to share a unit; this is debug-asserted
/// rather than runtime-checked, since a simulation only ever accumulates
/// energies produced under a single parameter set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Energy {
    pub value: f64,
    pub unit: EnergyUnit,
}

impl Energy {
    pub fn new(value: f64, unit: EnergyUnit) -> Self {
        Self { value, unit }
    }

    /// The additive identity in the given unit.
    pub fn zero(unit: EnergyUnit) -> Self {
        Self { value: 0.0, unit }
    }
}

impl Add for Energy {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        debug_assert_eq!(self.unit, rhs.unit);
        Self {
            value: self.value + rhs.value,
            unit: self.unit,
        }
    }
}

impl AddAssign for Energy {
    fn add_assign(&mut self, rhs: Self) {
        debug_assert_eq!(self.unit, rhs.unit);
        self.value += rhs.value;
    }
}

impl Neg for Energy {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            value: -self.value,
            unit: self.unit,
        }
    }
}

/// A force vector tagged with its unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Force {
    pub vector: Vector3<f64>,
    pub unit: ForceUnit,
}

impl Force {
    pub fn new(vector: Vector3<f64>, unit: ForceUnit) -> Self {
        Self { vector, unit }
    }

    /// The zero vector in the given unit.
    pub fn zero(unit: ForceUnit) -> Self {
        Self {
            vector: Vector3::zeros(),
            unit,
        }
    }

    /// Euclidean norm of the force vector.
    pub fn norm(&self) -> f64 {
        self.vector.norm()
    }
}

impl Add for Force {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        debug_assert_eq!(self.unit, rhs.unit);
        Self {
            vector: self.vector + rhs.vector,
            unit: self.unit,
        }
    }
}

impl AddAssign for Force {
    fn add_assign(&mut self, rhs: Self) {
        debug_assert_eq!(self.unit, rhs.unit);
        self.vector += rhs.vector;
    }
}

impl Neg for Force {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            vector: -self.vector,
            unit: self.unit,
        }
    }
}
