//! Data models shared by the interaction kernels and the engine layer.

pub mod boundary;
pub mod particle;

pub use boundary::Boundary;
pub use particle::ParticleProps;
