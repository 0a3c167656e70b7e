use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Coordinate and property slices differ in length: {coords} vs {props}")]
    MismatchedLengths { coords: usize, props: usize },

    #[error("Neighbor pair ({i}, {j}) is out of bounds for {particles} particles")]
    PairOutOfBounds { i: usize, j: usize, particles: usize },

    #[error("Interaction is configured to use neighbors but no neighbor list was supplied")]
    MissingNeighborList,
}
