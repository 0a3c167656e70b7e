use itertools::Itertools;

/// One candidate pair handed to a kernel: particle indices plus the
/// special-pair flag (typically a 1-4 bonded exclusion).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeighborPair {
    pub i: usize,
    pub j: usize,
    pub special: bool,
}

impl NeighborPair {
    pub fn new(i: usize, j: usize, special: bool) -> Self {
        Self { i, j, special }
    }
}

/// The set of candidate pairs for one evaluation pass.
///
/// Construction of a real neighbor list (cell lists, Verlet lists) belongs
/// to the surrounding simulation; this type only carries the result. The
/// `all_pairs` constructor exists for small systems and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NeighborList {
    pub pairs: Vec<NeighborPair>,
}

impl NeighborList {
    pub fn new(pairs: Vec<NeighborPair>) -> Self {
        Self { pairs }
    }

    /// Every unordered pair among `n` particles, none marked special.
    pub fn all_pairs(n: usize) -> Self {
        let pairs = (0..n)
            .tuple_combinations()
            .map(|(i, j)| NeighborPair::new(i, j, false))
            .collect();
        Self { pairs }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
