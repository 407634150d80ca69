use seqalign_alignment_rs::pairwise::MatrixCache;

use crate::mapper::Accumulator;
use crate::params::MapperParams;

/// Scratch state of a single alignment thread: the DP matrices and the island accumulator.
/// Reusing a worker between queries avoids repeated allocations.
#[derive(Clone, Debug)]
pub struct Worker {
    pub(crate) cache: MatrixCache,
    pub(crate) accumulator: Accumulator,
}

impl Worker {
    pub fn new(params: &MapperParams) -> Self {
        Self {
            cache: MatrixCache::new(),
            accumulator: Accumulator::new(params),
        }
    }

    /// Number of matrix cells currently allocated by the worker.
    pub fn footprint(&self) -> usize {
        self.cache.footprint()
    }
}
