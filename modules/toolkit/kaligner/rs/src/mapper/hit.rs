use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;

/// Occurrence of a query seed in a reference: the diagonal offset (reference position minus
/// query position) and the index of the seed in the query.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Constructor)]
pub struct SeedRecord {
    pub offset: i64,
    pub seed: usize,
}

/// Reference region supported by one or more islands of seed records.
#[derive(Clone, PartialEq, Eq, Debug, Getters, Dissolve, Constructor)]
pub struct MappingHit {
    reference: usize,
    /// Representative records of all islands ordered by the seed index.
    records: Vec<SeedRecord>,
    /// Positions in `records` where the second, third, etc. island starts.
    boundaries: Vec<usize>,
    score: i32,
}

impl MappingHit {
    /// Records of each island.
    pub fn islands(&self) -> impl Iterator<Item = &[SeedRecord]> {
        let starts = std::iter::once(0).chain(self.boundaries.iter().copied());
        let ends = self
            .boundaries
            .iter()
            .copied()
            .chain(std::iter::once(self.records.len()));
        starts.zip(ends).map(|(start, end)| &self.records[start..end])
    }
}

/// Seeds sampled from the query window and the reference hits sorted by score.
#[derive(Clone, PartialEq, Eq, Debug, Default, Getters, Dissolve, Constructor)]
pub struct MappingResult {
    /// Query positions of the seeds.
    seeds: Vec<usize>,
    hits: Vec<MappingHit>,
}

impl MappingResult {
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}
