//! K-mer seed index. References are indexed first; the index is frozen on the first query (or by
//! an explicit [`Mapper::freeze`]) and is read-only afterwards, so queries can run concurrently.

use std::ops::Range;
use std::sync::{Mutex, OnceLock};

use ahash::{AHashMap, RandomState};
use eyre::{bail, ensure, Result};
use itertools::Itertools;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use seqalign_core_rs::{Alphabet, Sequence};

pub use cluster::Accumulator;
pub use hit::{MappingHit, MappingResult, SeedRecord};
pub use kmer::KmerRecord;
use kmer::KmerCoder;

use crate::params::MapperParams;
use crate::threshold;

mod cluster;
mod hit;
mod kmer;
mod seeds;

type Buckets = AHashMap<u64, Vec<KmerRecord>>;
type Index = AHashMap<u64, Box<[KmerRecord]>>;

pub struct Mapper {
    params: MapperParams,
    alphabet: Alphabet,
    coder: KmerCoder,
    references: usize,
    staging: Mutex<Buckets>,
    index: OnceLock<Index>,
}

impl Mapper {
    pub fn new(alphabet: Alphabet, params: MapperParams) -> Result<Self> {
        params.validate()?;
        let coder = KmerCoder::new(alphabet, params.k)?;
        Ok(Self {
            params,
            alphabet,
            coder,
            references: 0,
            staging: Mutex::new(Buckets::new()),
            index: OnceLock::new(),
        })
    }

    pub fn params(&self) -> &MapperParams {
        &self.params
    }

    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// Number of indexed references.
    pub fn references(&self) -> usize {
        self.references
    }

    pub fn is_frozen(&self) -> bool {
        self.index.get().is_some()
    }

    /// Indexes the whole sequence and returns its id. Ids are assigned sequentially from zero.
    pub fn add_reference(&mut self, sequence: &Sequence) -> Result<usize> {
        self.add_reference_range(sequence, 0..sequence.len())
    }

    /// Indexes a window of the sequence. Positions stay in the whole sequence coordinates.
    pub fn add_reference_range(&mut self, sequence: &Sequence, range: Range<usize>) -> Result<usize> {
        if self.is_frozen() {
            bail!("References can't be added after the index was frozen by a query");
        }
        ensure!(
            sequence.alphabet() == self.alphabet,
            "Reference alphabet ({}) doesn't match the index alphabet ({})",
            sequence.alphabet(),
            self.alphabet
        );
        let codes = sequence.window(&range)?;
        let id = self.references;
        // Validate the capacity upfront, even for references without k-mers
        KmerRecord::new(id, range.end)?;

        let staging = self.staging.get_mut().unwrap_or_else(|err| err.into_inner());
        let mut indexed = 0;
        for (pos, kmer) in self.coder.kmers(codes) {
            if self.coder.is_homopolymer(kmer) {
                continue;
            }
            staging
                .entry(kmer)
                .or_default()
                .push(KmerRecord::new(id, range.start + pos)?);
            indexed += 1;
        }
        if indexed == 0 {
            log::warn!(
                "Reference {} (window {:?}) contributed no k-mers to the index",
                id,
                range
            );
        }

        self.references += 1;
        Ok(id)
    }

    /// Compacts the staged k-mers into the read-only index. Queries freeze the index implicitly.
    pub fn freeze(&self) {
        self.frozen();
    }

    fn frozen(&self) -> &Index {
        self.index.get_or_init(|| {
            let mut staging = self.staging.lock().unwrap_or_else(|err| err.into_inner());
            let index: Index = std::mem::take(&mut *staging)
                .into_iter()
                .map(|(kmer, records)| (kmer, records.into_boxed_slice()))
                .collect();
            log::debug!(
                "Frozen the k-mer index: {} references, {} distinct k-mers",
                self.references,
                index.len()
            );
            index
        })
    }

    /// Maps the query window with seeds sampled by a generator seeded from the window content, i.e.
    /// the same window is always mapped the same way.
    pub fn map(&self, query: &Sequence, range: Range<usize>) -> Result<MappingResult> {
        let mut rng = seeded_rng(query, &range)?;
        self.map_with(query, range, &mut rng, &mut Accumulator::new(&self.params))
    }

    pub fn map_with_rng(
        &self,
        query: &Sequence,
        range: Range<usize>,
        rng: &mut impl Rng,
    ) -> Result<MappingResult> {
        self.map_with(query, range, rng, &mut Accumulator::new(&self.params))
    }

    /// Maps the query window reusing the caller's accumulator.
    pub fn map_with(
        &self,
        query: &Sequence,
        range: Range<usize>,
        rng: &mut impl Rng,
        accumulator: &mut Accumulator,
    ) -> Result<MappingResult> {
        ensure!(
            query.alphabet() == self.alphabet,
            "Query alphabet ({}) doesn't match the index alphabet ({})",
            query.alphabet(),
            self.alphabet
        );
        let codes = query.window(&range)?;
        let index = self.frozen();

        let k = self.coder.k();
        let seeds = seeds::sample(
            range.clone(),
            k,
            (self.params.min_distance, self.params.max_distance),
            rng,
        );

        // Reference -> records ordered by the seed index
        let mut candidates: AHashMap<usize, Vec<SeedRecord>> = AHashMap::new();
        for (ind, position) in seeds.iter().enumerate() {
            let local = position - range.start;
            let kmer = self.coder.encode(&codes[local..local + k]);
            let Some(records) = index.get(&kmer) else {
                continue;
            };
            for record in records.iter() {
                candidates
                    .entry(record.reference())
                    .or_default()
                    .push(SeedRecord::new(
                        record.position() as i64 - *position as i64,
                        ind,
                    ));
            }
        }

        let min_records = self.params.min_records();
        let candidates_count = candidates.len();
        let mut hits: Vec<MappingHit> = candidates
            .into_iter()
            .sorted_unstable_by_key(|(reference, _)| *reference)
            .filter(|(_, records)| records.len() >= min_records)
            .filter_map(|(reference, records)| accumulator.cluster(reference, &records))
            .collect();

        if let Some(top) = hits.iter().map(|x| *x.score()).max() {
            hits.retain(|x| {
                threshold::passes(
                    *x.score(),
                    self.params.absolute_min_score,
                    self.params.relative_min_score,
                    top,
                )
            });
        }
        hits.sort_by_key(|x| std::cmp::Reverse(*x.score()));

        log::debug!(
            "Mapped window {:?}: {} seeds, {} candidate references, {} hits",
            range,
            seeds.len(),
            candidates_count,
            hits.len()
        );
        Ok(MappingResult::new(seeds, hits))
    }
}

/// Generator seeded by a fixed-key hash of the query window.
pub(crate) fn seeded_rng(query: &Sequence, range: &Range<usize>) -> Result<StdRng> {
    let state = RandomState::with_seeds(
        0x243f_6a88_85a3_08d3,
        0x1319_8a2e_0370_7344,
        0xa409_3822_299f_31d0,
        0x082e_fa98_ec4e_6c89,
    );
    let seed = state.hash_one((query.window(range)?, range.start));
    Ok(StdRng::seed_from_u64(seed))
}
