use std::cell::RefCell;
use std::ops::Range;
use std::sync::atomic::{AtomicBool, Ordering};

use derive_more::Constructor;
use eyre::{eyre, Result};
use rayon::ThreadPool;
use thread_local::ThreadLocal;

use seqalign_core_rs::Sequence;

use super::refine::refine;
use super::result::{filter, AlignmentResult, Hit, LazyResult};
use super::{KAlignerBuilder, Worker};
use crate::mapper::{self, Mapper};
use crate::params::Params;

/// K-mer seeded aligner over a set of references, each carrying a caller-defined payload.
///
/// Alignment of a query runs through the following stages: seeds are sampled from the query
/// window and looked up in the k-mer index, the seed records of every reference are clustered into
/// islands of consistent offsets, the surviving mapping hits are refined by banded alignments and,
/// finally, hits are filtered by score. An empty stage short-circuits to an empty result.
#[derive(Constructor)]
pub struct KAligner<P> {
    thread_pool: Option<ThreadPool>,
    params: Params,
    mapper: Mapper,
    references: Vec<Sequence>,
    payloads: Vec<P>,
    workers: ThreadLocal<RefCell<Worker>>,
}

impl<P> KAligner<P> {
    pub fn builder(params: Params) -> KAlignerBuilder {
        KAlignerBuilder::new(params)
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn mapper(&self) -> &Mapper {
        &self.mapper
    }

    /// Fresh scratch state for [`Self::align_with`].
    pub fn worker(&self) -> Worker {
        Worker::new(&self.params.mapper)
    }

    /// Indexes the reference and returns its id. References can't be added after the first query.
    pub fn add_reference(&mut self, sequence: Sequence, payload: P) -> Result<usize> {
        let id = self.mapper.add_reference(&sequence)?;
        debug_assert_eq!(id, self.references.len());
        self.references.push(sequence);
        self.payloads.push(payload);
        Ok(id)
    }

    pub fn reference(&self, id: usize) -> Option<(&Sequence, &P)> {
        Some((self.references.get(id)?, self.payloads.get(id)?))
    }

    pub fn references(&self) -> usize {
        self.references.len()
    }

    pub fn align(&self, query: &Sequence) -> Result<AlignmentResult<'_, P>> {
        self.align_range(query, 0..query.len())
    }

    pub fn align_range(&self, query: &Sequence, range: Range<usize>) -> Result<AlignmentResult<'_, P>> {
        self.align_with(query, range, &mut self.worker())
    }

    /// Aligns the query window using the caller's scratch state.
    pub fn align_with(
        &self,
        query: &Sequence,
        range: Range<usize>,
        worker: &mut Worker,
    ) -> Result<AlignmentResult<'_, P>> {
        let mut rng = mapper::seeded_rng(query, &range)?;
        let (seeds, mapped) = self
            .mapper
            .map_with(query, range.clone(), &mut rng, &mut worker.accumulator)?
            .dissolve();

        let mut hits = Vec::with_capacity(mapped.len());
        for mapping in mapped {
            let id = *mapping.reference();
            let (reference, payload) = self
                .reference(id)
                .ok_or_else(|| eyre!("Unknown reference {}", id))?;
            let alignment = refine(
                &self.params,
                reference,
                query,
                &range,
                &seeds,
                &mapping,
                &mut worker.cache,
            )?;
            hits.push(Hit::new(id, payload, alignment, mapping));
        }
        let refined = hits.len();
        let hits = filter(hits, &self.params);
        log::debug!(
            "Aligned window {:?}: {} refined hits, {} reported",
            range,
            refined,
            hits.len()
        );
        Ok(AlignmentResult::new(seeds, hits))
    }

    /// Maps the query window and defers the alignments until they are requested.
    pub fn align_lazy<'a>(
        &'a self,
        query: &'a Sequence,
        range: Range<usize>,
    ) -> Result<LazyResult<'a, P>> {
        let mut rng = mapper::seeded_rng(query, &range)?;
        let (seeds, hits) = self.mapper.map_with_rng(query, range.clone(), &mut rng)?.dissolve();
        Ok(LazyResult::new(self, query, range, seeds, hits))
    }
}

impl<P: Sync> KAligner<P> {
    /// Aligns all queries on the configured thread pool (or the global one). Results keep the order
    /// of the queries.
    pub fn align_batch(&self, queries: &[Sequence]) -> Result<Vec<AlignmentResult<'_, P>>> {
        match &self.thread_pool {
            Some(pool) => pool.install(|| self._align_batch(queries)),
            None => self._align_batch(queries),
        }
    }

    fn _align_batch(&self, queries: &[Sequence]) -> Result<Vec<AlignmentResult<'_, P>>> {
        let outputs: ThreadLocal<RefCell<Vec<(usize, AlignmentResult<'_, P>)>>> = ThreadLocal::new();
        let has_failed = AtomicBool::new(false);

        rayon::scope(|s| {
            for (ind, query) in queries.iter().enumerate() {
                // Stop scheduling once any of the queries failed
                if has_failed.load(Ordering::Relaxed) {
                    return;
                }

                let (outputs, has_failed) = (&outputs, &has_failed);
                s.spawn(move |_| {
                    if has_failed.load(Ordering::Relaxed) {
                        return;
                    }

                    let mut worker = self
                        .workers
                        .get_or(|| RefCell::new(self.worker()))
                        .borrow_mut();
                    match self.align_with(query, 0..query.len(), &mut worker) {
                        Ok(result) => outputs.get_or_default().borrow_mut().push((ind, result)),
                        Err(err) => {
                            has_failed.store(true, Ordering::Relaxed);
                            log::error!("KAligner failed on query {}: {:?}", ind, err);
                        }
                    }
                });
            }
        });

        if has_failed.into_inner() {
            return Err(eyre!("KAligner internal error. See log for details."));
        }

        let mut results: Vec<_> = outputs
            .into_iter()
            .flat_map(|x| x.into_inner())
            .collect();
        results.sort_unstable_by_key(|(ind, _)| *ind);
        log::debug!("Aligned a batch of {} queries", results.len());
        Ok(results.into_iter().map(|(_, result)| result).collect())
    }
}
