use std::cell::{OnceCell, RefCell};
use std::cmp::Reverse;
use std::ops::Range;

use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;
use eyre::{eyre, Result};

use seqalign_alignment_rs::pairwise::{Alignment, MatrixCache};
use seqalign_core_rs::Sequence;

use super::refine::refine;
use super::KAligner;
use crate::mapper::MappingHit;
use crate::params::Params;
use crate::threshold;

/// Query alignment to one of the references.
#[derive(Clone, PartialEq, Eq, Debug, Getters, Dissolve, Constructor)]
pub struct Hit<'a, P> {
    reference: usize,
    payload: &'a P,
    alignment: Alignment,
    /// Seed-stage evidence behind the alignment.
    mapping: MappingHit,
}

#[derive(Clone, PartialEq, Eq, Debug, Getters, Dissolve, Constructor)]
pub struct AlignmentResult<'a, P> {
    /// Query positions of the sampled seeds.
    seeds: Vec<usize>,
    /// Hits ordered by the alignment score, best first.
    hits: Vec<Hit<'a, P>>,
}

impl<'a, P> AlignmentResult<'a, P> {
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn best(&self) -> Option<&Hit<'a, P>> {
        self.hits.first()
    }
}

/// Sorts hits by score and keeps the leading ones passing the absolute and relative thresholds,
/// at most `max_hits` of them.
pub(crate) fn filter<'a, P>(mut hits: Vec<Hit<'a, P>>, params: &Params) -> Vec<Hit<'a, P>> {
    hits.sort_by_key(|x| Reverse(*x.alignment.score()));
    let Some(top) = hits.first().map(|x| *x.alignment.score()) else {
        return hits;
    };
    let passed = hits
        .iter()
        .take_while(|x| {
            threshold::passes(
                *x.alignment.score(),
                params.absolute_min_score,
                params.relative_min_score,
                top,
            )
        })
        .count();
    hits.truncate(passed.min(params.max_hits));
    hits
}

/// Mapping hits ordered by the seed-stage score whose alignments are computed on first access.
/// The seed-stage order approximates the final one, but alignment scores may reorder the hits.
pub struct LazyResult<'a, P> {
    aligner: &'a KAligner<P>,
    query: &'a Sequence,
    window: Range<usize>,
    seeds: Vec<usize>,
    hits: Vec<MappingHit>,
    alignments: Vec<OnceCell<Alignment>>,
    cache: RefCell<MatrixCache>,
}

impl<'a, P> LazyResult<'a, P> {
    pub(crate) fn new(
        aligner: &'a KAligner<P>,
        query: &'a Sequence,
        window: Range<usize>,
        seeds: Vec<usize>,
        mut hits: Vec<MappingHit>,
    ) -> Self {
        hits.truncate(aligner.params().max_hits);
        let alignments = hits.iter().map(|_| OnceCell::new()).collect();
        Self {
            aligner,
            query,
            window,
            seeds,
            hits,
            alignments,
            cache: RefCell::new(MatrixCache::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn seeds(&self) -> &[usize] {
        &self.seeds
    }

    pub fn mapping(&self, ind: usize) -> Option<&MappingHit> {
        self.hits.get(ind)
    }

    pub fn payload(&self, ind: usize) -> Option<&'a P> {
        let aligner: &'a KAligner<P> = self.aligner;
        self.hits
            .get(ind)
            .and_then(|x| aligner.reference(*x.reference()))
            .map(|(_, payload)| payload)
    }

    /// True if the alignment of the hit was already computed.
    pub fn is_aligned(&self, ind: usize) -> bool {
        self.alignments.get(ind).is_some_and(|x| x.get().is_some())
    }

    /// Alignment of the hit, computed on the first call.
    pub fn alignment(&self, ind: usize) -> Result<&Alignment> {
        let (Some(hit), Some(cell)) = (self.hits.get(ind), self.alignments.get(ind)) else {
            return Err(eyre!("Hit {} is out of range, there are {} hits", ind, self.len()));
        };
        if let Some(alignment) = cell.get() {
            return Ok(alignment);
        }

        let (reference, _) = self
            .aligner
            .reference(*hit.reference())
            .ok_or_else(|| eyre!("Unknown reference {}", hit.reference()))?;
        let alignment = refine(
            self.aligner.params(),
            reference,
            self.query,
            &self.window,
            &self.seeds,
            hit,
            &mut self.cache.borrow_mut(),
        )?;
        Ok(cell.get_or_init(|| alignment))
    }

    /// Aligns all remaining hits and applies the final filtering.
    pub fn into_result(self) -> Result<AlignmentResult<'a, P>> {
        for ind in 0..self.len() {
            self.alignment(ind)?;
        }

        let aligner: &'a KAligner<P> = self.aligner;
        let mut hits = Vec::with_capacity(self.hits.len());
        for (mapping, cell) in self.hits.into_iter().zip(self.alignments) {
            let reference = *mapping.reference();
            let (_, payload) = aligner
                .reference(reference)
                .ok_or_else(|| eyre!("Unknown reference {}", reference))?;
            let alignment = cell
                .into_inner()
                .ok_or_else(|| eyre!("Hit for reference {} was not aligned", reference))?;
            hits.push(Hit::new(reference, payload, alignment, mapping));
        }
        Ok(AlignmentResult::new(
            self.seeds,
            filter(hits, aligner.params()),
        ))
    }
}
