use std::ops::Range;

use eyre::{eyre, Result};

use seqalign_alignment_rs::pairwise::scoring::calculate_score;
use seqalign_alignment_rs::pairwise::{banded, Alignment, MatrixCache, Window};
use seqalign_core_rs::{Mutations, Sequence};

use crate::mapper::MappingHit;
use crate::params::Params;

/// Extension window lengths and the `added` residues of a fixed bound. The longer side is clipped
/// to the shorter one plus `width`.
fn extension(len1: usize, len2: usize, width: usize) -> (usize, usize, (usize, usize)) {
    if len1 >= len2 {
        let delta = (len1 - len2).min(width);
        (len1.min(len2 + width), len2, (width + delta, width - delta))
    } else {
        let delta = (len2 - len1).min(width);
        (len1, len2.min(len1 + width), (width - delta, width + delta))
    }
}

/// Seed positions `(reference, query)` of the hit, strictly increasing in both sequences.
fn anchors(hit: &MappingHit, seeds: &[usize]) -> Result<Vec<(usize, usize)>> {
    let mut anchors: Vec<(usize, usize)> = Vec::with_capacity(hit.records().len());
    for record in hit.records() {
        let query = *seeds
            .get(record.seed)
            .ok_or_else(|| eyre!("Seed {} is not a part of the query", record.seed))?;
        let reference = usize::try_from(query as i64 + record.offset)
            .map_err(|_| eyre!("Seed record {:?} points before the reference", record))?;
        if anchors
            .last()
            .is_some_and(|(r, q)| reference <= *r || query <= *q)
        {
            continue;
        }
        anchors.push((reference, query));
    }
    Ok(anchors)
}

/// Aligns the query window to the reference around the seeds of the mapping hit.
///
/// The gaps between consecutive seeds are aligned globally within the band of the maximal cluster
/// indels. The flanks left of the first and right of the last seed are extended towards the
/// reference/window ends: by a semi-local alignment for floating bounds or by an alignment that
/// must consume one of the flanks completely for fixed bounds.
pub(crate) fn refine(
    params: &Params,
    reference: &Sequence,
    query: &Sequence,
    window: &Range<usize>,
    seeds: &[usize],
    hit: &MappingHit,
    cache: &mut MatrixCache,
) -> Result<Alignment> {
    let (scoring, k) = (&params.scoring, params.mapper.k);
    let width = params.mapper.max_cluster_indels;

    let anchors = anchors(hit, seeds)?;
    let (&(first1, first2), rest) = anchors
        .split_first()
        .ok_or_else(|| eyre!("Mapping hit for reference {} has no seeds", hit.reference()))?;

    // Left flank
    let (len1, len2, added) = extension(first1, first2 - window.start, width);
    let (seq1, seq2) = (
        Window::new(reference, first1 - len1..first1),
        Window::new(query, first2 - len2..first2),
    );
    let left = if params.floating_left_bound {
        banded::semi_local_right(scoring, seq1, seq2, width, params.stop_penalty, cache)?
    } else {
        banded::left_added(scoring, seq1, seq2, width, added, cache)?
    };

    // Between seeds, each seed itself is an exact match
    let mut blocks = Vec::with_capacity(rest.len());
    let (mut cursor1, mut cursor2) = (first1 + k, first2 + k);
    for &(pos1, pos2) in rest {
        let (end1, end2) = if pos1 >= cursor1 && pos2 >= cursor2 {
            (pos1, pos2)
        } else {
            (pos1 + k, pos2 + k)
        };
        blocks.push(banded::global(
            scoring,
            Window::new(reference, cursor1..end1),
            Window::new(query, cursor2..end2),
            width,
            cache,
        )?);
        (cursor1, cursor2) = (pos1 + k, pos2 + k);
    }

    // Right flank
    let (len1, len2, added) = extension(reference.len() - cursor1, window.end - cursor2, width);
    let (seq1, seq2) = (
        Window::new(reference, cursor1..cursor1 + len1),
        Window::new(query, cursor2..cursor2 + len2),
    );
    let right = if params.floating_right_bound {
        banded::semi_local_left(scoring, seq1, seq2, width, params.stop_penalty, cache)?
    } else {
        banded::right_added(scoring, seq1, seq2, width, added, cache)?
    };

    let mutations = Mutations::concat(
        std::iter::once(&left)
            .chain(&blocks)
            .chain(std::iter::once(&right))
            .map(|x| x.mutations()),
    )?;
    let seq1 = left.seq1().start..right.seq1().end;
    let seq2 = left.seq2().start..right.seq2().end;
    let score = calculate_score(scoring, seq1.len(), &mutations)?;
    Ok(Alignment::new(score, mutations, seq1, seq2))
}
