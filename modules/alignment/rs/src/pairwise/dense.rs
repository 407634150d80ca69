//! Full-matrix aligners. Memory and time are proportional to the product of the window lengths.

use eyre::{ensure, Result};

use seqalign_core_rs::MutationsBuilder;

use super::alignment::Alignment;
use super::cache::MatrixCache;
use super::kernel::{self, Bounds, Setup, Task};
use super::matrix::Dense;
use super::scoring::Scheme;
use super::trace::Orientation;
use super::window::{self, Window};

fn align<S: Scheme>(
    scoring: &S,
    seq1: Window<'_>,
    seq2: Window<'_>,
    orientation: Orientation,
    setup: Setup,
    cache: &mut MatrixCache,
) -> Result<Alignment> {
    let (codes1, codes2) = window::codes(scoring, &seq1, &seq2)?;
    let layout = Dense::new(codes1.len(), codes2.len());
    let task = Task {
        seq1: codes1,
        range1: seq1.range().clone(),
        seq2: codes2,
        range2: seq2.range().clone(),
        orientation,
        setup,
    };
    kernel::run(scoring, task, layout, cache)
}

/// End-to-end alignment of both windows. An empty window is aligned as a single gap.
pub fn global<S: Scheme>(
    scoring: &S,
    seq1: Window<'_>,
    seq2: Window<'_>,
    cache: &mut MatrixCache,
) -> Result<Alignment> {
    align(scoring, seq1, seq2, Orientation::Forward, Setup::global(), cache)
}

/// Alignment anchored at the left ends of the windows that ends wherever the score is the best.
/// A floating sequence (see [`Bounds`]) may also skip a prefix of its window for free.
pub fn semi_local_left<S: Scheme>(
    scoring: &S,
    seq1: Window<'_>,
    seq2: Window<'_>,
    bounds: Bounds,
    cache: &mut MatrixCache,
) -> Result<Alignment> {
    if seq1.is_empty() || seq2.is_empty() {
        window::codes(scoring, &seq1, &seq2)?;
        return Ok(Alignment::trivial(seq1.range().start, seq2.range().start));
    }
    let setup = Setup::semi_local(bounds, None);
    align(scoring, seq1, seq2, Orientation::Forward, setup, cache)
}

/// Mirror of [`semi_local_left`]: anchored at the right ends, bounds refer to the right ends.
pub fn semi_local_right<S: Scheme>(
    scoring: &S,
    seq1: Window<'_>,
    seq2: Window<'_>,
    bounds: Bounds,
    cache: &mut MatrixCache,
) -> Result<Alignment> {
    if seq1.is_empty() || seq2.is_empty() {
        window::codes(scoring, &seq1, &seq2)?;
        return Ok(Alignment::trivial(seq1.range().end, seq2.range().end));
    }
    let setup = Setup::semi_local(bounds, None);
    align(scoring, seq1, seq2, Orientation::Reversed, setup, cache)
}

/// Best scoring pair of sub-windows. Returns a zero-score empty alignment if nothing scores
/// above zero.
pub fn local<S: Scheme>(
    scoring: &S,
    seq1: Window<'_>,
    seq2: Window<'_>,
    cache: &mut MatrixCache,
) -> Result<Alignment> {
    if seq1.is_empty() || seq2.is_empty() {
        window::codes(scoring, &seq1, &seq2)?;
        return Ok(Alignment::trivial(seq1.range().start, seq2.range().start));
    }
    align(scoring, seq1, seq2, Orientation::Forward, Setup::local(), cache)
}

/// Gapless alignment of equally sized windows.
pub fn only_substitutions<S: Scheme>(
    scoring: &S,
    seq1: Window<'_>,
    seq2: Window<'_>,
) -> Result<Alignment> {
    let (codes1, codes2) = window::codes(scoring, &seq1, &seq2)?;
    ensure!(
        codes1.len() == codes2.len(),
        "Gapless alignment requires windows of equal length, got {} and {}",
        codes1.len(),
        codes2.len()
    );

    let start = seq1.range().start;
    let mut score = 0;
    let mut builder = MutationsBuilder::new();
    for (ind, (&from, &to)) in codes1.iter().zip(codes2).enumerate() {
        score += scoring.score(from, to);
        if from != to {
            builder.append_substitution(start + ind, from, to);
        }
    }
    Ok(Alignment::new(
        score,
        builder.finish()?,
        seq1.range().clone(),
        seq2.range().clone(),
    ))
}
