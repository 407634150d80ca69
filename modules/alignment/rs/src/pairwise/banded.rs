//! Aligners restricted to a diagonal band. The band covers diagonals within `width` of the main
//! one, widened by the length difference of the windows, so the corners are always reachable.
//! Paths leaving the band are never considered.

use eyre::Result;

use super::alignment::Alignment;
use super::cache::MatrixCache;
use super::kernel::{self, Bounds, Setup, Task};
use super::matrix::Band;
use super::scoring::Scheme;
use super::trace::Orientation;
use super::window::{self, Window};

fn align<S: Scheme>(
    scoring: &S,
    seq1: Window<'_>,
    seq2: Window<'_>,
    width: usize,
    orientation: Orientation,
    setup: Setup,
    cache: &mut MatrixCache,
) -> Result<Alignment> {
    let (codes1, codes2) = window::codes(scoring, &seq1, &seq2)?;
    let layout = Band::new(codes1.len(), codes2.len(), width);
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

pub fn global<S: Scheme>(
    scoring: &S,
    seq1: Window<'_>,
    seq2: Window<'_>,
    width: usize,
    cache: &mut MatrixCache,
) -> Result<Alignment> {
    align(scoring, seq1, seq2, width, Orientation::Forward, Setup::global(), cache)
}

/// Anchored at the left ends, ends at the best scoring cell. With a `stop_penalty`, rows are filled
/// until the row best minus the reward of a perfect match over the rows filled so far drops below
/// it. Without one, the whole band is filled.
pub fn semi_local_left<S: Scheme>(
    scoring: &S,
    seq1: Window<'_>,
    seq2: Window<'_>,
    width: usize,
    stop_penalty: Option<i32>,
    cache: &mut MatrixCache,
) -> Result<Alignment> {
    if seq1.is_empty() || seq2.is_empty() {
        window::codes(scoring, &seq1, &seq2)?;
        return Ok(Alignment::trivial(seq1.range().start, seq2.range().start));
    }
    let setup = Setup::semi_local(Bounds::both(), stop_penalty);
    align(scoring, seq1, seq2, width, Orientation::Forward, setup, cache)
}

/// Mirror of [`semi_local_left`] anchored at the right ends.
pub fn semi_local_right<S: Scheme>(
    scoring: &S,
    seq1: Window<'_>,
    seq2: Window<'_>,
    width: usize,
    stop_penalty: Option<i32>,
    cache: &mut MatrixCache,
) -> Result<Alignment> {
    if seq1.is_empty() || seq2.is_empty() {
        window::codes(scoring, &seq1, &seq2)?;
        return Ok(Alignment::trivial(seq1.range().end, seq2.range().end));
    }
    let setup = Setup::semi_local(Bounds::both(), stop_penalty);
    align(scoring, seq1, seq2, width, Orientation::Reversed, setup, cache)
}

/// Anchored at the left ends. The alignment ends at the last residue of one window and may leave
/// up to `added1` trailing residues of the first window or `added2` trailing residues of the
/// second window unaligned.
pub fn right_added<S: Scheme>(
    scoring: &S,
    seq1: Window<'_>,
    seq2: Window<'_>,
    width: usize,
    (added1, added2): (usize, usize),
    cache: &mut MatrixCache,
) -> Result<Alignment> {
    let setup = Setup::added(added1, added2);
    align(scoring, seq1, seq2, width, Orientation::Forward, setup, cache)
}

/// Mirror of [`right_added`]: anchored at the right ends, may leave leading residues unaligned.
pub fn left_added<S: Scheme>(
    scoring: &S,
    seq1: Window<'_>,
    seq2: Window<'_>,
    width: usize,
    (added1, added2): (usize, usize),
    cache: &mut MatrixCache,
) -> Result<Alignment> {
    let setup = Setup::added(added1, added2);
    align(scoring, seq1, seq2, width, Orientation::Reversed, setup, cache)
}
