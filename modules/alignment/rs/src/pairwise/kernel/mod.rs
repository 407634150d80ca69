use std::ops::Range;

use eyre::Result;

use seqalign_core_rs::Alignable;

use super::alignment::Alignment;
use super::cache::MatrixCache;
use super::matrix::{Layout, Matrix};
use super::scoring::{Gaps, Scheme};
use super::trace::{Orientation, Tracer};

mod affine;
mod linear;

/// Which sequences must be consumed from the very start of their windows. A floating sequence
/// may skip a prefix of its window for free.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct Bounds {
    pub seq1: bool,
    pub seq2: bool,
}

impl Bounds {
    pub fn new(seq1: bool, seq2: bool) -> Self {
        Self { seq1, seq2 }
    }

    pub fn both() -> Self {
        Self::new(true, true)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::both()
    }
}

/// Where the traceback begins.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) enum Goal {
    /// The bottom-right cell.
    Corner,
    /// The best scoring cell. Filling stops early once the best reachable score of a row drops
    /// below the stop penalty.
    Best { stop_penalty: Option<i32> },
    /// The best cell of the last column within `seq1` trailing rows or of the last row within
    /// `seq2` trailing columns.
    Added { seq1: usize, seq2: usize },
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) struct Setup {
    pub bounds: Bounds,
    pub local: bool,
    pub goal: Goal,
}

impl Setup {
    pub fn global() -> Self {
        Self {
            bounds: Bounds::both(),
            local: false,
            goal: Goal::Corner,
        }
    }

    pub fn semi_local(bounds: Bounds, stop_penalty: Option<i32>) -> Self {
        Self {
            bounds,
            local: false,
            goal: Goal::Best { stop_penalty },
        }
    }

    pub fn local() -> Self {
        Self {
            bounds: Bounds::new(false, false),
            local: true,
            goal: Goal::Best { stop_penalty: None },
        }
    }

    pub fn added(seq1: usize, seq2: usize) -> Self {
        Self {
            bounds: Bounds::both(),
            local: false,
            goal: Goal::Added { seq1, seq2 },
        }
    }

    /// The traceback stops in the cell without consuming anything else.
    #[inline(always)]
    fn stops(&self, i: usize, j: usize, score: i32) -> bool {
        (i == 0 && j == 0)
            || (self.local && score == 0)
            || (i == 0 && !self.bounds.seq2)
            || (j == 0 && !self.bounds.seq1)
    }
}

/// Window pair prepared for a kernel run.
pub(crate) struct Task<'a> {
    pub seq1: &'a [u8],
    pub range1: Range<usize>,
    pub seq2: &'a [u8],
    pub range2: Range<usize>,
    pub orientation: Orientation,
    pub setup: Setup,
}

/// Runs the kernel matching the gap model and orientation.
pub(crate) fn run<S: Scheme, L: Layout>(
    scoring: &S,
    task: Task<'_>,
    layout: L,
    cache: &mut MatrixCache,
) -> Result<Alignment> {
    let tracer = Tracer::new(task.orientation, task.range1, task.range2);
    let (seq1, seq2) = (task.seq1, task.seq2);
    match task.orientation {
        Orientation::Forward => dispatch(scoring, &seq1, &seq2, task.setup, layout, cache, tracer),
        Orientation::Reversed => dispatch(
            scoring,
            &seq1.reversed(),
            &seq2.reversed(),
            task.setup,
            layout,
            cache,
            tracer,
        ),
    }
}

fn dispatch<S, L, S1, S2>(
    scoring: &S,
    seq1: &S1,
    seq2: &S2,
    setup: Setup,
    layout: L,
    cache: &mut MatrixCache,
    tracer: Tracer,
) -> Result<Alignment>
where
    S: Scheme,
    L: Layout,
    S1: Alignable<Symbol = u8>,
    S2: Alignable<Symbol = u8>,
{
    match scoring.gaps() {
        Gaps::Linear(gap) => {
            let matrix = Matrix::new(cache.linear(layout.size()), layout);
            linear::align(scoring, gap, seq1, seq2, setup, matrix, tracer)
        }
        Gaps::Affine { open, extend } => {
            let (main, deletions, insertions) = cache.affine(layout.size());
            let matrices = affine::Matrices {
                main: Matrix::new(main, layout),
                deletions: Matrix::new(deletions, layout),
                insertions: Matrix::new(insertions, layout),
            };
            affine::align(scoring, (open, extend), seq1, seq2, setup, matrices, tracer)
        }
    }
}

/// Traceback start for the `Added` goal. Ties keep the earliest cell, last column first.
fn added_endpoint<L: Layout>(
    main: &Matrix<'_, L>,
    len1: usize,
    len2: usize,
    added1: usize,
    added2: usize,
) -> (usize, usize) {
    let mut best = (len1, len2);
    let mut score = i32::MIN;
    for i in len1.saturating_sub(added1)..=len1 {
        if main.get(i, len2) > score {
            score = main.get(i, len2);
            best = (i, len2);
        }
    }
    for j in len2.saturating_sub(added2)..=len2 {
        if main.get(len1, j) > score {
            score = main.get(len1, j);
            best = (len1, j);
        }
    }
    best
}
