use std::ops::Range;

use eyre::Result;

use seqalign_core_rs::MutationsBuilder;

use super::alignment::Alignment;

/// Direction in which the kernel consumes both windows.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) enum Orientation {
    /// Row `i` follows the residue `from + i - 1`.
    Forward,
    /// Row `i` follows the residue `end - i`, i.e. the windows are read right to left.
    Reversed,
}

/// Collects traceback moves and translates matrix cells into window coordinates.
pub(crate) struct Tracer {
    orientation: Orientation,
    range1: Range<usize>,
    range2: Range<usize>,
    builder: MutationsBuilder,
}

impl Tracer {
    pub fn new(orientation: Orientation, range1: Range<usize>, range2: Range<usize>) -> Self {
        Self {
            orientation,
            range1,
            range2,
            builder: MutationsBuilder::new(),
        }
    }

    /// Position of the first sequence residue consumed by the move into row `i`.
    #[inline(always)]
    fn residue(&self, i: usize) -> usize {
        match self.orientation {
            Orientation::Forward => self.range1.start + i - 1,
            Orientation::Reversed => self.range1.end - i,
        }
    }

    /// Position of the first sequence boundary corresponding to row `i`.
    #[inline(always)]
    fn boundary(&self, i: usize) -> usize {
        match self.orientation {
            Orientation::Forward => self.range1.start + i,
            Orientation::Reversed => self.range1.end - i,
        }
    }

    /// Diagonal move into row `i`. Identical codes produce no mutation.
    #[inline(always)]
    pub fn diagonal(&mut self, i: usize, from: u8, to: u8) {
        if from != to {
            self.builder.append_substitution(self.residue(i), from, to);
        }
    }

    /// Vertical move into row `i`.
    #[inline(always)]
    pub fn deletion(&mut self, i: usize, from: u8) {
        self.builder.append_deletion(self.residue(i), from);
    }

    /// Horizontal move inside row `i`.
    #[inline(always)]
    pub fn insertion(&mut self, i: usize, to: u8) {
        self.builder.append_insertion(self.boundary(i), to);
    }

    /// Builds the alignment spanning the matrix cells `start` (where the traceback stopped) and
    /// `end` (where it began).
    pub fn finish(
        mut self,
        score: i32,
        start: (usize, usize),
        end: (usize, usize),
    ) -> Result<Alignment> {
        let (seq1, seq2) = match self.orientation {
            Orientation::Forward => {
                // Forward tracebacks emit mutations right to left
                self.builder.reverse();
                (
                    self.range1.start + start.0..self.range1.start + end.0,
                    self.range2.start + start.1..self.range2.start + end.1,
                )
            }
            Orientation::Reversed => (
                self.range1.end - end.0..self.range1.end - start.0,
                self.range2.end - end.1..self.range2.end - start.1,
            ),
        };
        Ok(Alignment::new(score, self.builder.finish()?, seq1, seq2))
    }
}
