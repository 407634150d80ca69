use std::ops::Range;

use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;

use seqalign_core_rs::num::PrimUInt;
use seqalign_core_rs::{Mutation, Mutations};

use super::op::Op;
use super::step::Step;

/// Pairwise alignment between windows of two sequences. Mutations transform the first window
/// (reference) into the second one (query) and are given in the first sequence coordinates.
#[derive(Clone, Eq, PartialEq, Debug, Getters, Constructor, Dissolve)]
pub struct Alignment {
    score: i32,
    mutations: Mutations,
    seq1: Range<usize>,
    seq2: Range<usize>,
}

impl Alignment {
    /// Zero-length alignment anchored at the given positions.
    pub fn trivial(seq1: usize, seq2: usize) -> Self {
        Self {
            score: 0,
            mutations: Mutations::empty(),
            seq1: seq1..seq1,
            seq2: seq2..seq2,
        }
    }

    /// True if the alignment doesn't cover any residue.
    pub fn is_empty(&self) -> bool {
        self.seq1.is_empty() && self.seq2.is_empty()
    }

    /// Run-length encoded alignment columns.
    pub fn steps<Len: PrimUInt>(&self) -> Vec<Step<Len>> {
        let mut steps = Vec::with_capacity(2 * self.mutations.len() + 1);
        let mut cursor = self.seq1.start;
        for mutation in &self.mutations {
            let pos = mutation.pos();
            if pos > cursor {
                Step::push(&mut steps, Op::Match, pos - cursor);
                cursor = pos;
            }
            match mutation {
                Mutation::Substitution { .. } => {
                    Step::push(&mut steps, Op::Mismatch, 1);
                    cursor += 1;
                }
                Mutation::Deletion { .. } => {
                    Step::push(&mut steps, Op::Deletion, 1);
                    cursor += 1;
                }
                Mutation::Insertion { .. } => Step::push(&mut steps, Op::Insertion, 1),
            }
        }
        if self.seq1.end > cursor {
            Step::push(&mut steps, Op::Match, self.seq1.end - cursor);
        }
        steps
    }

    /// Extended CIGAR string of the alignment.
    pub fn rle(&self) -> String {
        Step::rle_string(self.steps::<u32>().iter())
    }
}
