use std::ops::Range;

use derive_more::Constructor;
use eyre::{ensure, Result};

use seqalign_core_rs::Sequence;

use super::scoring::Scheme;

/// Half-open window of a sequence passed to the aligners.
#[derive(Clone, PartialEq, Eq, Debug, Constructor)]
pub struct Window<'a> {
    seq: &'a Sequence,
    range: Range<usize>,
}

impl<'a> Window<'a> {
    /// The whole sequence.
    pub fn full(seq: &'a Sequence) -> Self {
        Self::new(seq, 0..seq.len())
    }

    pub fn seq(&self) -> &'a Sequence {
        self.seq
    }

    pub fn range(&self) -> &Range<usize> {
        &self.range
    }

    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    pub fn codes(&self) -> Result<&'a [u8]> {
        self.seq.window(&self.range)
    }
}

/// Codes of both windows after checking them against the scoring alphabet.
pub(crate) fn codes<'a, S: Scheme>(
    scoring: &S,
    seq1: &Window<'a>,
    seq2: &Window<'a>,
) -> Result<(&'a [u8], &'a [u8])> {
    let alphabet = scoring.matrix().alphabet();
    ensure!(
        seq1.seq.alphabet() == alphabet && seq2.seq.alphabet() == alphabet,
        "Sequences ({}, {}) don't match the scoring alphabet ({})",
        seq1.seq.alphabet(),
        seq2.seq.alphabet(),
        alphabet
    );
    Ok((seq1.codes()?, seq2.codes()?))
}
