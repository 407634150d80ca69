use std::ops::Range;

use seqalign_alignment_rs::pairwise::scoring::{calculate_score, Scheme};
use seqalign_alignment_rs::pairwise::Alignment;
use seqalign_core_rs::{Alphabet, Sequence};

mod banded;
mod dense;
mod properties;

pub fn seq(text: &str) -> Sequence {
    Sequence::encode(Alphabet::Nucleotide, text.as_bytes()).unwrap()
}

pub struct Workload<'a> {
    pub seq1: (&'a str, Range<usize>),
    pub seq2: (&'a str, Range<usize>),
    pub score: i32,
    pub rle: &'a str,
}

/// Checks the alignment against the expectations and its own consistency: the edit script must
/// transform the aligned reference window into the aligned query window and reproduce the score.
pub fn ensure<S: Scheme>(scoring: &S, result: &Alignment, w: &Workload<'_>) {
    let (seq1, seq2) = (seq(w.seq1.0), seq(w.seq2.0));
    let context = format!("{} vs {}", w.seq1.0, w.seq2.0);

    assert_eq!(*result.score(), w.score, "{}", context);
    assert_eq!(result.seq1(), &w.seq1.1, "{}", context);
    assert_eq!(result.seq2(), &w.seq2.1, "{}", context);
    assert_eq!(result.rle(), w.rle, "{}", context);
    consistent(scoring, result, &seq1, &seq2);
}

pub fn consistent<S: Scheme>(scoring: &S, result: &Alignment, seq1: &Sequence, seq2: &Sequence) {
    let recalculated =
        calculate_score(scoring, result.seq1().len(), result.mutations()).unwrap();
    assert_eq!(recalculated, *result.score());

    let applied = result
        .mutations()
        .apply(seq1, result.seq1().clone())
        .unwrap();
    assert_eq!(applied.codes(), &seq2.codes()[result.seq2().clone()]);
}
