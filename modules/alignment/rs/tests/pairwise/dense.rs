use seqalign_alignment_rs::pairwise::scoring::{
    calculate_score, AffineScoring, LinearScoring, Scoring, SubstitutionMatrix,
};
use seqalign_alignment_rs::pairwise::{dense, Bounds, MatrixCache, Window};
use seqalign_core_rs::{Alphabet, Sequence};

use super::{ensure, seq, Workload};

#[test]
fn test_global() {
    let mut cache = MatrixCache::new();

    let linear = LinearScoring::nucleotide();
    for w in [
        Workload {
            seq1: ("ACGTACGT", 0..8),
            seq2: ("ACGTACGT", 0..8),
            score: 40,
            rle: "8=",
        },
        Workload {
            seq1: ("ACGTTACGT", 0..9),
            seq2: ("ACGTACGT", 0..8),
            score: 35,
            rle: "3=1D5=",
        },
        Workload {
            seq1: ("ACGT", 0..4),
            seq2: ("", 0..0),
            score: -20,
            rle: "4D",
        },
        Workload {
            seq1: ("AAAAAAAAAAGGGGGTTTTTTTTTT", 0..25),
            seq2: ("AAAAAAAAAATTTTTTTTTT", 0..20),
            score: 75,
            rle: "10=5D10=",
        },
    ] {
        let (seq1, seq2) = (seq(w.seq1.0), seq(w.seq2.0));
        let result = dense::global(
            &linear,
            Window::full(&seq1),
            Window::full(&seq2),
            &mut cache,
        )
        .unwrap();
        ensure(&linear, &result, &w);
    }

    let affine = AffineScoring::nucleotide();
    for w in [
        Workload {
            seq1: ("", 0..0),
            seq2: ("ACG", 0..3),
            score: -12,
            rle: "3I",
        },
        Workload {
            seq1: ("AAAAAAAAAAGGGGGTTTTTTTTTT", 0..25),
            seq2: ("AAAAAAAAAATTTTTTTTTT", 0..20),
            score: 86,
            rle: "10=5D10=",
        },
        Workload {
            seq1: ("GATTACAGATTACA", 0..14),
            seq2: ("GATCACAGATTTACA", 0..15),
            score: 51,
            rle: "3=1X7=1I3=",
        },
        Workload {
            seq1: ("", 0..0),
            seq2: ("", 0..0),
            score: 0,
            rle: "",
        },
    ] {
        let (seq1, seq2) = (seq(w.seq1.0), seq(w.seq2.0));
        let result = dense::global(
            &affine,
            Window::full(&seq1),
            Window::full(&seq2),
            &mut cache,
        )
        .unwrap();
        ensure(&affine, &result, &w);
    }
}

#[test]
fn test_semi_local() {
    let mut cache = MatrixCache::new();
    let linear = LinearScoring::nucleotide();
    let affine = AffineScoring::nucleotide();

    // Anchored at the left ends
    let w = Workload {
        seq1: ("ACGTACGTTTTTTT", 0..8),
        seq2: ("ACGTACGTGGGGGG", 0..8),
        score: 40,
        rle: "8=",
    };
    let (seq1, seq2) = (seq(w.seq1.0), seq(w.seq2.0));
    let result = dense::semi_local_left(
        &linear,
        Window::full(&seq1),
        Window::full(&seq2),
        Bounds::both(),
        &mut cache,
    )
    .unwrap();
    ensure(&linear, &result, &w);

    // Anchored at the right ends
    let w = Workload {
        seq1: ("TTTTTTACGTACGT", 6..14),
        seq2: ("GGGGGGACGTACGT", 6..14),
        score: 40,
        rle: "8=",
    };
    let (seq1, seq2) = (seq(w.seq1.0), seq(w.seq2.0));
    let result = dense::semi_local_right(
        &linear,
        Window::full(&seq1),
        Window::full(&seq2),
        Bounds::both(),
        &mut cache,
    )
    .unwrap();
    ensure(&linear, &result, &w);

    // Floating first sequence skips its prefix for free
    let w = Workload {
        seq1: ("TTTTACGTACGTCC", 4..12),
        seq2: ("ACGTACGTGG", 0..8),
        score: 40,
        rle: "8=",
    };
    let (seq1, seq2) = (seq(w.seq1.0), seq(w.seq2.0));
    let result = dense::semi_local_left(
        &affine,
        Window::full(&seq1),
        Window::full(&seq2),
        Bounds::new(false, true),
        &mut cache,
    )
    .unwrap();
    ensure(&affine, &result, &w);

    // Bound first sequence must be consumed up to its right end
    let w = Workload {
        seq1: ("ACGTACGTCCCC", 0..12),
        seq2: ("ACGTACGTCC", 0..8),
        score: 27,
        rle: "8=4D",
    };
    let (seq1, seq2) = (seq(w.seq1.0), seq(w.seq2.0));
    let result = dense::semi_local_right(
        &affine,
        Window::full(&seq1),
        Window::new(&seq2, 0..8),
        Bounds::new(true, false),
        &mut cache,
    )
    .unwrap();
    ensure(&affine, &result, &w);
}

#[test]
fn test_local() {
    let mut cache = MatrixCache::new();
    let linear = LinearScoring::nucleotide();
    let affine = AffineScoring::nucleotide();

    for (scoring, w) in [
        (
            Scoring::from(linear),
            Workload {
                seq1: ("GGGGACGTACGTGGGG", 4..12),
                seq2: ("TTACGTACGTTT", 2..10),
                score: 40,
                rle: "8=",
            },
        ),
        (
            Scoring::from(affine.clone()),
            Workload {
                seq1: ("GGGGACGTTACGTGGGG", 7..13),
                seq2: ("TTACGTACGTTT", 0..6),
                score: 30,
                rle: "6=",
            },
        ),
        (
            Scoring::from(affine),
            Workload {
                seq1: ("AAAA", 0..0),
                seq2: ("CCCC", 0..0),
                score: 0,
                rle: "",
            },
        ),
    ] {
        let (seq1, seq2) = (seq(w.seq1.0), seq(w.seq2.0));
        let result = dense::local(
            &scoring,
            Window::full(&seq1),
            Window::full(&seq2),
            &mut cache,
        )
        .unwrap();
        ensure(&scoring, &result, &w);
    }
}

#[test]
fn test_empty_windows() {
    let mut cache = MatrixCache::new();
    let scoring = AffineScoring::nucleotide();
    let (seq1, seq2) = (seq("ACGTACGT"), seq("ACGT"));

    let result = dense::semi_local_left(
        &scoring,
        Window::new(&seq1, 3..3),
        Window::full(&seq2),
        Bounds::both(),
        &mut cache,
    )
    .unwrap();
    assert!(result.is_empty());
    assert_eq!((*result.score(), result.seq1(), result.seq2()), (0, &(3..3), &(0..0)));

    let result = dense::semi_local_right(
        &scoring,
        Window::full(&seq1),
        Window::new(&seq2, 1..1),
        Bounds::both(),
        &mut cache,
    )
    .unwrap();
    assert_eq!((*result.score(), result.seq1(), result.seq2()), (0, &(8..8), &(1..1)));

    let result = dense::local(
        &scoring,
        Window::new(&seq1, 8..8),
        Window::full(&seq2),
        &mut cache,
    )
    .unwrap();
    assert!(result.is_empty());
}

#[test]
fn test_only_substitutions() {
    let scoring = LinearScoring::nucleotide();
    let (seq1, seq2) = (seq("TTACGTACGT"), seq("ACCTACGA"));

    let w = Workload {
        seq1: ("TTACGTACGT", 2..10),
        seq2: ("ACCTACGA", 0..8),
        score: 22,
        rle: "2=1X4=1X",
    };
    let result =
        dense::only_substitutions(&scoring, Window::new(&seq1, 2..10), Window::full(&seq2))
            .unwrap();
    ensure(&scoring, &result, &w);

    assert!(
        dense::only_substitutions(&scoring, Window::full(&seq1), Window::full(&seq2)).is_err()
    );
}

#[test]
fn test_invalid_input() {
    let mut cache = MatrixCache::new();
    let scoring = LinearScoring::nucleotide();
    let nucleotides = seq("ACGT");
    let proteins = Sequence::encode(Alphabet::AminoAcid, b"MKV").unwrap();

    assert!(dense::global(
        &scoring,
        Window::full(&nucleotides),
        Window::full(&proteins),
        &mut cache
    )
    .is_err());

    assert!(dense::global(
        &scoring,
        Window::new(&nucleotides, 2..5),
        Window::full(&nucleotides),
        &mut cache
    )
    .is_err());

    // Custom matrices are fine for alignment, but the score can't be recalculated without a
    // uniform match reward
    let mut scores = vec![-1; 16];
    for code in 0..4 {
        scores[code * 4 + code] = 1 + code as i32;
    }
    let matrix = SubstitutionMatrix::new(Alphabet::Nucleotide, scores).unwrap();
    let custom = LinearScoring::new(matrix, -2).unwrap();
    let result = dense::global(
        &custom,
        Window::full(&nucleotides),
        Window::full(&nucleotides),
        &mut cache,
    )
    .unwrap();
    assert_eq!(*result.score(), 10);
    assert!(calculate_score(&custom, 4, result.mutations()).is_err());
}
