use seqalign_alignment_rs::pairwise::scoring::{AffineScoring, LinearScoring};
use seqalign_alignment_rs::pairwise::{banded, dense, MatrixCache, Window};

use super::{ensure, seq, Workload};

#[test]
fn test_global() {
    let mut cache = MatrixCache::new();
    let scoring = LinearScoring::nucleotide();

    for (width, w) in [
        (
            1,
            Workload {
                seq1: ("ACGTTACGTACGT", 0..13),
                seq2: ("ACGTACGTACGT", 0..12),
                score: 55,
                rle: "3=1D9=",
            },
        ),
        // The shift by one is outside of the band: only substitutions are possible
        (
            0,
            Workload {
                seq1: ("CACGTACGTA", 0..10),
                seq2: ("ACGTACGTAC", 0..10),
                score: -40,
                rle: "10X",
            },
        ),
        (
            1,
            Workload {
                seq1: ("CACGTACGTA", 0..10),
                seq2: ("ACGTACGTAC", 0..10),
                score: 35,
                rle: "1D9=1I",
            },
        ),
        (
            2,
            Workload {
                seq1: ("ACGT", 0..4),
                seq2: ("", 0..0),
                score: -20,
                rle: "4D",
            },
        ),
    ] {
        let (seq1, seq2) = (seq(w.seq1.0), seq(w.seq2.0));
        let result = banded::global(
            &scoring,
            Window::full(&seq1),
            Window::full(&seq2),
            width,
            &mut cache,
        )
        .unwrap();
        ensure(&scoring, &result, &w);
    }
}

#[test]
fn test_wide_band_is_dense() {
    let mut cache = MatrixCache::new();
    let scoring = AffineScoring::nucleotide();
    let (seq1, seq2) = (seq("GATTACAGATTACATTTGACA"), seq("GATCACAGATTTACATTGACA"));

    let expected = dense::global(
        &scoring,
        Window::full(&seq1),
        Window::full(&seq2),
        &mut cache,
    )
    .unwrap();
    for width in [21, 100] {
        let result = banded::global(
            &scoring,
            Window::full(&seq1),
            Window::full(&seq2),
            width,
            &mut cache,
        )
        .unwrap();
        assert_eq!(result, expected);
    }
}

#[test]
fn test_semi_local() {
    let mut cache = MatrixCache::new();

    let linear = LinearScoring::nucleotide();
    let w = Workload {
        seq1: ("ACGTACGTACGTAAAAAAAAAA", 0..12),
        seq2: ("ACGTACGTACGTCCCCCCCCCC", 0..12),
        score: 60,
        rle: "12=",
    };
    let (seq1, seq2) = (seq(w.seq1.0), seq(w.seq2.0));
    let result = banded::semi_local_left(
        &linear,
        Window::full(&seq1),
        Window::full(&seq2),
        2,
        Some(-10),
        &mut cache,
    )
    .unwrap();
    ensure(&linear, &result, &w);

    let affine = AffineScoring::nucleotide();
    let w = Workload {
        seq1: ("AAAAAAAAAAACGTACGTACGT", 10..22),
        seq2: ("CCCCCCCCCCACGTACGTACGT", 10..22),
        score: 60,
        rle: "12=",
    };
    let (seq1, seq2) = (seq(w.seq1.0), seq(w.seq2.0));
    let result = banded::semi_local_right(
        &affine,
        Window::full(&seq1),
        Window::full(&seq2),
        2,
        Some(-10),
        &mut cache,
    )
    .unwrap();
    ensure(&affine, &result, &w);

    // Empty windows produce the trivial alignment
    let result = banded::semi_local_right(
        &affine,
        Window::new(&seq1, 4..4),
        Window::full(&seq2),
        2,
        Some(-10),
        &mut cache,
    )
    .unwrap();
    assert_eq!((*result.score(), result.seq1(), result.seq2()), (0, &(4..4), &(22..22)));
}

#[test]
fn test_added() {
    let mut cache = MatrixCache::new();

    let linear = LinearScoring::nucleotide();
    for (added, w) in [
        (
            (3, 2),
            Workload {
                seq1: ("ACGTACGTCCC", 0..10),
                seq2: ("ACGTACGTGG", 0..10),
                score: 32,
                rle: "8=2X",
            },
        ),
        (
            (0, 3),
            Workload {
                seq1: ("ACGTACGT", 0..8),
                seq2: ("ACGTACGTGGG", 0..8),
                score: 40,
                rle: "8=",
            },
        ),
    ] {
        let (seq1, seq2) = (seq(w.seq1.0), seq(w.seq2.0));
        let result = banded::right_added(
            &linear,
            Window::full(&seq1),
            Window::full(&seq2),
            3,
            added,
            &mut cache,
        )
        .unwrap();
        ensure(&linear, &result, &w);
    }

    let affine = AffineScoring::nucleotide();
    let w = Workload {
        seq1: ("CCCACGTACGT", 1..11),
        seq2: ("GGACGTACGT", 0..10),
        score: 32,
        rle: "2X8=",
    };
    let (seq1, seq2) = (seq(w.seq1.0), seq(w.seq2.0));
    let result = banded::left_added(
        &affine,
        Window::full(&seq1),
        Window::full(&seq2),
        3,
        (3, 2),
        &mut cache,
    )
    .unwrap();
    ensure(&affine, &result, &w);
}

#[test]
fn test_semi_local_stop_penalty() {
    let mut cache = MatrixCache::new();
    let scoring = LinearScoring::nucleotide();
    let (seq1, seq2) = (seq("ACGTTCGTACGT"), seq("ACGTACGTACGT"));

    // Without a stop penalty the extension passes through the mismatch
    let w = Workload {
        seq1: ("ACGTTCGTACGT", 0..12),
        seq2: ("ACGTACGTACGT", 0..12),
        score: 51,
        rle: "4=1X7=",
    };
    let result = banded::semi_local_left(
        &scoring,
        Window::full(&seq1),
        Window::full(&seq2),
        2,
        None,
        &mut cache,
    )
    .unwrap();
    ensure(&scoring, &result, &w);

    // A zero stop penalty gives up on the first row below the perfect match
    let w = Workload {
        seq1: ("ACGTTCGTACGT", 0..4),
        seq2: ("ACGTACGTACGT", 0..4),
        score: 20,
        rle: "4=",
    };
    let result = banded::semi_local_left(
        &scoring,
        Window::full(&seq1),
        Window::full(&seq2),
        2,
        Some(0),
        &mut cache,
    )
    .unwrap();
    ensure(&scoring, &result, &w);
}
