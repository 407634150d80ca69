use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use seqalign_alignment_rs::pairwise::scoring::{AffineScoring, LinearScoring, Scoring};
use seqalign_alignment_rs::pairwise::{banded, dense, Bounds, MatrixCache, Window};
use seqalign_core_rs::{Alphabet, Sequence};

use super::consistent;

fn random_codes(rng: &mut StdRng, len: usize) -> Vec<u8> {
    (0..len).map(|_| rng.gen_range(0..4)).collect()
}

/// Copy of the codes with random substitutions and short indels.
fn mutate(rng: &mut StdRng, codes: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(codes.len() + 8);
    for &code in codes {
        match rng.gen_range(0..100) {
            0..8 => {}
            8..16 => result.push(rng.gen_range(0..4)),
            16..22 => {
                result.push(code);
                result.push(rng.gen_range(0..4));
            }
            _ => result.push(code),
        }
    }
    result
}

/// Random flank of up to four residues.
fn random_flank(rng: &mut StdRng) -> Vec<u8> {
    let len = rng.gen_range(0..5);
    random_codes(rng, len)
}

/// Random pair of related sequences with random flanks around the aligned windows.
fn random_pair(rng: &mut StdRng) -> (Sequence, Sequence) {
    let len = rng.gen_range(0..40);
    let core = random_codes(rng, len);
    let mutated = mutate(rng, &core);

    let mut seq1 = random_flank(rng);
    seq1.extend(core);
    seq1.extend(random_flank(rng));

    let mut seq2 = random_flank(rng);
    seq2.extend(mutated);
    seq2.extend(random_flank(rng));

    (
        Sequence::from_codes(Alphabet::Nucleotide, seq1).unwrap(),
        Sequence::from_codes(Alphabet::Nucleotide, seq2).unwrap(),
    )
}

/// Copy of the codes with random substitutions and at most `indels` single-residue indels.
fn mutate_within(rng: &mut StdRng, codes: &[u8], indels: usize) -> Vec<u8> {
    let mut result = codes.to_vec();
    for _ in 0..rng.gen_range(0..=indels) {
        let pos = rng.gen_range(0..=result.len());
        if rng.gen_bool(0.5) && pos < result.len() {
            result.remove(pos);
        } else {
            let code = rng.gen_range(0..4);
            result.insert(pos, code);
        }
    }
    for _ in 0..rng.gen_range(0..4) {
        if result.is_empty() {
            break;
        }
        let pos = rng.gen_range(0..result.len());
        result[pos] = rng.gen_range(0..4);
    }
    result
}

fn schemes() -> [Scoring; 2] {
    [
        LinearScoring::nucleotide().into(),
        AffineScoring::nucleotide().into(),
    ]
}

#[test]
fn test_alignments_are_consistent() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut cache = MatrixCache::new();

    for _ in 0..300 {
        let (seq1, seq2) = random_pair(&mut rng);
        let (w1, w2) = (Window::full(&seq1), Window::full(&seq2));
        let bounds = Bounds::new(rng.gen(), rng.gen());
        let width = rng.gen_range(0..8);

        for scoring in schemes() {
            let results = [
                dense::global(&scoring, w1.clone(), w2.clone(), &mut cache).unwrap(),
                dense::semi_local_left(&scoring, w1.clone(), w2.clone(), bounds, &mut cache)
                    .unwrap(),
                dense::semi_local_right(&scoring, w1.clone(), w2.clone(), bounds, &mut cache)
                    .unwrap(),
                dense::local(&scoring, w1.clone(), w2.clone(), &mut cache).unwrap(),
                banded::global(&scoring, w1.clone(), w2.clone(), width, &mut cache).unwrap(),
                banded::semi_local_left(&scoring, w1.clone(), w2.clone(), width, Some(-20), &mut cache)
                    .unwrap(),
                banded::semi_local_right(&scoring, w1.clone(), w2.clone(), width, Some(-20), &mut cache)
                    .unwrap(),
                banded::right_added(&scoring, w1.clone(), w2.clone(), width, (3, 2), &mut cache)
                    .unwrap(),
                banded::left_added(&scoring, w1.clone(), w2.clone(), width, (2, 3), &mut cache)
                    .unwrap(),
            ];
            for result in &results {
                consistent(&scoring, result, &seq1, &seq2);
            }

            // Global alignments cover both windows, the band can only make things worse
            assert_eq!((results[0].seq1(), results[0].seq2()), (&(0..seq1.len()), &(0..seq2.len())));
            assert!(results[4].score() <= results[0].score());
            // Local alignment is the best among all
            for result in &results {
                assert!(result.score() <= results[3].score());
            }
        }
    }
}

#[test]
fn test_band_covering_matrix_is_dense() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut cache = MatrixCache::new();

    for _ in 0..200 {
        let (seq1, seq2) = random_pair(&mut rng);
        let width = seq1.len().max(seq2.len());
        for scoring in schemes() {
            let expected = dense::global(
                &scoring,
                Window::full(&seq1),
                Window::full(&seq2),
                &mut cache,
            )
            .unwrap();
            let banded = banded::global(
                &scoring,
                Window::full(&seq1),
                Window::full(&seq2),
                width,
                &mut cache,
            )
            .unwrap();
            assert_eq!(banded, expected);
        }
    }
}

#[test]
fn test_band_matches_dense_within_indels() {
    let mut rng = StdRng::seed_from_u64(19);
    let mut cache = MatrixCache::new();

    for _ in 0..500 {
        let width = rng.gen_range(1..4);
        let len = rng.gen_range(1..60);
        let seq1 = random_codes(&mut rng, len);
        let seq2 = mutate_within(&mut rng, &seq1, width);
        let seq1 = Sequence::from_codes(Alphabet::Nucleotide, seq1).unwrap();
        let seq2 = Sequence::from_codes(Alphabet::Nucleotide, seq2).unwrap();

        for scoring in schemes() {
            let expected = dense::global(
                &scoring,
                Window::full(&seq1),
                Window::full(&seq2),
                &mut cache,
            )
            .unwrap();
            let banded = banded::global(
                &scoring,
                Window::full(&seq1),
                Window::full(&seq2),
                width,
                &mut cache,
            )
            .unwrap();
            assert_eq!(
                banded.score(),
                expected.score(),
                "width {width}: {seq1} vs {seq2}"
            );
            consistent(&scoring, &banded, &seq1, &seq2);
        }
    }
}

#[test]
fn test_deterministic() {
    let mut rng = StdRng::seed_from_u64(11);
    let (seq1, seq2) = random_pair(&mut rng);

    // Fresh and reused (dirty) caches must give identical results
    let mut reused = MatrixCache::new();
    for scoring in schemes() {
        let expected = dense::local(
            &scoring,
            Window::full(&seq1),
            Window::full(&seq2),
            &mut MatrixCache::new(),
        )
        .unwrap();
        for _ in 0..3 {
            let result = dense::local(
                &scoring,
                Window::full(&seq1),
                Window::full(&seq2),
                &mut reused,
            )
            .unwrap();
            assert_eq!(result, expected);
        }
    }
}
