use rand::rngs::StdRng;
use rand::SeedableRng;

use seqalign_kaligner_rs::{KAlignerBuilder, Params};

use super::{ensure_consistent, mutate, random_sequence};

#[test]
fn test_lazy_alignment() {
    let params = Params::default();
    let mut rng = StdRng::seed_from_u64(13);
    let references: Vec<_> = (0..4).map(|_| random_sequence(&mut rng, 250)).collect();

    let mut aligner = KAlignerBuilder::new(params.clone()).build().unwrap();
    for (ind, reference) in references.iter().enumerate() {
        aligner.add_reference(reference.clone(), ind).unwrap();
    }

    let query = mutate(&mut rng, &references[2], 40..200, 4);
    let lazy = aligner.align_lazy(&query, 0..query.len()).unwrap();
    assert!(!lazy.is_empty());
    assert_eq!(lazy.payload(0), Some(&2));
    assert!((0..lazy.len()).all(|ind| !lazy.is_aligned(ind)));

    let alignment = lazy.alignment(0).unwrap().clone();
    assert!(lazy.is_aligned(0));
    assert!((1..lazy.len()).all(|ind| !lazy.is_aligned(ind)));
    // Computed once
    assert_eq!(lazy.alignment(0).unwrap(), &alignment);
    assert!(lazy.alignment(lazy.len()).is_err());
    assert!(lazy.mapping(lazy.len()).is_none());

    let eager = aligner.align(&query).unwrap();
    assert_eq!(lazy.seeds(), eager.seeds().as_slice());
    let result = lazy.into_result().unwrap();
    assert_eq!(result, eager);

    let hit = result.best().unwrap();
    assert_eq!(hit.payload(), &2);
    assert_eq!(hit.alignment(), &alignment);
    ensure_consistent(&params, hit, &references[2], &query);
}

#[test]
fn test_lazy_hits_limit() {
    let params = Params {
        max_hits: 2,
        ..Params::default()
    };
    let mut rng = StdRng::seed_from_u64(21);
    let reference = random_sequence(&mut rng, 150);

    // Identical references produce identical mapping hits
    let mut aligner = KAlignerBuilder::new(params).build().unwrap();
    for ind in 0..4 {
        aligner.add_reference(reference.clone(), ind).unwrap();
    }

    let lazy = aligner.align_lazy(&reference, 0..reference.len()).unwrap();
    assert_eq!(lazy.len(), 2);
    let result = lazy.into_result().unwrap();
    assert_eq!(result.hits().len(), 2);
    assert!(result.hits().iter().all(|x| *x.alignment().score() == 1500));
}
