use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use seqalign_core_rs::Alphabet;
use seqalign_kaligner_rs::mapper::Mapper;
use seqalign_kaligner_rs::MapperParams;

use super::random_sequence;

fn params() -> MapperParams {
    // A single seed is enough for a hit
    MapperParams {
        k: 8,
        absolute_min_cluster_score: 13,
        absolute_min_score: 13,
        relative_min_score: 0.0,
        max_clusters: 5,
        ..MapperParams::default()
    }
}

#[test]
fn test_unmutated_copies_map_back() {
    let mut rng = StdRng::seed_from_u64(42);
    let references: Vec<_> = (0..6).map(|_| random_sequence(&mut rng, 200)).collect();

    let mut mapper = Mapper::new(Alphabet::Nucleotide, params()).unwrap();
    for reference in &references {
        mapper.add_reference(reference).unwrap();
    }

    for (id, reference) in references.iter().enumerate() {
        let result = mapper.map(reference, 0..reference.len()).unwrap();
        let hit = result.hits().iter().find(|x| *x.reference() == id).unwrap();
        assert!(hit.records().iter().any(|x| x.offset == 0));
    }

    for _ in 0..200 {
        let id = rng.gen_range(0..references.len());
        let length = rng.gen_range(8..=60);
        let start = rng.gen_range(0..=200 - length);
        let query = references[id].slice(start..start + length).unwrap();

        let result = mapper.map(&query, 0..query.len()).unwrap();
        let hit = result
            .hits()
            .iter()
            .find(|x| *x.reference() == id)
            .unwrap_or_else(|| panic!("No hit for {}..{} of reference {}", start, start + length, id));
        assert!(hit.records().iter().any(|x| x.offset == start as i64));
    }
}

#[test]
fn test_islands_never_overlap() {
    let mut rng = StdRng::seed_from_u64(7);
    let params = MapperParams {
        k: 4,
        ..MapperParams::default()
    };

    for _ in 0..50 {
        // Short k-mers over repetitive sequences produce plenty of competing offsets
        let references: Vec<_> = (0..3).map(|_| random_sequence(&mut rng, 300)).collect();
        let mut mapper = Mapper::new(Alphabet::Nucleotide, params.clone()).unwrap();
        for reference in &references {
            mapper.add_reference(reference).unwrap();
        }

        let query = random_sequence(&mut rng, 120);
        let result = mapper.map(&query, 0..query.len()).unwrap();

        let mut previous = None;
        for hit in result.hits() {
            assert!(*hit.score() >= params.absolute_min_cluster_score);
            if let Some(previous) = previous {
                assert!(previous >= *hit.score());
            }
            previous = Some(*hit.score());

            let islands: Vec<_> = hit.islands().collect();
            assert!(islands.len() <= params.max_clusters);
            for island in &islands {
                assert!(!island.is_empty());
                for pair in island.windows(2) {
                    assert!(pair[0].seed < pair[1].seed);
                }
            }
            for pair in islands.windows(2) {
                let last = pair[0].last().unwrap().seed;
                let first = pair[1].first().unwrap().seed;
                assert!(last < first, "Islands overlap: {:?}", hit);
            }
        }
    }
}
