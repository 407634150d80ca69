#[cfg(feature = "bitcode")]
use bitcode::{Decode, Encode};
use eyre::{ensure, eyre, Result};

use seqalign_alignment_rs::pairwise::scoring::AffineScoring;
use seqalign_core_rs::Alphabet;

/// Parameters of the k-mer seed index and the offset clustering.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
pub struct MapperParams {
    // Seeds
    pub k: usize,
    pub min_distance: usize,
    pub max_distance: usize,
    // Islands
    pub absolute_min_cluster_score: i32,
    pub extra_cluster_score: i32,
    pub match_score: i32,
    pub mismatch_score: i32,
    pub offset_shift_score: i32,
    pub slot_count: usize,
    pub max_clusters: usize,
    pub max_cluster_indels: usize,
    // Hits
    pub absolute_min_score: i32,
    pub relative_min_score: f64,
}

impl MapperParams {
    pub fn validate(&self) -> Result<()> {
        ensure!(self.k > 0, "K-mer length must be positive");
        ensure!(
            self.min_distance > 0 && self.min_distance <= self.max_distance,
            "Seed distances must satisfy 0 < min <= max, got min={}, max={}",
            self.min_distance,
            self.max_distance
        );
        ensure!(
            self.match_score > 0,
            "Seed match score must be positive, got {}",
            self.match_score
        );
        ensure!(
            self.mismatch_score <= 0 && self.offset_shift_score <= 0,
            "Seed mismatch and offset shift scores must not be positive, got {} and {}",
            self.mismatch_score,
            self.offset_shift_score
        );
        ensure!(
            self.slot_count > 0 && self.max_clusters > 0,
            "At least one island slot and one cluster per hit are required"
        );
        ensure!(
            (0.0..=1.0).contains(&self.relative_min_score),
            "Relative minimal score must be within [0, 1], got {}",
            self.relative_min_score
        );
        Ok(())
    }

    /// Smallest number of candidate records able to form an island of the minimal score.
    pub(crate) fn min_records(&self) -> usize {
        if self.absolute_min_cluster_score <= 0 {
            return 0;
        }
        (self.absolute_min_cluster_score as usize).div_ceil(self.match_score as usize)
    }
}

impl Default for MapperParams {
    fn default() -> Self {
        Self {
            k: 3,
            min_distance: 3,
            max_distance: 6,
            absolute_min_cluster_score: 15,
            extra_cluster_score: -10,
            match_score: 13,
            mismatch_score: -7,
            offset_shift_score: -3,
            slot_count: 4,
            max_clusters: 3,
            max_cluster_indels: 3,
            absolute_min_score: 15,
            relative_min_score: 0.0,
        }
    }
}

/// Full parameter set of the k-mer aligner.
///
/// The default preset targets short nucleotide references (e.g. gene segments) and queries of a
/// few hundred bases.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
pub struct Params {
    pub mapper: MapperParams,
    // Refinement
    pub floating_left_bound: bool,
    pub floating_right_bound: bool,
    /// Early termination of floating flank extensions, disabled by default.
    pub stop_penalty: Option<i32>,
    pub scoring: AffineScoring,
    // Filtering
    pub absolute_min_score: i32,
    pub relative_min_score: f64,
    pub max_hits: usize,
}

impl Params {
    pub fn validate(&self) -> Result<()> {
        self.mapper.validate()?;
        self.scoring.matrix().uniform_match().ok_or_else(|| {
            eyre!("Hit refinement requires a scoring with a uniform match score")
        })?;
        ensure!(
            (0.0..=1.0).contains(&self.relative_min_score),
            "Relative minimal score must be within [0, 1], got {}",
            self.relative_min_score
        );
        ensure!(self.max_hits > 0, "At least one hit must be reported");
        Ok(())
    }

    pub fn alphabet(&self) -> Alphabet {
        self.scoring.matrix().alphabet()
    }
}

impl Default for Params {
    fn default() -> Self {
        Self {
            mapper: MapperParams::default(),
            floating_left_bound: true,
            floating_right_bound: true,
            stop_penalty: None,
            scoring: AffineScoring::nucleotide_seeded(),
            absolute_min_score: 70,
            relative_min_score: 0.8,
            max_hits: 5,
        }
    }
}
