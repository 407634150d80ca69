#[cfg(feature = "bitcode")]
use bitcode::{Decode, Encode};
use derive_getters::Getters;
use eyre::{ensure, Result};

use super::matrix::SubstitutionMatrix;
use super::{Gaps, Scheme};

/// Substitution matrix with gap-open and gap-extend penalties. A gap of length `n` costs
/// `open + (n - 1) * extend`.
#[derive(Clone, PartialEq, Eq, Debug, Hash, Getters)]
#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
pub struct AffineScoring {
    matrix: SubstitutionMatrix,
    gap_open: i32,
    gap_extend: i32,
}

impl AffineScoring {
    pub fn new(matrix: SubstitutionMatrix, gap_open: i32, gap_extend: i32) -> Result<Self> {
        ensure!(
            gap_open < 0 && gap_open <= gap_extend && gap_extend <= 0,
            "Affine gap penalties must satisfy open < 0 and open <= extend <= 0, got open={}, extend={}",
            gap_open,
            gap_extend
        );
        Ok(Self {
            matrix,
            gap_open,
            gap_extend,
        })
    }

    /// Default nucleotide scoring: match 5, mismatch -4, gap open -10, gap extend -1.
    pub fn nucleotide() -> Self {
        Self {
            matrix: SubstitutionMatrix::symmetric(
                seqalign_core_rs::Alphabet::Nucleotide,
                5,
                -4,
            ),
            gap_open: -10,
            gap_extend: -1,
        }
    }

    /// Nucleotide scoring for extending k-mer seeds: match 10, mismatch -7, gap open -11, gap
    /// extend -2.
    pub fn nucleotide_seeded() -> Self {
        Self {
            matrix: SubstitutionMatrix::symmetric(
                seqalign_core_rs::Alphabet::Nucleotide,
                10,
                -7,
            ),
            gap_open: -11,
            gap_extend: -2,
        }
    }
}

impl Scheme for AffineScoring {
    #[inline(always)]
    fn matrix(&self) -> &SubstitutionMatrix {
        &self.matrix
    }

    #[inline(always)]
    fn gaps(&self) -> Gaps {
        Gaps::Affine {
            open: self.gap_open,
            extend: self.gap_extend,
        }
    }
}
