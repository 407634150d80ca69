#[cfg(feature = "bitcode")]
use bitcode::{Decode, Encode};
use derive_getters::Getters;
use eyre::{ensure, Result};

use super::matrix::SubstitutionMatrix;
use super::{Gaps, Scheme};

/// Substitution matrix with a constant penalty per gapped residue.
#[derive(Clone, PartialEq, Eq, Debug, Hash, Getters)]
#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
pub struct LinearScoring {
    matrix: SubstitutionMatrix,
    gap: i32,
}

impl LinearScoring {
    pub fn new(matrix: SubstitutionMatrix, gap: i32) -> Result<Self> {
        ensure!(gap < 0, "Gap penalty must be negative, got {}", gap);
        Ok(Self { matrix, gap })
    }

    /// Default nucleotide scoring: match 5, mismatch -4, gap -5.
    pub fn nucleotide() -> Self {
        Self {
            matrix: SubstitutionMatrix::symmetric(
                seqalign_core_rs::Alphabet::Nucleotide,
                5,
                -4,
            ),
            gap: -5,
        }
    }
}

impl Scheme for LinearScoring {
    #[inline(always)]
    fn matrix(&self) -> &SubstitutionMatrix {
        &self.matrix
    }

    #[inline(always)]
    fn gaps(&self) -> Gaps {
        Gaps::Linear(self.gap)
    }
}
