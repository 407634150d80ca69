#[cfg(feature = "bitcode")]
use bitcode::{Decode, Encode};
use derive_more::From;

pub use affine::AffineScoring;
pub use linear::LinearScoring;
pub use matrix::SubstitutionMatrix;
pub use score::calculate_score;

mod affine;
mod linear;
mod matrix;
mod score;

/// Gap model of a scoring scheme.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum Gaps {
    Linear(i32),
    Affine { open: i32, extend: i32 },
}

/// Anything that can score an alignment. Kernels are instantiated per scheme, so `gaps` is
/// resolved at compile time for the concrete scoring types.
pub trait Scheme {
    fn matrix(&self) -> &SubstitutionMatrix;

    fn gaps(&self) -> Gaps;

    #[inline(always)]
    fn score(&self, from: u8, to: u8) -> i32 {
        self.matrix().score(from, to)
    }
}

/// Scoring chosen at runtime, e.g. from the aligner parameters.
#[derive(Clone, PartialEq, Eq, Debug, Hash, From)]
#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
pub enum Scoring {
    Linear(LinearScoring),
    Affine(AffineScoring),
}

impl Scheme for Scoring {
    #[inline(always)]
    fn matrix(&self) -> &SubstitutionMatrix {
        match self {
            Scoring::Linear(x) => x.matrix(),
            Scoring::Affine(x) => x.matrix(),
        }
    }

    #[inline(always)]
    fn gaps(&self) -> Gaps {
        match self {
            Scoring::Linear(x) => x.gaps(),
            Scoring::Affine(x) => x.gaps(),
        }
    }
}
