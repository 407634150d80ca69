#[cfg(feature = "bitcode")]
use bitcode::{Decode, Encode};
use eyre::{ensure, Result};

use seqalign_core_rs::Alphabet;

/// Square table of substitution scores indexed by pairs of alphabet codes.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
pub struct SubstitutionMatrix {
    alphabet: Alphabet,
    size: usize,
    scores: Vec<i32>,
}

impl SubstitutionMatrix {
    /// Row-major `size x size` table, where `size` is the alphabet size.
    pub fn new(alphabet: Alphabet, scores: Vec<i32>) -> Result<Self> {
        let size = alphabet.size();
        ensure!(
            scores.len() == size * size,
            "Substitution matrix for the {} alphabet must have {} entries, got {}",
            alphabet,
            size * size,
            scores.len()
        );
        Ok(Self {
            alphabet,
            size,
            scores,
        })
    }

    /// Matrix with `matched` on the diagonal and `mismatched` everywhere else.
    pub fn symmetric(alphabet: Alphabet, matched: i32, mismatched: i32) -> Self {
        let size = alphabet.size();
        let mut scores = vec![mismatched; size * size];
        for code in 0..size {
            scores[code * size + code] = matched;
        }
        Self {
            alphabet,
            size,
            scores,
        }
    }

    #[inline(always)]
    pub fn score(&self, from: u8, to: u8) -> i32 {
        self.scores[from as usize * self.size + to as usize]
    }

    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// The shared diagonal value, if all matches score the same.
    pub fn uniform_match(&self) -> Option<i32> {
        let first = self.scores[0];
        (1..self.size)
            .all(|code| self.scores[code * self.size + code] == first)
            .then_some(first)
    }

    /// Reward of a single match. Falls back to the score of the first code when the diagonal
    /// isn't uniform.
    pub fn match_reward(&self) -> i32 {
        self.scores[0]
    }
}
