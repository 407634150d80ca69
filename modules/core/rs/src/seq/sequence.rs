use std::fmt::Display;
use std::ops::Range;

use derive_getters::Dissolve;
use eyre::{ensure, eyre, Result};

use super::alphabet::Alphabet;
use crate::alignable::Alignable;

/// Immutable sequence of alphabet codes.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Dissolve)]
pub struct Sequence {
    alphabet: Alphabet,
    codes: Vec<u8>,
}

impl Sequence {
    /// Encode a textual sequence, e.g. `b"ACGT"`. Symbols are case-insensitive.
    pub fn encode(alphabet: Alphabet, text: &[u8]) -> Result<Self> {
        let codes = text
            .iter()
            .enumerate()
            .map(|(pos, symbol)| {
                alphabet.code(*symbol).ok_or_else(|| {
                    eyre!(
                        "Symbol {:?} at position {pos} is not a part of the {alphabet} alphabet",
                        *symbol as char
                    )
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { alphabet, codes })
    }

    pub fn from_codes(alphabet: Alphabet, codes: Vec<u8>) -> Result<Self> {
        if let Some(pos) = codes.iter().position(|x| *x as usize >= alphabet.size()) {
            return Err(eyre!(
                "Code {} at position {pos} is outside of the {alphabet} alphabet",
                codes[pos]
            ));
        }
        Ok(Self { alphabet, codes })
    }

    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    pub fn codes(&self) -> &[u8] {
        &self.codes
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    #[inline(always)]
    pub fn code_at(&self, pos: usize) -> u8 {
        self.codes[pos]
    }

    /// Codes inside the window after checking that the window lies within the sequence.
    pub fn window(&self, range: &Range<usize>) -> Result<&[u8]> {
        ensure!(
            range.start <= range.end && range.end <= self.codes.len(),
            "Window {:?} is outside of the sequence of length {}",
            range,
            self.codes.len()
        );
        Ok(&self.codes[range.start..range.end])
    }

    /// Copy of the sequence window.
    pub fn slice(&self, range: Range<usize>) -> Result<Self> {
        let codes = self.window(&range)?.to_vec();
        Ok(Self {
            alphabet: self.alphabet,
            codes,
        })
    }
}

impl Alignable for Sequence {
    type Symbol = u8;

    #[inline(always)]
    fn len(&self) -> usize {
        self.codes.len()
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        &self.codes[pos]
    }
}

impl Display for Sequence {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let text: String = self
            .codes
            .iter()
            .map(|x| self.alphabet.symbol(*x).unwrap_or(b'?') as char)
            .collect();
        write!(f, "{text}")
    }
}
