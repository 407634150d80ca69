use std::fmt::Display;

#[cfg(feature = "bitcode")]
use bitcode::{Decode, Encode};

const NUCLEOTIDES: &[u8] = b"ACGT";
const AMINO_ACIDS: &[u8] = b"ACDEFGHIKLMNPQRSTVWY*";

/// Closed set of symbol alphabets supported by the aligners. Each symbol is represented by a small
/// integer code in `[0, size)`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
pub enum Alphabet {
    /// Nucleotides without wildcards: A, C, G, T.
    Nucleotide,
    /// The 20 standard amino acids followed by the stop codon symbol `*`.
    AminoAcid,
}

impl Alphabet {
    /// Symbols of the alphabet ordered by their codes.
    pub fn symbols(&self) -> &'static [u8] {
        match self {
            Alphabet::Nucleotide => NUCLEOTIDES,
            Alphabet::AminoAcid => AMINO_ACIDS,
        }
    }

    /// Number of codes in the alphabet.
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.symbols().len()
    }

    /// Number of bits required to store a single code.
    pub fn bits(&self) -> u32 {
        usize::BITS - (self.size() - 1).leading_zeros()
    }

    /// Symbol for the given code or `None` if the code is outside of the alphabet.
    pub fn symbol(&self, code: u8) -> Option<u8> {
        self.symbols().get(code as usize).copied()
    }

    /// Code for the given symbol (case-insensitive) or `None` if the symbol is unknown.
    pub fn code(&self, symbol: u8) -> Option<u8> {
        let symbol = symbol.to_ascii_uppercase();
        self.symbols()
            .iter()
            .position(|x| *x == symbol)
            .map(|x| x as u8)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Alphabet::Nucleotide => "nucleotide",
            Alphabet::AminoAcid => "amino acid",
        }
    }
}

impl Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
