use eyre::{ensure, eyre, Result};

use seqalign_core_rs::Alphabet;

/// Occurrence of a k-mer: the reference id and the k-mer start in the reference coordinates.
/// Both values are limited to `u32::MAX`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct KmerRecord {
    reference: u32,
    position: u32,
}

impl KmerRecord {
    pub fn new(reference: usize, position: usize) -> Result<Self> {
        let reference = u32::try_from(reference).map_err(|_| {
            eyre!("Reference id {reference} exceeds the index capacity ({})", u32::MAX)
        })?;
        let position = u32::try_from(position).map_err(|_| {
            eyre!("Reference position {position} exceeds the index capacity ({})", u32::MAX)
        })?;
        Ok(Self {
            reference,
            position,
        })
    }

    pub fn reference(&self) -> usize {
        self.reference as usize
    }

    pub fn position(&self) -> usize {
        self.position as usize
    }
}

/// Packs `k` consecutive codes into a single `u64` key, first code in the highest bits.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) struct KmerCoder {
    k: usize,
    bits: u32,
    mask: u64,
    tail: u64,
}

impl KmerCoder {
    pub fn new(alphabet: Alphabet, k: usize) -> Result<Self> {
        let bits = alphabet.bits();
        ensure!(
            k > 0 && k * bits as usize <= u64::BITS as usize,
            "K-mers of length {k} over the {alphabet} alphabet don't fit into 64 bits"
        );
        let total = k as u32 * bits;
        let mask = if total == u64::BITS {
            u64::MAX
        } else {
            (1 << total) - 1
        };
        Ok(Self {
            k,
            bits,
            mask,
            tail: (1 << (total - bits)) - 1,
        })
    }

    pub fn k(&self) -> usize {
        self.k
    }

    #[inline(always)]
    fn push(&self, kmer: u64, code: u8) -> u64 {
        ((kmer << self.bits) | code as u64) & self.mask
    }

    /// Key of the k-mer starting at the beginning of `codes`.
    pub fn encode(&self, codes: &[u8]) -> u64 {
        codes[..self.k]
            .iter()
            .fold(0, |kmer, code| self.push(kmer, *code))
    }

    /// True if all codes of the k-mer are equal. Single-code k-mers never count.
    #[inline(always)]
    pub fn is_homopolymer(&self, kmer: u64) -> bool {
        self.k > 1 && (kmer ^ (kmer >> self.bits)) & self.tail == 0
    }

    /// Keys of all k-mers in `codes` together with their start positions.
    pub fn kmers<'a>(&'a self, codes: &'a [u8]) -> impl Iterator<Item = (usize, u64)> + 'a {
        let mut kmer = 0;
        codes.iter().enumerate().filter_map(move |(ind, code)| {
            kmer = self.push(kmer, *code);
            (ind + 1 >= self.k).then(|| (ind + 1 - self.k, kmer))
        })
    }
}
