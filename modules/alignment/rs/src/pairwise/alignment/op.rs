use seqalign_core_rs::num::PrimUInt;

/// Column of a pairwise alignment, using the extended CIGAR alphabet.
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Op {
    /// Identical residues (=)
    Match,
    /// Substituted residue (X)
    Mismatch,
    /// Residue of the first sequence missing in the second one (D)
    Deletion,
    /// Residue of the second sequence missing in the first one (I)
    Insertion,
}

impl Op {
    /// Returns `true` if the operation is represented by a diagonal movement in the alignment matrix.
    pub fn is_diagonal(&self) -> bool {
        matches!(self, Op::Match | Op::Mismatch)
    }

    pub fn symbol(&self) -> char {
        match self {
            Op::Match => '=',
            Op::Mismatch => 'X',
            Op::Deletion => 'D',
            Op::Insertion => 'I',
        }
    }

    /// Advances the sequence cursors by `len` columns of this operation.
    pub fn apply<Len, Seq1Idx, Seq2Idx>(&self, seq1: &mut Seq1Idx, seq2: &mut Seq2Idx, len: Len)
    where
        Len: PrimUInt + Into<Seq1Idx> + Into<Seq2Idx>,
        Seq1Idx: PrimUInt,
        Seq2Idx: PrimUInt,
    {
        match self {
            Op::Deletion => *seq1 = *seq1 + len.into(),
            Op::Insertion => *seq2 = *seq2 + len.into(),
            Op::Match | Op::Mismatch => {
                *seq1 = *seq1 + len.into();
                *seq2 = *seq2 + len.into();
            }
        };
    }
}

impl TryFrom<char> for Op {
    type Error = ();

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '=' => Ok(Op::Match),
            'X' => Ok(Op::Mismatch),
            'D' => Ok(Op::Deletion),
            'I' => Ok(Op::Insertion),
            _ => Err(()),
        }
    }
}
