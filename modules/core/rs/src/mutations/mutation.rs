/// Single edit of a reference sequence. Positions are given in reference coordinates.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Mutation {
    /// Reference code `from` at `pos` is replaced by `to`.
    Substitution { pos: usize, from: u8, to: u8 },
    /// Reference code `from` at `pos` is removed.
    Deletion { pos: usize, from: u8 },
    /// Code `to` is inserted right before the reference position `pos`.
    Insertion { pos: usize, to: u8 },
}

impl Mutation {
    #[inline(always)]
    pub fn pos(&self) -> usize {
        match self {
            Mutation::Substitution { pos, .. }
            | Mutation::Deletion { pos, .. }
            | Mutation::Insertion { pos, .. } => *pos,
        }
    }

    pub fn is_substitution(&self) -> bool {
        matches!(self, Mutation::Substitution { .. })
    }

    pub fn is_deletion(&self) -> bool {
        matches!(self, Mutation::Deletion { .. })
    }

    pub fn is_insertion(&self) -> bool {
        matches!(self, Mutation::Insertion { .. })
    }

    /// Ordering key of the mutation inside an edit script. Insertions at `pos` go before the
    /// substitution/deletion of the reference code at `pos`.
    pub(crate) fn key(&self) -> (usize, bool) {
        (self.pos(), !self.is_insertion())
    }
}
