use std::ops::Range;

use eyre::{ensure, eyre, Result};

pub use builder::MutationsBuilder;
pub use mutation::Mutation;

use crate::seq::Sequence;

mod builder;
mod mutation;

/// Edit script transforming a reference window into a query window. Mutations are ordered by
/// position; at most one substitution/deletion per reference position, and insertions at a
/// position precede the substitution/deletion at the same position.
#[derive(Clone, Eq, PartialEq, Debug, Hash, Default)]
pub struct Mutations {
    mutations: Vec<Mutation>,
}

impl Mutations {
    pub fn new(mutations: Vec<Mutation>) -> Result<Self> {
        for (ind, pair) in mutations.windows(2).enumerate() {
            let (prev, next) = (pair[0], pair[1]);
            let ordered = if !prev.is_insertion() && !next.is_insertion() {
                prev.pos() < next.pos()
            } else {
                prev.key() <= next.key()
            };
            ensure!(
                ordered,
                "Mutations {:?} and {:?} (indices {} and {}) violate the edit script ordering",
                prev,
                next,
                ind,
                ind + 1
            );
        }
        Ok(Self { mutations })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.mutations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mutations.is_empty()
    }

    pub fn as_slice(&self) -> &[Mutation] {
        &self.mutations
    }

    pub fn iter(&self) -> impl Iterator<Item = &Mutation> {
        self.mutations.iter()
    }

    pub fn substitutions(&self) -> usize {
        self.mutations.iter().filter(|x| x.is_substitution()).count()
    }

    pub fn deletions(&self) -> usize {
        self.mutations.iter().filter(|x| x.is_deletion()).count()
    }

    pub fn insertions(&self) -> usize {
        self.mutations.iter().filter(|x| x.is_insertion()).count()
    }

    /// Concatenate edit scripts of adjacent (left to right) alignment blocks.
    pub fn concat<'a>(parts: impl IntoIterator<Item = &'a Mutations>) -> Result<Self> {
        let mut builder = MutationsBuilder::new();
        for part in parts {
            builder.extend(part);
        }
        builder.finish()
    }

    /// Length of the mutated window given the length of the original reference window.
    pub fn mutated_len(&self, window: usize) -> usize {
        window + self.insertions() - self.deletions()
    }

    /// Apply the edit script to the reference window and return the resulting sequence. Every
    /// mutation must lie inside the window and reference the actual code at its position.
    pub fn apply(&self, reference: &Sequence, range: Range<usize>) -> Result<Sequence> {
        let window = reference.window(&range)?;

        let mut result = Vec::with_capacity(window.len() + self.insertions());
        let mut cursor = range.start;
        for mutation in &self.mutations {
            let pos = mutation.pos();
            let limit = if mutation.is_insertion() {
                range.end
            } else {
                range.end.saturating_sub(1)
            };
            if pos < cursor || pos > limit || (!mutation.is_insertion() && range.is_empty()) {
                return Err(eyre!(
                    "Mutation {:?} is outside of the reference window {:?}",
                    mutation,
                    range
                ));
            }
            result.extend_from_slice(&reference.codes()[cursor..pos]);
            cursor = pos;

            match *mutation {
                Mutation::Substitution { from, to, .. } => {
                    ensure!(
                        reference.code_at(pos) == from,
                        "Mutation {:?} doesn't match the reference code {}",
                        mutation,
                        reference.code_at(pos)
                    );
                    result.push(to);
                    cursor += 1;
                }
                Mutation::Deletion { from, .. } => {
                    ensure!(
                        reference.code_at(pos) == from,
                        "Mutation {:?} doesn't match the reference code {}",
                        mutation,
                        reference.code_at(pos)
                    );
                    cursor += 1;
                }
                Mutation::Insertion { to, .. } => result.push(to),
            }
        }
        result.extend_from_slice(&reference.codes()[cursor..range.end]);

        Sequence::from_codes(reference.alphabet(), result)
    }
}

impl<'a> IntoIterator for &'a Mutations {
    type Item = &'a Mutation;
    type IntoIter = std::slice::Iter<'a, Mutation>;

    fn into_iter(self) -> Self::IntoIter {
        self.mutations.iter()
    }
}
