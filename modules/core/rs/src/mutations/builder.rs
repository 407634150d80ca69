use super::{Mutation, Mutations};
use eyre::Result;

/// Accumulates mutations produced by a traceback. Tracebacks usually walk from the end of the
/// alignment to its start, so the appended block is reversed before the script is finalized.
#[derive(Clone, Debug, Default)]
pub struct MutationsBuilder {
    mutations: Vec<Mutation>,
}

impl MutationsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            mutations: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.mutations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mutations.is_empty()
    }

    pub fn append(&mut self, mutation: Mutation) -> &mut Self {
        self.mutations.push(mutation);
        self
    }

    pub fn append_substitution(&mut self, pos: usize, from: u8, to: u8) -> &mut Self {
        self.append(Mutation::Substitution { pos, from, to })
    }

    pub fn append_deletion(&mut self, pos: usize, from: u8) -> &mut Self {
        self.append(Mutation::Deletion { pos, from })
    }

    pub fn append_insertion(&mut self, pos: usize, to: u8) -> &mut Self {
        self.append(Mutation::Insertion { pos, to })
    }

    pub fn extend(&mut self, mutations: &Mutations) -> &mut Self {
        self.mutations.extend_from_slice(mutations.as_slice());
        self
    }

    /// Reverse all mutations appended after the `mark` (a previously observed `len()`).
    pub fn reverse_from(&mut self, mark: usize) -> &mut Self {
        self.mutations[mark..].reverse();
        self
    }

    pub fn reverse(&mut self) -> &mut Self {
        self.reverse_from(0)
    }

    pub fn clear(&mut self) {
        self.mutations.clear();
    }

    /// Validate the ordering and produce the final edit script.
    pub fn finish(self) -> Result<Mutations> {
        Mutations::new(self.mutations)
    }
}
