pub use alignable::{Alignable, Reversed};
pub use mutations::{Mutation, Mutations, MutationsBuilder};
pub use seq::{Alphabet, Sequence};

mod alignable;
pub mod mutations;
pub mod num;
pub mod seq;
