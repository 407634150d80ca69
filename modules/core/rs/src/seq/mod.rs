pub use alphabet::Alphabet;
pub use sequence::Sequence;

mod alphabet;
mod sequence;
