pub use aligner::{AlignmentResult, Hit, KAligner, KAlignerBuilder, LazyResult, Worker};
pub use params::{MapperParams, Params};

mod aligner;
pub mod mapper;
mod params;
mod threads;
mod threshold;
