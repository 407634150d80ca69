pub use builder::KAlignerBuilder;
pub use kaligner::KAligner;
pub use result::{AlignmentResult, Hit, LazyResult};
pub use worker::Worker;

mod builder;
mod kaligner;
mod refine;
mod result;
mod worker;
