pub use alignment::{Alignment, Op, Step};
pub use cache::{MatrixCache, ScratchBuffer};
pub use kernel::Bounds;
pub use window::Window;

pub mod alignment;
pub mod banded;
mod cache;
pub mod dense;
mod kernel;
mod matrix;
pub mod scoring;
mod trace;
mod window;
