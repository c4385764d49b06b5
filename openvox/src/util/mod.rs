//! Various math and I/O utilities.

mod rand;
mod bb;
mod io;

pub use rand::JavaRandom;
pub use bb::BoundingBox;
pub use io::{ReadJavaExt, WriteJavaExt};
