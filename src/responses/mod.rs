//! Response shapes mirroring CompreFace's JSON. Data only.

mod collection;
mod face;
mod results;

pub use collection::*;
pub use face::*;
pub use results::*;
