//! Pages of the demo app.

mod gallery;

pub use gallery::*;
