//! Error types

mod field;
mod store;

pub use field::*;
pub use store::*;
