//! Field value types

mod money;
mod tags;

pub use money::*;
pub use tags::*;
