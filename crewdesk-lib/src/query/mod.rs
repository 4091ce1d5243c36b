//! Client-side query layer: filter criteria and sort specs

mod filter;
mod order;

pub use filter::*;
pub use order::*;
