//! Typed models

mod entity;
mod record;
pub mod types;
mod value;

pub use entity::*;
pub use record::*;
pub use value::*;
