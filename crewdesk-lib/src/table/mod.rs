//! Table core: derived views and row selection

mod selection;
mod view;

pub use selection::*;
pub use view::*;
