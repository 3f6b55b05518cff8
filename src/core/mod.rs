//! The packed grid value type and its cell states.

pub mod bits;
pub mod cell;
pub mod grid;
