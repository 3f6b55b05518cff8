//! Grid dimensions used by the command-line tools.
//!
//! The dimensions are type-level constants of [`Grid`]; this module fixes the
//! configuration the binaries (and the persisted store format they produce)
//! are built for. Changing them changes the store format, so a store file is
//! only meaningful to a build with the same configuration.

use crate::core::grid::Grid;

/// Number of layers in the default configuration.
pub const LAYER: usize = 4;

/// Number of angular parts per layer in the default configuration.
pub const PART: usize = 4;

/// The grid type the command-line tools operate on.
pub type Shape = Grid<LAYER, PART>;
