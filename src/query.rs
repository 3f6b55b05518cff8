//! Reachability queries against a precomputed result.

use rustc_hash::FxHashSet;

use crate::core::grid::Grid;
use crate::store::ShapeSet;

/// Read-only reachability oracle over a loaded [`ShapeSet`].
///
/// A shape is creatable either because some rotation splits it into two
/// catalogued halves (its construction can end with a half swap), or because
/// it is in the explicit category-2 array. The halves array is mirrored into
/// a hash set at construction; the category-2 array is binary-searched as is.
pub struct CreatabilityQuery<const LAYER: usize, const PART: usize> {
    set: ShapeSet<LAYER, PART>,
    halves: FxHashSet<Grid<LAYER, PART>>,
}

impl<const LAYER: usize, const PART: usize> CreatabilityQuery<LAYER, PART> {
    pub fn new(set: ShapeSet<LAYER, PART>) -> Self {
        let halves = set.halves.iter().copied().collect();
        Self { set, halves }
    }

    /// Whether the shape is reachable from the empty grid.
    pub fn is_creatable(&self, shape: Grid<LAYER, PART>) -> bool {
        let west = Grid::<LAYER, PART>::WEST_MASK;
        for angle in 0..PART / 2 {
            let left = shape.rotate(angle).masked(west).canonical_half();
            if !self.halves.contains(&left) {
                continue;
            }
            let right = shape.rotate(angle + PART / 2).masked(west).canonical_half();
            if self.halves.contains(&right) {
                return true;
            }
        }
        self.set.shapes.binary_search(&shape.canonical()).is_ok()
    }

    pub fn shape_set(&self) -> &ShapeSet<LAYER, PART> {
        &self.set
    }
}
