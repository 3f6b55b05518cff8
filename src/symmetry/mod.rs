//! Symmetry orbits and canonical representatives.
//!
//! Two grids are the same shape if one is a rotation or mirror image of the
//! other; the search and the query both deduplicate through the minimal
//! element of that orbit. Halves have a smaller group: only the mirror that
//! maps the west half onto itself.

use crate::core::grid::Grid;

impl<const LAYER: usize, const PART: usize> Grid<LAYER, PART> {
    /// The full symmetry orbit: every rotation and every rotated mirror
    /// image, ascending and deduplicated.
    pub fn equivalent_shapes(self) -> Vec<Self> {
        let mut orbit = Vec::with_capacity(2 * PART);
        for angle in 0..PART {
            let r = self.rotate(angle);
            orbit.push(r);
            orbit.push(r.flip());
        }
        orbit.sort_unstable();
        orbit.dedup();
        orbit
    }

    /// Minimal element of [`equivalent_shapes`](Self::equivalent_shapes),
    /// computed without allocating.
    pub fn canonical(self) -> Self {
        let mut min = self;
        for angle in 0..PART {
            let r = self.rotate(angle);
            if r < min {
                min = r;
            }
            let f = r.flip();
            if f < min {
                min = f;
            }
        }
        min
    }

    /// The orbit of a west-half pattern: the pattern and its mirror rotated
    /// back into the west position. Ascending; one element when the pattern
    /// is its own mirror image.
    pub fn equivalent_halves(self) -> Vec<Self> {
        let mirrored = self.flip().rotate(PART / 2);
        if mirrored < self {
            vec![mirrored, self]
        } else if self < mirrored {
            vec![self, mirrored]
        } else {
            vec![self]
        }
    }

    /// Minimal element of [`equivalent_halves`](Self::equivalent_halves),
    /// computed without allocating.
    pub fn canonical_half(self) -> Self {
        let mirrored = self.flip().rotate(PART / 2);
        if mirrored < self {
            mirrored
        } else {
            self
        }
    }
}
