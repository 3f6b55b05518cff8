//! Stacking and gravity collapse.

use crate::core::cell::Cell;
use crate::core::grid::Grid;

impl<const LAYER: usize, const PART: usize> Grid<LAYER, PART> {
    /// Stack a connected single-layer piece onto this grid.
    ///
    /// The piece descends one layer at a time while it has not reached the
    /// bottom and no piece cell sits directly above an occupied cell, then the
    /// settled piece is unioned in. If any piece cell starts on an occupied
    /// cell the whole piece is discarded (no partial placement): this is the
    /// layer-capacity rule for pieces aligned to the top layer.
    ///
    /// Stacking the empty piece is the identity.
    pub fn stack(self, piece: Self) -> Self {
        let empty = self.cells_of(Cell::Empty);
        let mut v = piece.raw();
        if v == 0 {
            return self;
        }
        if v & !empty != 0 {
            return self;
        }
        while v & Self::BOTTOM_MASK == 0 && (v >> (2 * PART)) & !empty == 0 {
            v >>= 2 * PART;
        }
        Self::from_raw(self.raw() | v)
    }

    /// Apply gravity.
    ///
    /// Supported cells stay in place. Unsupported Crystals shatter instead of
    /// falling. Unsupported Pins fall one by one; unsupported Filled cells
    /// fall as maximal horizontally-connected runs within their layer
    /// (wrapping across part 0). Falling groups are dropped onto the
    /// supported base in increasing layer order. Idempotent.
    pub fn collapse(self) -> Self {
        let supported = self.supported();
        let mut settled = Self::from_raw(self.raw() & supported);
        // Falling crystals break rather than fall.
        let mut falling = self.raw() & !supported & !self.cells_of(Cell::Crystal);

        for layer in 0..LAYER {
            let mut part = 0;
            while part < PART {
                match Self::from_raw(falling).get(layer, part) {
                    Cell::Pin => {
                        // Pins are never connected to anything.
                        let piece = Self::take(&mut falling, layer, part);
                        settled = settled.stack(Self::from_raw(piece));
                    }
                    Cell::Filled => {
                        let mut group = Self::take(&mut falling, layer, part);
                        // A run starting at part 0 may wrap backwards.
                        if part == 0 {
                            let mut i = PART - 1;
                            while i > 0 && Self::from_raw(falling).get(layer, i) == Cell::Filled {
                                group |= Self::take(&mut falling, layer, i);
                                i -= 1;
                            }
                        }
                        while part + 1 < PART
                            && Self::from_raw(falling).get(layer, part + 1) == Cell::Filled
                        {
                            part += 1;
                            group |= Self::take(&mut falling, layer, part);
                        }
                        settled = settled.stack(Self::from_raw(group));
                    }
                    _ => {}
                }
                part += 1;
            }
        }
        settled
    }

    /// Remove the cell at (layer, part) from `bits` and return its two bits
    /// in place.
    fn take(bits: &mut u64, layer: usize, part: usize) -> u64 {
        let mask = 0b11u64 << (2 * (layer * PART + part));
        let t = *bits & mask;
        *bits &= !mask;
        t
    }
}
