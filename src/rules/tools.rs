//! The cutter, the pin pusher and the crystal generator.

use crate::core::bits::repeat;
use crate::core::cell::Cell;
use crate::core::grid::Grid;

impl<const LAYER: usize, const PART: usize> Grid<LAYER, PART> {
    /// Shatter every Crystal covered by `mask` plus every Crystal transitively
    /// adjacent to one (horizontally with wrap, above, below).
    pub fn break_crystals(self, mask: u64) -> Self {
        let mut v = self.raw();
        let mut stack: Vec<usize> = Vec::new();

        for layer in 0..LAYER {
            for part in 0..PART {
                let idx = layer * PART + part;
                if mask & (0b11u64 << (idx * 2)) != 0 {
                    Self::try_break(&mut v, &mut stack, layer, part);
                }
            }
        }

        while let Some(idx) = stack.pop() {
            let layer = idx / PART;
            let part = idx % PART;
            Self::try_break(&mut v, &mut stack, layer, (part + 1) % PART);
            Self::try_break(&mut v, &mut stack, layer, (part + PART - 1) % PART);
            if layer > 0 {
                Self::try_break(&mut v, &mut stack, layer - 1, part);
            }
            if layer + 1 < LAYER {
                Self::try_break(&mut v, &mut stack, layer + 1, part);
            }
        }

        Self::from_raw(v)
    }

    fn try_break(bits: &mut u64, stack: &mut Vec<usize>, layer: usize, part: usize) {
        if Self::from_raw(*bits).get(layer, part) != Cell::Crystal {
            return;
        }
        let idx = layer * PART + part;
        *bits &= !(0b11u64 << (idx * 2));
        stack.push(idx);
    }

    /// Cut the grid at the fixed west/east boundary and return the west half.
    ///
    /// Every Crystal in the east half shatters, together with all Crystals
    /// connected to one (the flood is not confined to the east half); the east
    /// half is then discarded and the remainder collapses.
    pub fn cut(self) -> Self {
        let broken = self.break_crystals(!Self::WEST_MASK & Self::FULL_MASK);
        broken.masked(Self::WEST_MASK).collapse()
    }

    /// Apply the pin pusher.
    ///
    /// Columns whose bottom cell is occupied receive a Pin. Crystals on the
    /// top layer shatter (with their connected Crystals), everything shifts up
    /// one layer (the old top layer is lost), the Pins are inserted at the
    /// bottom and gravity is applied.
    pub fn pin_push(self) -> Self {
        let pins = !self.cells_of(Cell::Empty) & repeat(Cell::Pin.code(), 2, PART);
        let broken = self.break_crystals(Self::TOP_MASK);
        Self::from_raw(((broken.raw() << (2 * PART)) & Self::FULL_MASK) | pins).collapse()
    }

    /// Apply the crystal generator.
    ///
    /// Let `h` be the number of contiguous non-empty layers starting at the
    /// bottom (0 if the bottom layer is empty). Every Empty or Pin cell
    /// strictly below layer `h` turns into Crystal; everything at or above
    /// layer `h` is untouched.
    pub fn crystal_grow(self) -> Self {
        let mut h = 0;
        while h < LAYER && self.raw() & (Self::BOTTOM_MASK << (2 * PART * h)) != 0 {
            h += 1;
        }
        let grown = (self.cells_of(Cell::Empty) | self.cells_of(Cell::Pin)) & repeat(0b11, 2, h * PART);
        Self::from_raw((grown & repeat(Cell::Crystal.code(), 2, Self::CELLS)) | (self.raw() & !grown))
    }
}
