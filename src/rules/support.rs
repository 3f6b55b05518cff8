//! Grounded support computation.

use crate::core::cell::Cell;
use crate::core::grid::Grid;

impl<const LAYER: usize, const PART: usize> Grid<LAYER, PART> {
    /// Bitmask of every supported cell.
    ///
    /// Support is graph reachability seeded from the non-empty cells of the
    /// bottom layer:
    /// - a supported cell supports the cell directly above it, whatever its
    ///   type;
    /// - a supported Filled or Crystal cell supports horizontally adjacent
    ///   (wrapping) Filled or Crystal cells; Pins neither give nor receive
    ///   horizontal support;
    /// - a supported Crystal supports a Crystal directly below it.
    ///
    /// A group of cells holding each other up without a path to the bottom
    /// layer is *not* supported. The live game accepts such circular
    /// arrangements (SPZ2-3399); that is a game defect, and this
    /// implementation keeps the strict grounding requirement instead.
    pub fn supported(self) -> u64 {
        let mut seen: u64 = 0;
        let mut stack: Vec<usize> = Vec::new();

        for part in 0..PART {
            self.mark_supported(&mut seen, &mut stack, 0, part, true, true);
        }

        while let Some(idx) = stack.pop() {
            let layer = idx / PART;
            let part = idx % PART;
            let cell = self.get(layer, part);

            // Directly above a supported cell.
            if layer + 1 < LAYER {
                self.mark_supported(&mut seen, &mut stack, layer + 1, part, true, true);
            }

            // Horizontally connected to a supported part.
            if matches!(cell, Cell::Filled | Cell::Crystal) {
                self.mark_supported(&mut seen, &mut stack, layer, (part + 1) % PART, false, true);
                self.mark_supported(&mut seen, &mut stack, layer, (part + PART - 1) % PART, false, true);
            }

            // A crystal hanging from a supported crystal.
            if cell == Cell::Crystal && layer > 0 {
                self.mark_supported(&mut seen, &mut stack, layer - 1, part, false, false);
            }
        }

        seen
    }

    fn mark_supported(
        self,
        seen: &mut u64,
        stack: &mut Vec<usize>,
        layer: usize,
        part: usize,
        allow_pin: bool,
        allow_filled: bool,
    ) {
        match self.get(layer, part) {
            Cell::Empty => return,
            Cell::Pin if !allow_pin => return,
            Cell::Filled if !allow_filled => return,
            _ => {}
        }
        let idx = layer * PART + part;
        let mask = 0b11u64 << (idx * 2);
        if *seen & mask != 0 {
            return;
        }
        *seen |= mask;
        stack.push(idx);
    }
}
