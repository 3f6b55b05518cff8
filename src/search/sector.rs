//! Conservative frontier search over single-sector patterns.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use crate::core::bits::repeat;
use crate::core::cell::Cell;
use crate::core::grid::Grid;

/// Breadth-first exploration of patterns confined to one angular sector
/// (part 0 of every layer).
///
/// The search applies the full operator vocabulary with the other sectors
/// synthetically filled so they can hold floating content up, then masks each
/// result back to the working sector. It is a deliberate under-approximation:
/// every pattern found is physically reachable, but some reachable patterns
/// may be missed. The exhaustive engine only uses it to seed candidate
/// halves.
pub struct SectorSearcher<const LAYER: usize, const PART: usize> {
    pub sectors: FxHashSet<Grid<LAYER, PART>>,
    queue: VecDeque<Grid<LAYER, PART>>,
}

impl<const LAYER: usize, const PART: usize> SectorSearcher<LAYER, PART> {
    pub fn new() -> Self {
        Self {
            sectors: FxHashSet::default(),
            queue: VecDeque::new(),
        }
    }

    /// Run to exhaustion from the empty sector.
    pub fn run(&mut self) {
        self.sectors.insert(Grid::empty());
        self.queue.push_back(Grid::empty());
        while let Some(sector) = self.queue.pop_front() {
            self.process(sector);
        }
    }

    fn enqueue(&mut self, sector: Grid<LAYER, PART>) {
        if self.sectors.insert(sector) {
            self.queue.push_back(sector);
        }
    }

    fn process(&mut self, sector: Grid<LAYER, PART>) {
        let mask = Grid::<LAYER, PART>::SECTOR_MASK;
        let layers = sector.layers();
        // Fill the other sectors with Filled cells up to the current height,
        // so floating content in the working sector has something to rest on.
        let fill = Grid::from_raw(!mask & repeat(Cell::Filled.code(), 2, PART * layers));

        // Stacking: a Filled cell can float at any layer (the fill supports
        // it); a Pin only lands directly on top.
        for layer in layers..LAYER {
            self.enqueue(sector | Grid::from_raw(Cell::Filled.code() << (2 * PART * layer)));
        }
        if layers < LAYER {
            self.enqueue(sector | Grid::from_raw(Cell::Pin.code() << (2 * PART * layers)));
        }

        self.enqueue((sector | fill).pin_push().masked(mask));

        self.enqueue((sector | fill).crystal_grow().masked(mask));

        // Force a crystal next to the cut boundary at each occupied layer and
        // cut, so crystal shatter patterns reach the working sector.
        for layer in 0..layers {
            let mut probe = sector | fill;
            probe.set(layer, PART - 1, Cell::Crystal);
            self.enqueue(probe.cut().masked(mask));
        }
    }
}

impl<const LAYER: usize, const PART: usize> Default for SectorSearcher<LAYER, PART> {
    fn default() -> Self {
        Self::new()
    }
}
