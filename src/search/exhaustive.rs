//! The exhaustive reachability engine.

use std::collections::VecDeque;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::core::cell::Cell;
use crate::core::grid::Grid;
use crate::search::pieces::single_layer_pieces;
use crate::search::progress::{ProgressObserver, SearchCounts, SearchProgress};
use crate::search::sector::SectorSearcher;
use crate::store::ShapeSet;

/// Enumerates every reachable shape, partitioned into two categories:
///
/// 1. shapes with a construction whose last step swaps two catalogued
///    halves together, tracked only through the halves catalogue;
/// 2. every other shape, tracked explicitly in the residual set.
///
/// Category-1 shapes are processed when the half expansion first produces
/// them; category-2 shapes go through the pending frontier. A shape can be
/// admitted as category 2 and later reclassified when the halves catalogue
/// catches up with it, but it is processed exactly once either way.
pub struct Searcher<const LAYER: usize, const PART: usize> {
    /// Category-2 shapes (canonical).
    residual: FxHashSet<Grid<LAYER, PART>>,
    /// Halves catalogue in discovery order.
    halves: Vec<Grid<LAYER, PART>>,
    /// Reverse index into `halves`.
    half_index: FxHashMap<Grid<LAYER, PART>, usize>,
    /// Observational: every rotation-masked single-sector slice seen.
    sectors: FxHashSet<Grid<LAYER, PART>>,
    /// Pending frontier. Entries removed by reclassification stay in the
    /// queue as tombstones and are skipped on pop; `pending` is the live
    /// membership set.
    queue: VecDeque<Grid<LAYER, PART>>,
    pending: FxHashSet<Grid<LAYER, PART>>,
    /// Expansion cursor into `halves`.
    next_half: usize,
    /// The stacking vocabulary, precomputed.
    pieces: Vec<Grid<LAYER, PART>>,
    /// Discovered shapes, weighted by symmetry-orbit size.
    count: u64,
    /// Observer checkpoint spacing, in discovered shapes.
    pub progress_interval: u64,
    next_progress: u64,
}

impl<const LAYER: usize, const PART: usize> Searcher<LAYER, PART> {
    pub fn new() -> Self {
        Self {
            residual: FxHashSet::default(),
            halves: Vec::new(),
            half_index: FxHashMap::default(),
            sectors: FxHashSet::default(),
            queue: VecDeque::new(),
            pending: FxHashSet::default(),
            next_half: 0,
            pieces: single_layer_pieces(),
            count: 0,
            progress_interval: 10_000_000,
            next_progress: u64::MAX,
        }
    }

    /// Run the search to completion. Call once per searcher.
    pub fn run(&mut self, observer: &mut impl ProgressObserver) {
        self.next_progress = self.progress_interval;
        self.seed(observer);

        // Both the catalogue and the frontier can grow during either kind of
        // step; the loop ends only when both are exhausted at once.
        while self.next_half < self.halves.len() || !self.queue.is_empty() {
            if self.next_half < self.halves.len() {
                self.expand_half(observer);
            } else if let Some(shape) = self.queue.pop_front() {
                // Skip tombstones left by reclassification.
                if self.pending.remove(&shape) {
                    self.process(shape, observer);
                }
            }
        }

        debug_assert!(self.pending.is_empty());
    }

    /// Seed the halves catalogue from the conservative sector search.
    ///
    /// For the four-part grid, every pair of sector patterns is collapsed
    /// into a candidate half. Whether that pairing is complete for wider
    /// grids is unproven, so those configurations fall back to seeding only
    /// the empty half and let the main loop discover the rest.
    fn seed(&mut self, observer: &mut impl ProgressObserver) {
        if PART == 4 {
            let mut sector_search = SectorSearcher::<LAYER, PART>::new();
            sector_search.run();

            let sectors: Vec<Grid<LAYER, PART>> = sector_search.sectors.iter().copied().collect();
            let n = sectors.len();
            let mut total: usize = 1;
            for _ in 0..PART / 2 {
                total *= n;
            }
            for i in 0..total {
                let mut idx = i;
                let mut half = Grid::empty();
                for part in 0..PART / 2 {
                    half = half | Grid::from_raw(sectors[idx % n].raw() << (2 * part));
                    idx /= n;
                }
                self.add_half(half.collapse().canonical_half());
            }
        } else {
            self.add_half(Grid::empty());
        }

        observer.on_progress(&self.progress());
    }

    /// Append a canonical half to the catalogue if it is unseen.
    fn add_half(&mut self, half: Grid<LAYER, PART>) {
        if let std::collections::hash_map::Entry::Vacant(e) = self.half_index.entry(half) {
            e.insert(self.halves.len());
            self.halves.push(half);
        }
    }

    /// Whether `shape` can be produced by swapping two catalogued halves
    /// together at some rotation. With `bound` given, both halves must sit
    /// strictly below that catalogue index.
    fn combinable(&self, shape: Grid<LAYER, PART>, bound: Option<usize>) -> bool {
        let west = Grid::<LAYER, PART>::WEST_MASK;
        for angle in 0..PART / 2 {
            let left = shape.rotate(angle).masked(west).canonical_half();
            let Some(&left_idx) = self.half_index.get(&left) else {
                continue;
            };
            let right = shape.rotate(angle + PART / 2).masked(west).canonical_half();
            let Some(&right_idx) = self.half_index.get(&right) else {
                continue;
            };
            match bound {
                None => return true,
                Some(b) if left_idx < b && right_idx < b => return true,
                Some(_) => {}
            }
        }
        false
    }

    /// Swap the half at the expansion cursor with every half at or below it.
    fn expand_half(&mut self, observer: &mut impl ProgressObserver) {
        let cursor = self.next_half;
        // Mirror variants of the current half, rotated into the east
        // position.
        let variants: Vec<Grid<LAYER, PART>> = self.halves[cursor]
            .equivalent_halves()
            .into_iter()
            .map(|h| h.rotate(PART / 2))
            .collect();

        let mut produced: FxHashSet<Grid<LAYER, PART>> = FxHashSet::default();
        for j in 0..=cursor {
            let other = self.halves[j];
            for &east in &variants {
                let combined = east | other;
                // Already accounted for by an earlier expansion.
                if self.combinable(combined, Some(cursor)) {
                    continue;
                }
                let shape = combined.canonical();
                if !produced.insert(shape) {
                    continue;
                }
                if self.pending.remove(&shape) {
                    // Admitted as category 2 but not yet processed:
                    // reclassify and process it now, exactly once.
                    self.residual.remove(&shape);
                    self.process(shape, observer);
                } else if self.residual.remove(&shape) {
                    // Already processed as category 2; its transitions are
                    // recorded, only the classification changes.
                } else {
                    self.process(shape, observer);
                }
            }
        }
        self.next_half += 1;
    }

    /// Record a discovered shape and enqueue every transition out of it.
    fn process(&mut self, shape: Grid<LAYER, PART>, observer: &mut impl ProgressObserver) {
        self.count += shape.equivalent_shapes().len() as u64;
        if self.count >= self.next_progress {
            self.next_progress += self.progress_interval;
            observer.on_progress(&self.progress());
        }

        let sector_mask = Grid::<LAYER, PART>::SECTOR_MASK;
        for angle in 0..PART {
            self.sectors.insert(shape.rotate(angle).masked(sector_mask));
        }

        // Cutting a reachable shape yields a reachable half.
        for angle in 0..PART {
            self.add_half(shape.rotate(angle).cut().canonical_half());
        }

        for k in 0..self.pieces.len() {
            let piece = self.pieces[k];
            self.enqueue(shape.stack(piece));
        }

        self.enqueue(shape.pin_push());

        self.enqueue(shape.crystal_grow());

        for layer in 0..shape.layers() {
            let mut probe = shape;
            probe.set(layer, PART - 1, Cell::Crystal);
            self.enqueue(probe.cut());
        }
    }

    /// Frontier admission: combinable shapes belong to category 1 and are
    /// never tracked here.
    fn enqueue(&mut self, shape: Grid<LAYER, PART>) {
        if self.combinable(shape, None) {
            return;
        }
        let shape = shape.canonical();
        if self.residual.insert(shape) {
            self.queue.push_back(shape);
            self.pending.insert(shape);
        }
    }

    fn progress(&self) -> SearchProgress {
        SearchProgress {
            shapes: self.count,
            sectors: self.sectors.len(),
            halves_expanded: self.next_half,
            halves_total: self.halves.len(),
            frontier_pending: self.pending.len(),
            frontier_queued: self.queue.len(),
            residual: self.residual.len(),
        }
    }

    /// Final tallies.
    pub fn counts(&self) -> SearchCounts {
        SearchCounts {
            shapes: self.count,
            halves: self.halves.len(),
            residual_shapes: self.residual.len(),
            sectors: self.sectors.len(),
        }
    }

    /// The halves catalogue in discovery order.
    pub fn halves(&self) -> &[Grid<LAYER, PART>] {
        &self.halves
    }

    /// Consume the searcher into a persistable result.
    pub fn into_shape_set(self) -> ShapeSet<LAYER, PART> {
        let mut halves = self.halves;
        halves.sort_unstable();
        let mut shapes: Vec<Grid<LAYER, PART>> = self.residual.into_iter().collect();
        shapes.sort_unstable();
        ShapeSet { halves, shapes }
    }
}

impl<const LAYER: usize, const PART: usize> Default for Searcher<LAYER, PART> {
    fn default() -> Self {
        Self::new()
    }
}
