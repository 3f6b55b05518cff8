//! The stacking vocabulary.

use crate::core::bits::repeat;
use crate::core::cell::Cell;
use crate::core::grid::Grid;

/// Every connected single-layer piece made of Pins and Filled cells, aligned
/// to the top layer (where a stacked piece starts falling).
///
/// Stacking an arbitrary shape on top of another decomposes into stacking its
/// connected single-layer pieces bottom-up, so this vocabulary covers every
/// stacking transition the search needs: one Pin per part, every contiguous
/// Filled run of each length at each rotation, and the full Filled layer.
pub fn single_layer_pieces<const LAYER: usize, const PART: usize>() -> Vec<Grid<LAYER, PART>> {
    let mut pieces: Vec<Grid<LAYER, PART>> = Vec::new();

    for part in 0..PART {
        let mut pin = Grid::empty();
        pin.set(0, part, Cell::Pin);
        pieces.push(pin);
    }

    for len in 1..PART {
        let mut run = Grid::empty();
        for part in 0..len {
            run.set(0, part, Cell::Filled);
        }
        for part in 0..PART {
            pieces.push(run.rotate(part));
        }
    }

    // The full layer has only one rotation.
    pieces.push(Grid::from_raw(repeat(Cell::Filled.code(), 2, PART)));

    pieces
        .into_iter()
        .map(|p| Grid::from_raw(p.raw() << (2 * PART * (LAYER - 1))))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_size_and_alignment() {
        let pieces = single_layer_pieces::<4, 4>();
        // 4 pins + 3 run lengths x 4 rotations + 1 full layer.
        assert_eq!(pieces.len(), 4 + 3 * 4 + 1);
        for piece in pieces {
            assert!(!piece.is_empty());
            // Aligned to the top layer only.
            assert_eq!(piece.layers(), 4);
            assert_eq!(piece.raw() >> (2 * 4 * 3) << (2 * 4 * 3), piece.raw());
        }
    }
}
