//! The bit-packed grid value type.

use std::fmt;
use std::ops::BitOr;
use std::str::FromStr;

use crate::core::bits::repeat;
use crate::core::cell::Cell;

/// An immutable layered-grid configuration, packed into a `u64`.
///
/// The grid has `LAYER` layers of `PART` angular parts each; every cell holds
/// a [`Cell`] in two bits. Layer 0 is the bottom; within a layer, part 0 comes
/// first. Bits at or above `LAYER * PART * 2` are always zero, an invariant
/// every operator preserves.
///
/// The dimensions are type-level constants so that a build is committed to one
/// configuration; they are validated the first time a grid of that
/// configuration is constructed. The total order is the order of the packed
/// integer value, which is what the persisted sorted arrays and the binary
/// search in the query path rely on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Grid<const LAYER: usize, const PART: usize> {
    value: u64,
}

impl<const LAYER: usize, const PART: usize> Grid<LAYER, PART> {
    /// Number of cells.
    pub const CELLS: usize = LAYER * PART;

    /// Width of the persisted value in bytes: 4 when the packed state fits in
    /// 32 bits, else 8. Part of the store format.
    pub const VALUE_BYTES: usize = if LAYER * PART * 2 <= 32 { 4 } else { 8 };

    const DIMS_OK: () = assert!(
        LAYER >= 1 && PART >= 2 && PART % 2 == 0 && LAYER * PART * 2 <= 64,
        "grid configuration must satisfy LAYER >= 1, even PART >= 2, LAYER * PART * 2 <= 64"
    );

    /// Mask of every cell.
    pub(crate) const FULL_MASK: u64 = repeat(0b11, 2, Self::CELLS);
    /// Mask of the bottom layer.
    pub(crate) const BOTTOM_MASK: u64 = repeat(0b11, 2, PART);
    /// Mask of the top layer.
    pub(crate) const TOP_MASK: u64 = Self::BOTTOM_MASK << (2 * PART * (LAYER - 1));
    /// Mask of the west half: parts `[0, PART / 2)` of every layer.
    pub const WEST_MASK: u64 = repeat(repeat(0b11, 2, PART / 2), 2 * PART, LAYER);
    /// Mask of part 0 of every layer (one angular sector).
    pub(crate) const SECTOR_MASK: u64 = repeat(0b11, 2 * PART, LAYER);

    /// The all-Empty grid.
    #[inline]
    pub fn empty() -> Self {
        let _ = Self::DIMS_OK;
        Self { value: 0 }
    }

    /// The packed integer representation.
    #[inline]
    pub const fn raw(self) -> u64 {
        self.value
    }

    /// Construct from a packed representation.
    #[inline]
    pub fn from_raw(raw: u64) -> Self {
        let _ = Self::DIMS_OK;
        debug_assert!(raw & !Self::FULL_MASK == 0, "bits outside the grid must be zero");
        Self { value: raw }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.value == 0
    }

    #[inline]
    pub fn get(self, layer: usize, part: usize) -> Cell {
        debug_assert!(layer < LAYER && part < PART);
        let idx = layer * PART + part;
        Cell::from_code(self.value >> (idx * 2))
    }

    #[inline]
    pub fn set(&mut self, layer: usize, part: usize, cell: Cell) {
        debug_assert!(layer < LAYER && part < PART);
        let idx = layer * PART + part;
        self.value &= !(0b11u64 << (idx * 2));
        self.value |= cell.code() << (idx * 2);
    }

    /// Keep only the cells covered by `mask`.
    #[inline]
    pub fn masked(self, mask: u64) -> Self {
        Self::from_raw(self.value & mask & Self::FULL_MASK)
    }

    /// Bitmask of every cell holding the given state.
    ///
    /// Branch-free equality scan: a cell differs from `cell` iff either of its
    /// two bits differs, so fold each cell's difference into both bit
    /// positions and invert.
    pub fn cells_of(self, cell: Cell) -> u64 {
        let inequal = self.value ^ repeat(cell.code(), 2, Self::CELLS);
        let lo = inequal & repeat(0b01, 2, Self::CELLS);
        let hi = inequal & repeat(0b10, 2, Self::CELLS);
        let inequal = inequal | (lo << 1) | (hi >> 1);
        !inequal & Self::FULL_MASK
    }

    /// Number of layers up to and including the topmost non-empty one.
    ///
    /// For gravity-stable grids the occupied layers are contiguous from the
    /// bottom, so this is also the height of the occupied prefix.
    pub fn layers(self) -> usize {
        let mut l = 0;
        let mut v = self.value;
        while l < LAYER && v != 0 {
            l += 1;
            v >>= 2 * PART;
        }
        l
    }

    /// Rotate every layer by `n` parts; `rotate(PART)` is the identity.
    pub fn rotate(self, n: usize) -> Self {
        let n = n % PART;
        if n == 0 {
            return self;
        }
        let mask = repeat(repeat(0b11, 2, n), 2 * PART, LAYER);
        Self::from_raw(((self.value & mask) << (2 * (PART - n))) | ((self.value & !mask) >> (2 * n)))
    }

    /// Mirror the parts of every layer; involutive.
    pub fn flip(self) -> Self {
        let column = Self::SECTOR_MASK;
        let mut v = 0;
        for pa in 0..PART / 2 {
            let pb = PART - 1 - pa;
            let shift = 2 * (pb - pa);
            v |= (self.value & (column << (2 * pa))) << shift;
            v |= (self.value & (column << (2 * pb))) >> shift;
        }
        Self::from_raw(v)
    }

    /// Render in the text format; `with_color` doubles every cell to two
    /// characters, the second being the (untracked) color slot.
    pub fn to_text(self, with_color: bool) -> String {
        let mut repr = String::with_capacity(Self::CELLS * (1 + with_color as usize) + LAYER - 1);
        for layer in 0..LAYER {
            if layer > 0 {
                repr.push(':');
            }
            for part in 0..PART {
                let cell = self.get(layer, part);
                repr.push(cell.to_char());
                if with_color {
                    repr.push(match cell {
                        Cell::Empty | Cell::Pin => '-',
                        Cell::Filled | Cell::Crystal => 'w',
                    });
                }
            }
        }
        repr
    }
}

impl<const LAYER: usize, const PART: usize> Default for Grid<LAYER, PART> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<const LAYER: usize, const PART: usize> BitOr for Grid<LAYER, PART> {
    type Output = Self;

    /// Union of two grids; the caller guarantees the occupied cells are
    /// disjoint.
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self::from_raw(self.value | rhs.value)
    }
}

impl<const LAYER: usize, const PART: usize> fmt::Display for Grid<LAYER, PART> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text(false))
    }
}

/// Failure to parse a grid from its text form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseShapeError {
    /// The input is neither the short nor the full (two chars per cell) length.
    BadLength { len: usize, short: usize, full: usize },
    /// A `:` separator is missing at a layer boundary.
    MissingSeparator { index: usize },
}

impl fmt::Display for ParseShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseShapeError::BadLength { len, short, full } => write!(
                f,
                "shape string has {len} characters, expected {short} (short form) or {full} (full form)"
            ),
            ParseShapeError::MissingSeparator { index } => {
                write!(f, "missing `:` layer separator at position {index}")
            }
        }
    }
}

impl std::error::Error for ParseShapeError {}

impl<const LAYER: usize, const PART: usize> FromStr for Grid<LAYER, PART> {
    type Err = ParseShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let short = LAYER * PART + LAYER - 1;
        let full = 2 * LAYER * PART + LAYER - 1;
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != short && chars.len() != full {
            return Err(ParseShapeError::BadLength { len: chars.len(), short, full });
        }
        let is_full = chars.len() == full;

        let mut grid = Self::empty();
        let mut p = 0;
        for layer in 0..LAYER {
            if layer > 0 {
                if chars[p] != ':' {
                    return Err(ParseShapeError::MissingSeparator { index: p });
                }
                p += 1;
            }
            for part in 0..PART {
                grid.set(layer, part, Cell::from_char(chars[p]));
                p += 1 + is_full as usize;
            }
        }
        Ok(grid)
    }
}
