//! The four cell states and their text encoding.

/// State of a single grid cell, packed into two bits.
///
/// Color is not tracked: regular parts can always be painted before any other
/// operation, and crystal colors can be arranged quarter by quarter, so color
/// never affects reachability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Cell {
    Empty = 0,
    Pin = 1,
    Filled = 2,
    Crystal = 3,
}

impl Cell {
    /// The two-bit code stored in a packed grid.
    #[inline]
    pub const fn code(self) -> u64 {
        self as u64
    }

    /// Decode a two-bit code (higher bits are ignored).
    #[inline]
    pub const fn from_code(code: u64) -> Cell {
        match code & 0b11 {
            0 => Cell::Empty,
            1 => Cell::Pin,
            2 => Cell::Filled,
            _ => Cell::Crystal,
        }
    }

    /// Character used in the text format.
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::Pin => 'P',
            Cell::Filled => 'S',
            Cell::Crystal => 'c',
        }
    }

    /// Parse a text-format character. Any character that is not `-`, `P` or
    /// `c` reads as [`Cell::Filled`], so the concrete part glyphs of the game
    /// (`C`, `R`, `S`, ...) all parse.
    #[inline]
    pub const fn from_char(c: char) -> Cell {
        match c {
            '-' => Cell::Empty,
            'P' => Cell::Pin,
            'c' => Cell::Crystal,
            _ => Cell::Filled,
        }
    }
}
