//! The persisted result of a completed search.
//!
//! Binary layout (host-native endianness, no magic number, no version field):
//!
//! ```text
//! u32  halves_count
//! halves_count x value     // ascending
//! u32  shapes_count
//! shapes_count x value     // ascending
//! ```
//!
//! `value` is the packed grid at its native width: 4 bytes when the
//! configuration fits in 32 bits, else 8. The format is tied exactly to the
//! grid configuration that produced it; loading a file written under a
//! different configuration yields meaningless grids, and no cross-check is
//! performed. A file shorter than its declared counts is rejected with
//! [`StoreError::Truncated`].

use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use crate::core::grid::Grid;

/// The two sorted canonical arrays produced by a completed search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeSet<const LAYER: usize, const PART: usize> {
    /// Canonical halves, ascending by raw value.
    pub halves: Vec<Grid<LAYER, PART>>,
    /// Canonical category-2 shapes, ascending by raw value.
    pub shapes: Vec<Grid<LAYER, PART>>,
}

/// Failure to persist or load a [`ShapeSet`].
#[derive(Debug)]
pub enum StoreError {
    Io {
        stage: &'static str,
        path: PathBuf,
        error: io::Error,
    },
    /// The file ended before its declared counts were satisfied.
    Truncated {
        path: PathBuf,
        section: &'static str,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io { stage, path, error } => {
                write!(f, "{stage} {}: {error}", path.display())
            }
            StoreError::Truncated { path, section } => {
                write!(f, "store file {} is truncated in the {section} section", path.display())
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io { error, .. } => Some(error),
            StoreError::Truncated { .. } => None,
        }
    }
}

impl<const LAYER: usize, const PART: usize> ShapeSet<LAYER, PART> {
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let file = File::create(path).map_err(|error| StoreError::Io {
            stage: "create",
            path: path.to_path_buf(),
            error,
        })?;
        let mut w = BufWriter::new(file);
        Self::write_section(&mut w, path, &self.halves)?;
        Self::write_section(&mut w, path, &self.shapes)?;
        w.flush().map_err(|error| StoreError::Io {
            stage: "write",
            path: path.to_path_buf(),
            error,
        })
    }

    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let file = File::open(path).map_err(|error| StoreError::Io {
            stage: "open",
            path: path.to_path_buf(),
            error,
        })?;
        let mut r = BufReader::new(file);
        let halves = Self::read_section(&mut r, path, "halves")?;
        let shapes = Self::read_section(&mut r, path, "shapes")?;
        Ok(Self { halves, shapes })
    }

    fn write_section(
        w: &mut BufWriter<File>,
        path: &Path,
        grids: &[Grid<LAYER, PART>],
    ) -> Result<(), StoreError> {
        let io_err = |error| StoreError::Io {
            stage: "write",
            path: path.to_path_buf(),
            error,
        };
        debug_assert!(grids.len() <= u32::MAX as usize);
        w.write_all(&(grids.len() as u32).to_ne_bytes()).map_err(io_err)?;
        for grid in grids {
            if Grid::<LAYER, PART>::VALUE_BYTES == 4 {
                w.write_all(&(grid.raw() as u32).to_ne_bytes()).map_err(io_err)?;
            } else {
                w.write_all(&grid.raw().to_ne_bytes()).map_err(io_err)?;
            }
        }
        Ok(())
    }

    fn read_section(
        r: &mut BufReader<File>,
        path: &Path,
        section: &'static str,
    ) -> Result<Vec<Grid<LAYER, PART>>, StoreError> {
        let mut len_buf = [0u8; 4];
        Self::read_bytes(r, path, section, &mut len_buf)?;
        let len = u32::from_ne_bytes(len_buf) as usize;

        // The count is untrusted until the bytes are actually there, so cap
        // the up-front allocation.
        let mut out = Vec::with_capacity(len.min(1 << 20));
        for _ in 0..len {
            let raw = if Grid::<LAYER, PART>::VALUE_BYTES == 4 {
                let mut buf = [0u8; 4];
                Self::read_bytes(r, path, section, &mut buf)?;
                u32::from_ne_bytes(buf) as u64
            } else {
                let mut buf = [0u8; 8];
                Self::read_bytes(r, path, section, &mut buf)?;
                u64::from_ne_bytes(buf)
            };
            out.push(Grid::from_raw(raw));
        }
        Ok(out)
    }

    fn read_bytes(
        r: &mut BufReader<File>,
        path: &Path,
        section: &'static str,
        buf: &mut [u8],
    ) -> Result<(), StoreError> {
        match r.read_exact(buf) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == io::ErrorKind::UnexpectedEof => {
                Err(StoreError::Truncated {
                    path: path.to_path_buf(),
                    section,
                })
            }
            Err(error) => Err(StoreError::Io {
                stage: "read",
                path: path.to_path_buf(),
                error,
            }),
        }
    }
}
