//! The two-phase exhaustive reachability search.
//!
//! [`sector::SectorSearcher`] is a cheap, conservative seeding pass over
//! single-sector patterns; [`exhaustive::Searcher`] is the main engine that
//! enumerates the complete reachable set with symmetry reduction and the
//! halves/shapes categorization. Progress reporting goes through the observer
//! seam in [`progress`], keeping the engine itself free of I/O.

pub mod exhaustive;
pub mod pieces;
pub mod progress;
pub mod sector;
