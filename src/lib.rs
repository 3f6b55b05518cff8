//! Reachability analysis for a small layered-grid construction puzzle.
//!
//! The grid is a fixed number of layers, each split into a fixed number of
//! angular parts. A fixed vocabulary of physical transformations (stacking,
//! gravity, cutting, pin insertion, crystal growth) acts on it. This crate
//! enumerates every configuration reachable from the empty grid and answers
//! fast "is this configuration reachable?" queries against the precomputed
//! result.

pub mod config;
pub mod core;
pub mod query;
pub mod rules;
pub mod search;
pub mod store;
pub mod symmetry;
