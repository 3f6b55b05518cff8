//! The physical transition operators over [`Grid`](crate::core::grid::Grid).
//!
//! All operators are pure: they take a grid by value and return a new grid.
//! They are split by concern:
//! - `support`: which cells survive gravity,
//! - `gravity`: stacking and collapse,
//! - `tools`: the cutter, the pin pusher and the crystal generator.

mod gravity;
mod support;
mod tools;
