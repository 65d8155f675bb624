//! Line diffing
//!
//! - `diff_algorithm`: Myers' diff for line-by-line comparison, grouped into hunks
//! - `diff_target`: file snapshots read from a source tree
//! - `unified`: unified-diff rendering of two snapshots of one file

pub mod diff_algorithm;
pub mod diff_target;
pub mod unified;
