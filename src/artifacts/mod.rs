//! Diff data structures and algorithms
//!
//! - `diff`: Myers' diff, file snapshots and unified rendering
//! - `filter`: filter tokens and filter-relative names
//! - `patch`: patch sets and their aggregation
//! - `side`: the client/server build targets of a release

pub mod diff;
pub mod filter;
pub mod patch;
pub mod side;
