//! Patch sets
//!
//! - `patch_set`: per-scope diff results (summary records and per-file diff
//!   blocks) and their aggregation across filters

pub mod patch_set;
