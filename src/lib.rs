//! Diffs the decompiled source trees of two software releases into a sorted
//! change report plus one unified diff per changed file.
//!
//! - `areas`: source trees, patch destinations and diff runs
//! - `artifacts`: the diff engine (Myers' diff, filters, patch sets)
//! - `commands`: tree, release and cross-side diff commands

pub mod areas;
pub mod artifacts;
pub mod commands;
