//! Filesystem-facing components
//!
//! - `workspace`: a source tree to read snapshots from
//! - `patch_store`: the destination a diff run is persisted to
//! - `comparison`: one diff run (old tree, new tree, destination)
//! - `workbench`: the releases directory and the command output writer

pub mod comparison;
pub mod patch_store;
pub mod workbench;
pub mod workspace;
