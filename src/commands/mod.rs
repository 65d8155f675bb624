//! Command implementations
//!
//! - `porcelain`: user-facing commands that compose the diff engine into
//!   release-level workflows

pub mod porcelain;
