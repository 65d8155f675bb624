//! Porcelain commands (user-facing diff operations)
//!
//! ## Commands
//!
//! - `diff`: one diff run over a pair of source trees, filter by filter
//! - `tree`: diff two arbitrary source trees
//! - `release`: diff two releases, client and server side independently
//! - `cross`: diff the server tree of a release against its client tree
//! - `summary`: the per-run change summary printed after persisting

pub mod cross;
pub mod diff;
pub mod release;
pub mod summary;
pub mod tree;
