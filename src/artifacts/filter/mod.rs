//! Path filtering
//!
//! - `path_filter`: selects the files that take part in a diff and derives
//!   their version-independent names

pub mod path_filter;
