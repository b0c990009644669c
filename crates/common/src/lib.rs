//! Shared building blocks for the pager workspace: wire types and the
//! tracing-subscriber setup used by every binary.

pub mod types;
pub mod utils;
