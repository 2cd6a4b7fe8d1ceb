//! Junk Blocks (workspace facade crate).
//!
//! Exposes the rules engine as `junk_blocks::{core, types}` while the implementation
//! lives in dedicated crates under `crates/`.

pub use junk_blocks_core as core;
pub use junk_blocks_types as types;
