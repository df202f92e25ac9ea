//! Blockfall (workspace facade crate).
//!
//! Re-exports the member crates as `blockfall::{core, engine, types}` while the
//! implementation lives in dedicated crates under `crates/`.

pub use blockfall_core as core;
pub use blockfall_engine as engine;
pub use blockfall_types as types;
