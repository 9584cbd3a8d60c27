//! Swiftris (workspace facade crate).
//!
//! Re-exports the engine crates under `swiftris::{core, types}` so hosts depend on a
//! single package while the implementation lives in dedicated crates under `crates/`.

pub use swiftris_core as core;
pub use swiftris_types as types;
