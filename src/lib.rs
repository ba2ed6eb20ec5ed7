//! Workspace facade: re-exports [`citydb_core`] so demos and tooling can use
//! `citydb_rs::...` directly.

pub use citydb_core::*;
