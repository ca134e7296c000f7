//! Workspace facade for the demos: re-exports `geofuzz-core`.
pub use geofuzz_core::*;
