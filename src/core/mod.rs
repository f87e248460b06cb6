// DataStream - core/mod.rs
//
// Core business logic layer.
// Dependencies: standard library only.
// Must NOT depend on: ui, platform, app, or any I/O crate directly.

pub mod document;
pub mod filter;
