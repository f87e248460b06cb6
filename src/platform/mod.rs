// DataStream - platform/mod.rs
//
// Platform abstraction layer: filesystem reads and config directories.
// Dependencies: standard library, directories, serde, toml.
// Must NOT depend on: core, app, ui.

pub mod config;
pub mod fs;
