// DataStream - app/mod.rs
//
// Application layer: the document store, UI-facing state, headless search.
// Dependencies: core, platform, util.
// Must NOT depend on: ui.

pub mod batch;
pub mod state;
pub mod store;
