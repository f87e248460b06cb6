// DataStream - ui/panels/mod.rs

pub mod about;
pub mod controls;
pub mod dialog;
pub mod lines;
