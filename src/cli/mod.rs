//! CLI command handlers

pub mod commands;

pub use commands::{gen_config_example, gen_loc, gen_loc_with_source};
