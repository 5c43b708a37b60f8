pub mod batch;
pub mod commands;
pub mod interactive;

pub use commands::*;
