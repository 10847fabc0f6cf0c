//! Off-thread scene image loading.

pub mod commands;
pub mod runtime;
