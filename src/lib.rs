// src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod args;
pub mod config;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
