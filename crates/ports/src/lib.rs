//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`normalizer`]: Condition-text normalization shared by parsing and
//!   alias matching
//! - [`stylesheet`]: Enumeration, re-rendering and removal of media rules
//! - [`sink`]: Accumulation of extracted media blocks per bucket
//!
//! These ports allow the domain and application layers to remain
//! independent of specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod normalizer;
pub mod sink;
pub mod stylesheet;
