// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod discover;
pub mod normalizer;
pub mod persistence;
pub mod sink;
pub mod stylesheet;

pub use normalizer::WhitespaceNormalizer;
pub use sink::BucketStore;
pub use stylesheet::CssStylesheet;
