// crates/domain/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod bounds;
pub mod breakpoint;
pub mod group;
pub mod query;

pub use bounds::{BoundsList, Edge, WidthBounds};
pub use breakpoint::{Breakpoint, BreakpointTable};
pub use group::{GroupRule, bucket_label, resolve_group};
pub use query::parse_width_condition;
