//! Diagram strategy plugins
//!
//! Each plugin implements [`GraphStrategy`](crate::core::GraphStrategy) for
//! one Mermaid diagram kind.

pub mod class;

pub use class::*;
