//! Core abstractions for diagram generation
//!
//! This module defines the traits every diagram strategy and renderer
//! implements, the shared option types, and the error type.

mod database;
mod error;
mod graph;
pub mod logging;
mod strategy;
mod template;
mod types;

pub use database::*;
pub use error::*;
pub use graph::*;
pub use logging::*;
pub use strategy::*;
pub use template::*;
pub use types::*;
