//! Core strategy trait for diagram generation
//!
//! A strategy turns some input it was configured with into diagram markup.
//! Class diagrams are the only strategy today; other diagram kinds plug in
//! behind the same trait without touching the [`Graph`](super::Graph) facade.

use super::error::Result;

/// Core trait for diagram-building strategies
pub trait GraphStrategy: Send + Sync {
    /// Build the diagram markup
    fn build(&self) -> Result<String>;

    /// Mermaid header token this strategy emits (e.g. `classDiagram`)
    fn diagram_kind(&self) -> &'static str;
}

impl<S: GraphStrategy + ?Sized> GraphStrategy for Box<S> {
    fn build(&self) -> Result<String> {
        (**self).build()
    }

    fn diagram_kind(&self) -> &'static str {
        (**self).diagram_kind()
    }
}
