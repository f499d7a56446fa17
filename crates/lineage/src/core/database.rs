//! Ordered statement stores
//!
//! A strategy assembles its diagram into a database of nodes and edges that
//! keeps insertion order, then writes it out as markup in that order.

/// Statement store behind a diagram strategy
pub trait Database: Send + Sync {
    /// Block-like statements (class bodies)
    type Node: Clone + Send + Sync;

    /// Arrow-like statements (relationships)
    type Edge: Clone + Send + Sync;

    /// Mermaid header token written before any statement
    fn header(&self) -> &'static str;

    fn nodes(&self) -> impl Iterator<Item = &Self::Node>;

    fn edges(&self) -> impl Iterator<Item = &Self::Edge>;

    /// Header followed by every statement in insertion order, one per line
    fn to_markup(&self) -> String;

    fn node_count(&self) -> usize {
        self.nodes().count()
    }

    fn edge_count(&self) -> usize {
        self.edges().count()
    }
}
