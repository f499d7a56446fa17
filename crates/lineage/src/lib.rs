//! Lineage - Turn declared type hierarchies into Mermaid.js class diagrams
//!
//! A type declares its members, bases and constructor parameters once; the
//! library walks its inheritance chain and writes a `classDiagram` with an
//! inheritance arrow between every pair of ancestors, one block per class,
//! and a composition arrow for every class the type is built from.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use lineage::plugins::class::ClassType;
//!
//! let base = Arc::new(ClassType::builder("Base").build());
//! let mid = Arc::new(ClassType::builder("Mid").extends(base).build());
//! let leaf = ClassType::builder("Leaf").extends(mid).build();
//!
//! let diagram = lineage::build(leaf, "down").unwrap();
//! assert!(diagram.starts_with("classDiagram\nBase <|-- Mid\nMid <|-- Leaf"));
//! ```
//!
//! # Rendering a Document
//!
//! ```rust
//! use lineage::prelude::*;
//!
//! let ty = ClassType::builder("Engine")
//!     .method("start", &["self"], "None")
//!     .build();
//!
//! let graph = Graph::new(ClassDiagram::with_direction(ty, Direction::Down));
//! let html = graph.generate().unwrap();
//! assert!(html.contains("<!DOCTYPE html>"));
//! ```

pub mod core;
pub mod plugins;

use std::sync::Arc;

pub use crate::core::*;

use crate::plugins::class::{ClassDiagram, ClassType};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        DiagramConfig, DiagramError, Direction, FileTemplateRenderer, Graph, GraphStrategy,
        HtmlTemplateRenderer, Template, TemplateRenderer,
    };
    pub use crate::plugins::class::{
        ClassDiagram, ClassType, Describe, Member, RelationshipKind, TypeModel, TypeRef,
        Visibility,
    };
}

/// Build the class diagram markup for `target`
///
/// `direction` must be `"up"` or `"down"`; anything else fails with
/// [`DiagramError::InvalidDirection`] before the hierarchy is touched.
pub fn build(target: impl Into<Arc<ClassType>>, direction: &str) -> Result<String> {
    ClassDiagram::new(target, direction)?.build()
}

/// Build the class diagram for `target` and render it into an HTML document
///
/// # Example
/// ```rust
/// use lineage::{generate, DiagramConfig};
/// use lineage::plugins::class::ClassType;
///
/// let html = generate(ClassType::builder("Solo").build(), DiagramConfig::default()).unwrap();
/// assert!(html.contains("class Solo{"));
/// ```
pub fn generate(target: impl Into<Arc<ClassType>>, config: DiagramConfig) -> Result<String> {
    let strategy = ClassDiagram::with_direction(target, config.direction);
    Graph::new(strategy)
        .with_template(config.template)
        .generate()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_single_class() {
        let diagram = build(ClassType::builder("Solo").build(), "up").unwrap();
        assert_eq!(diagram, "classDiagram\nclass Solo{\n}");
    }

    #[test]
    fn test_build_rejects_direction() {
        let result = build(ClassType::builder("Solo").build(), "insideout");
        assert!(matches!(result, Err(DiagramError::InvalidDirection { .. })));
    }

    #[test]
    fn test_generate_html() {
        let html = generate(ClassType::builder("Solo").build(), DiagramConfig::default()).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("class Solo{"));
    }
}
