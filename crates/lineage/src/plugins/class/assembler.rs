//! Class diagram assembly
//!
//! [`ClassDiagram`] is the class-diagram [`GraphStrategy`]: it walks the
//! ancestry of a target type, orders it by direction, links consecutive
//! ancestors with inheritance arrows, and nests the types the target is
//! composed of.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, info_span, trace};

use super::database::{
    ClassDatabase, Relationship, RelationshipKind, CLASS_DIAGRAM_HEADER,
};
use super::extractor::extract_members;
use super::model::{ClassType, Describe, TypeRef};
use super::walker::walk_ancestry;
use crate::core::{Database, Direction, GraphStrategy, Result};

/// Class diagram strategy for one target type
#[derive(Debug, Clone)]
pub struct ClassDiagram {
    target: Arc<ClassType>,
    direction: Direction,
}

impl ClassDiagram {
    /// Create a class diagram, validating `direction` ("up" or "down")
    ///
    /// ```rust
    /// use lineage::plugins::class::{ClassDiagram, ClassType};
    ///
    /// let ty = ClassType::builder("Solo").build();
    /// assert!(ClassDiagram::new(ty.clone(), "down").is_ok());
    /// assert!(ClassDiagram::new(ty, "sideways").is_err());
    /// ```
    pub fn new(target: impl Into<Arc<ClassType>>, direction: &str) -> Result<Self> {
        let direction = direction.parse::<Direction>()?;
        Ok(Self::with_direction(target, direction))
    }

    pub fn with_direction(target: impl Into<Arc<ClassType>>, direction: Direction) -> Self {
        Self {
            target: target.into(),
            direction,
        }
    }

    /// Create a class diagram for a type that describes itself
    pub fn of<T: Describe>(direction: &str) -> Result<Self> {
        Self::new(T::describe(), direction)
    }

    pub fn target(&self) -> &ClassType {
        &self.target
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Assemble the diagram into a database without writing markup
    pub fn assemble(&self) -> ClassDatabase {
        let span = info_span!(
            "assemble_class_diagram",
            class = self.target.name(),
            direction = %self.direction
        );
        let _enter = span.enter();

        let mut database = ClassDatabase::new();

        let ancestry = self.direction.arrange(walk_ancestry(&self.target));
        for pair in ancestry.windows(2) {
            database.add_relationship(Relationship::new(
                pair[0].name.as_str(),
                pair[1].name.as_str(),
                RelationshipKind::Inheritance,
                self.direction,
            ));
        }
        debug!(ancestry_len = ancestry.len(), "Walked ancestry");
        for block in ancestry {
            database.add_class(block);
        }

        // A composed part contributes its own block only, not its ancestry
        for part in self.composed_types() {
            database.add_relationship(Relationship::new(
                self.target.name(),
                part.name(),
                RelationshipKind::Composition,
                self.direction,
            ));
            database.add_class(extract_members(&part));
        }

        debug!(
            classes = database.node_count(),
            relationships = database.edge_count(),
            "Assembled class diagram"
        );
        database
    }

    /// Declared class types of the target's constructor parameters, in
    /// parameter order and without repeats
    pub fn composed_types(&self) -> Vec<Arc<ClassType>> {
        let mut seen = HashSet::new();
        let mut parts = Vec::new();

        for param in self.target.constructor() {
            match &param.annotation {
                Some(TypeRef::Class(ty)) => {
                    if seen.insert(ty.name().to_string()) {
                        parts.push(Arc::clone(ty));
                    }
                }
                Some(TypeRef::Builtin(name)) => {
                    trace!(param = %param.name, type_name = %name, "Builtin parameter type");
                }
                Some(TypeRef::Unresolved(name)) => {
                    debug!(param = %param.name, type_name = %name, "Skipping unresolved parameter type");
                }
                None => {
                    trace!(param = %param.name, "Parameter has no annotation");
                }
            }
        }

        parts
    }
}

impl GraphStrategy for ClassDiagram {
    fn build(&self) -> Result<String> {
        Ok(self.assemble().to_markup())
    }

    fn diagram_kind(&self) -> &'static str {
        CLASS_DIAGRAM_HEADER
    }
}
