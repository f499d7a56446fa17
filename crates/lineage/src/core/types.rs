//! Core type definitions for diagram generation
//!
//! This module contains the option enumerations shared by every diagram
//! strategy: the diagram direction, the output template, and the
//! configuration that bundles them.

use std::fmt;
use std::str::FromStr;

use super::error::DiagramError;

/// Direction in which a diagram reads
///
/// The direction selects both the arrow glyphs and the order in which an
/// ancestry is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Direction {
    /// Leaf first, arrows point towards the root
    Up,
    /// Root first, arrows point away from the root
    #[default]
    Down,
}

impl Direction {
    /// All directions in declaration order
    pub const ALL: [Direction; 2] = [Direction::Up, Direction::Down];

    /// Textual form accepted by [`Direction::from_str`]
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    /// Arrange a leaf-first sequence in this direction's reading order
    pub fn arrange<T>(&self, mut leaf_first: Vec<T>) -> Vec<T> {
        if *self == Direction::Down {
            leaf_first.reverse();
        }
        leaf_first
    }
}

impl FromStr for Direction {
    type Err = DiagramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            _ => Err(DiagramError::invalid_direction(s)),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Document templates a diagram can be rendered into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Template {
    /// Standalone HTML page that renders the diagram with Mermaid.js
    #[default]
    Simple,
}

impl Template {
    pub const ALL: [Template; 1] = [Template::Simple];

    /// Template identifier, also the file stem for directory-backed templates
    pub fn id(&self) -> &'static str {
        match self {
            Template::Simple => "simple",
        }
    }
}

impl FromStr for Template {
    type Err = DiagramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "simple" => Ok(Template::Simple),
            _ => Err(DiagramError::UnknownTemplate {
                template: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Options for building and rendering a diagram
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DiagramConfig {
    pub direction: Direction,
    pub template: Template,
}

impl DiagramConfig {
    pub fn new(direction: Direction, template: Template) -> Self {
        Self {
            direction,
            template,
        }
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }
}
