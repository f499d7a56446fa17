//! Class diagram database
//!
//! Stores the class blocks and relationships of an assembled class diagram
//! in the order they are written out as Mermaid markup.

use std::fmt;

use crate::core::{Database, Direction};

/// Mermaid header token for class diagrams
pub const CLASS_DIAGRAM_HEADER: &str = "classDiagram";

/// Visibility modifier for class members
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Public,    // +
    Private,   // -
    Protected, // #
    Package,   // ~
}

impl Visibility {
    pub fn to_char(self) -> char {
        match self {
            Visibility::Public => '+',
            Visibility::Private => '-',
            Visibility::Protected => '#',
            Visibility::Package => '~',
        }
    }

    /// Sort rank inside a class block; lower ranks are written first
    pub fn rank(self) -> u8 {
        match self {
            Visibility::Public => 0,
            Visibility::Protected => 1,
            Visibility::Private => 2,
            Visibility::Package => 3,
        }
    }
}

/// Classifier for methods (abstract, static)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classifier {
    Abstract, // *
    Static,   // $
}

impl Classifier {
    pub fn to_char(self) -> char {
        match self {
            Classifier::Abstract => '*',
            Classifier::Static => '$',
        }
    }
}

/// One line inside a class block
///
/// Methods carry a parameter list and render as
/// `{vis}{name}({params}){classifier} {returns}`; fields and properties have
/// none and render as `{vis}{type} {name}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberLine {
    pub visibility: Visibility,
    pub classifier: Option<Classifier>,
    pub name: String,
    pub params: Option<Vec<String>>,
    pub type_name: String,
}

impl MemberLine {
    pub fn method(
        visibility: Visibility,
        name: impl Into<String>,
        params: Vec<String>,
        returns: impl Into<String>,
    ) -> Self {
        Self {
            visibility,
            classifier: None,
            name: name.into(),
            params: Some(params),
            type_name: returns.into(),
        }
    }

    pub fn field(visibility: Visibility, type_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            visibility,
            classifier: None,
            name: name.into(),
            params: None,
            type_name: type_name.into(),
        }
    }

    pub fn with_classifier(mut self, classifier: Option<Classifier>) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn is_method(&self) -> bool {
        self.params.is_some()
    }
}

impl fmt::Display for MemberLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vis = self.visibility.to_char();
        match &self.params {
            Some(params) => {
                write!(f, "{}{}({})", vis, self.name, params.join(", "))?;
                if let Some(classifier) = self.classifier {
                    write!(f, "{}", classifier.to_char())?;
                }
                write!(f, " {}", self.type_name)
            }
            None => write!(f, "{}{} {}", vis, self.type_name, self.name),
        }
    }
}

/// A class and its member lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassBlock {
    pub name: String,
    pub lines: Vec<MemberLine>,
}

impl ClassBlock {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lines: Vec::new(),
        }
    }

    pub fn add_line(&mut self, line: MemberLine) {
        self.lines.push(line);
    }

    /// Stable sort of the body by visibility rank
    pub fn sort_by_visibility(&mut self) {
        self.lines.sort_by_key(|line| line.visibility.rank());
    }
}

impl fmt::Display for ClassBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "class {}{{", self.name)?;
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        write!(f, "}}")
    }
}

/// How the connecting line of a relationship is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStyle {
    Solid,  // --
    Dashed, // ..
}

impl LinkStyle {
    pub fn glyph(self) -> &'static str {
        match self {
            LinkStyle::Solid => "--",
            LinkStyle::Dashed => "..",
        }
    }
}

/// Relationship type between classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationshipKind {
    Inheritance,
    Composition,
    Aggregation,
    Association,
    Dependency,
    Realization,
}

impl RelationshipKind {
    pub const ALL: [RelationshipKind; 6] = [
        RelationshipKind::Inheritance,
        RelationshipKind::Composition,
        RelationshipKind::Aggregation,
        RelationshipKind::Association,
        RelationshipKind::Dependency,
        RelationshipKind::Realization,
    ];

    /// Arrow glyph for this relationship when the diagram reads in `direction`
    ///
    /// With `Down` the general or owning side is written first, so the head
    /// sits on the left; `Up` mirrors it.
    pub fn glyph(self, direction: Direction) -> &'static str {
        match (self, direction) {
            (RelationshipKind::Inheritance, Direction::Down) => "<|--",
            (RelationshipKind::Inheritance, Direction::Up) => "--|>",
            (RelationshipKind::Composition, Direction::Down) => "*--",
            (RelationshipKind::Composition, Direction::Up) => "--*",
            (RelationshipKind::Aggregation, Direction::Down) => "o--",
            (RelationshipKind::Aggregation, Direction::Up) => "--o",
            (RelationshipKind::Association, Direction::Down) => "<--",
            (RelationshipKind::Association, Direction::Up) => "-->",
            (RelationshipKind::Dependency, Direction::Down) => "<..",
            (RelationshipKind::Dependency, Direction::Up) => "..>",
            (RelationshipKind::Realization, Direction::Down) => "<|..",
            (RelationshipKind::Realization, Direction::Up) => "..|>",
        }
    }

    pub fn link_style(self) -> LinkStyle {
        match self {
            RelationshipKind::Dependency | RelationshipKind::Realization => LinkStyle::Dashed,
            _ => LinkStyle::Solid,
        }
    }
}

/// A relationship between classes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    pub from: String,
    pub to: String,
    pub kind: RelationshipKind,
    pub direction: Direction,
}

impl Relationship {
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        kind: RelationshipKind,
        direction: Direction,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            kind,
            direction,
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.from, self.kind.glyph(self.direction), self.to)
    }
}

/// One entry of the diagram body, kept in emission order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Relationship(Relationship),
    Class(ClassBlock),
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Relationship(rel) => fmt::Display::fmt(rel, f),
            Statement::Class(block) => fmt::Display::fmt(block, f),
        }
    }
}

/// Class diagram database
#[derive(Debug, Clone, Default)]
pub struct ClassDatabase {
    statements: Vec<Statement>,
}

impl ClassDatabase {
    pub fn new() -> Self {
        Self {
            statements: Vec::new(),
        }
    }

    pub fn add_class(&mut self, block: ClassBlock) {
        self.statements.push(Statement::Class(block));
    }

    pub fn add_relationship(&mut self, rel: Relationship) {
        self.statements.push(Statement::Relationship(rel));
    }

    pub fn classes(&self) -> impl Iterator<Item = &ClassBlock> {
        self.statements.iter().filter_map(|s| match s {
            Statement::Class(block) => Some(block),
            Statement::Relationship(_) => None,
        })
    }

    pub fn relationships(&self) -> impl Iterator<Item = &Relationship> {
        self.statements.iter().filter_map(|s| match s {
            Statement::Relationship(rel) => Some(rel),
            Statement::Class(_) => None,
        })
    }
}

impl Database for ClassDatabase {
    type Node = ClassBlock;
    type Edge = Relationship;

    fn header(&self) -> &'static str {
        CLASS_DIAGRAM_HEADER
    }

    fn nodes(&self) -> impl Iterator<Item = &Self::Node> {
        self.classes()
    }

    fn edges(&self) -> impl Iterator<Item = &Self::Edge> {
        self.relationships()
    }

    fn to_markup(&self) -> String {
        let mut out = String::from(self.header());
        for statement in &self.statements {
            out.push('\n');
            out.push_str(&statement.to_string());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_line_display() {
        let line = MemberLine::method(
            Visibility::Public,
            "mytest",
            vec!["a".to_string()],
            "str",
        )
        .with_classifier(Some(Classifier::Static));
        assert_eq!(line.to_string(), "+mytest(a)$ str");
        assert!(line.is_method());
    }

    #[test]
    fn test_method_line_multiple_params() {
        let line = MemberLine::method(
            Visibility::Protected,
            "_merge",
            vec!["left".to_string(), "right".to_string()],
            "list",
        );
        assert_eq!(line.to_string(), "#_merge(left, right) list");
    }

    #[test]
    fn test_field_line_display() {
        let line = MemberLine::field(Visibility::Private, "bool", "test4");
        assert_eq!(line.to_string(), "-bool test4");
        assert!(!line.is_method());
    }

    #[test]
    fn test_empty_block_display() {
        assert_eq!(ClassBlock::new("Empty").to_string(), "class Empty{\n}");
    }

    #[test]
    fn test_sort_is_stable_within_rank() {
        let mut block = ClassBlock::new("Sorted");
        block.add_line(MemberLine::field(Visibility::Private, "int", "a"));
        block.add_line(MemberLine::field(Visibility::Public, "int", "b"));
        block.add_line(MemberLine::field(Visibility::Protected, "int", "c"));
        block.add_line(MemberLine::field(Visibility::Public, "int", "d"));
        block.sort_by_visibility();

        let names: Vec<_> = block.lines.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["b", "d", "c", "a"]);
    }

    #[test]
    fn test_marker_glyphs() {
        let glyphs: Vec<char> = [
            Visibility::Public,
            Visibility::Private,
            Visibility::Protected,
            Visibility::Package,
        ]
        .into_iter()
        .map(Visibility::to_char)
        .collect();
        assert_eq!(glyphs, vec!['+', '-', '#', '~']);
        assert_eq!(Classifier::Abstract.to_char(), '*');
        assert_eq!(Classifier::Static.to_char(), '$');
    }

    #[test]
    fn test_glyphs_mirror_between_directions() {
        for kind in RelationshipKind::ALL {
            let down = kind.glyph(Direction::Down);
            let up = kind.glyph(Direction::Up);
            assert_ne!(down, up);
            assert!(down.contains(kind.link_style().glyph()));
            assert!(up.contains(kind.link_style().glyph()));
        }
    }

    #[test]
    fn test_relationship_display() {
        let rel = Relationship::new("Base", "Mid", RelationshipKind::Inheritance, Direction::Down);
        assert_eq!(rel.to_string(), "Base <|-- Mid");
        let rel = Relationship::new("Owner", "Part", RelationshipKind::Composition, Direction::Up);
        assert_eq!(rel.to_string(), "Owner --* Part");
    }

    #[test]
    fn test_database_markup_keeps_statement_order() {
        let mut db = ClassDatabase::new();
        db.add_relationship(Relationship::new(
            "A",
            "B",
            RelationshipKind::Inheritance,
            Direction::Down,
        ));
        db.add_class(ClassBlock::new("A"));
        db.add_class(ClassBlock::new("B"));

        assert_eq!(db.node_count(), 2);
        assert_eq!(db.edge_count(), 1);
        assert_eq!(db.to_markup(), "classDiagram\nA <|-- B\nclass A{\n}\nclass B{\n}");
    }

    #[test]
    fn test_empty_database_is_header_only() {
        let db = ClassDatabase::new();
        assert_eq!(db.node_count(), 0);
        assert_eq!(db.edge_count(), 0);
        assert_eq!(db.to_markup(), CLASS_DIAGRAM_HEADER);
    }
}
