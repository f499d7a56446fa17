//! Class diagram plugin
//!
//! Walks declared type hierarchies and assembles Mermaid class diagrams.

mod assembler;
mod database;
mod extractor;
mod loader;
mod model;
mod visibility;
mod walker;

pub use assembler::ClassDiagram;
pub use database::{
    ClassBlock, ClassDatabase, Classifier, LinkStyle, MemberLine, Relationship, RelationshipKind,
    Statement, Visibility, CLASS_DIAGRAM_HEADER,
};
pub use extractor::{extract_members, member_lines};
pub use loader::TypeModel;
pub use model::{
    is_builtin, ClassType, ClassTypeBuilder, Describe, Field, Member, Param, TypeRef,
    BUILTIN_TYPES, ROOT_TYPE_NAME,
};
pub use visibility::{classify, is_dunder, unmangle};
pub use walker::{ancestry_names, walk_ancestry};
