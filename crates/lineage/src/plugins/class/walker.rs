//! Inheritance walking
//!
//! Follows the primary base of a type until the universal root and extracts
//! the class block of every type on the way.

use tracing::trace;

use super::database::ClassBlock;
use super::extractor::extract_members;
use super::model::ClassType;

/// Walk the primary-base chain of `leaf`
///
/// Returns one block per type, leaf first. The universal root is never part
/// of the result; a type without bases ends the walk.
pub fn walk_ancestry(leaf: &ClassType) -> Vec<ClassBlock> {
    let mut ancestry = vec![extract_members(leaf)];
    let mut current = leaf;

    while let Some(base) = current.primary_base() {
        if base.is_root() {
            break;
        }
        trace!(class = current.name(), base = base.name(), "Following primary base");
        ancestry.push(extract_members(base));
        current = base.as_ref();
    }

    ancestry
}

/// Names along the primary-base chain of `leaf`, leaf first
pub fn ancestry_names(leaf: &ClassType) -> Vec<String> {
    walk_ancestry(leaf).into_iter().map(|block| block.name).collect()
}
