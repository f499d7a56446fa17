//! Property tests for diagram ordering invariants

use std::sync::Arc;

use lineage::build;
use lineage::plugins::class::*;
use lineage::Direction;
use proptest::prelude::*;

/// Build a single-inheritance chain `T0 <- T1 <- ... <- Tn` and return the leaf
fn chain(depth: usize, members: &[Vec<String>]) -> ClassType {
    let mut current: Option<Arc<ClassType>> = None;
    for level in 0..=depth {
        let mut builder = ClassType::builder(format!("T{}", level));
        if let Some(base) = current.take() {
            builder = builder.extends(base);
        }
        for name in members.get(level).into_iter().flatten() {
            builder = builder.method(name.as_str(), &["self"], "None");
        }
        current = Some(Arc::new(builder.build()));
    }
    let leaf = current.expect("chain has at least one level");
    (*leaf).clone()
}

fn class_names(diagram: &str) -> Vec<&str> {
    diagram
        .lines()
        .filter_map(|line| line.strip_prefix("class "))
        .map(|line| line.trim_end_matches('{'))
        .collect()
}

proptest! {
    #[test]
    fn inheritance_lines_are_ancestry_minus_one(depth in 0usize..8) {
        let leaf = chain(depth, &[]);
        for direction in Direction::ALL {
            let diagram = build(leaf.clone(), direction.as_str()).unwrap();
            let glyph = RelationshipKind::Inheritance.glyph(direction);
            let count = diagram.lines().filter(|l| l.contains(glyph)).count();
            prop_assert_eq!(count, depth);
        }
    }

    #[test]
    fn up_is_reverse_of_down(depth in 0usize..8) {
        let leaf = chain(depth, &[]);
        let down = build(leaf.clone(), "down").unwrap();
        let up = build(leaf, "up").unwrap();

        let mut down_names = class_names(&down);
        down_names.reverse();
        prop_assert_eq!(down_names, class_names(&up));
    }

    #[test]
    fn unknown_directions_are_rejected(direction in "[a-zA-Z]{1,10}") {
        prop_assume!(direction != "up" && direction != "down");
        let result = build(chain(2, &[]), &direction);
        let is_invalid_direction = matches!(result, Err(lineage::DiagramError::InvalidDirection { .. }));
        prop_assert!(is_invalid_direction);
    }

    #[test]
    fn dunder_members_never_render(names in prop::collection::vec("[a-z]{1,6}", 1..6)) {
        let members: Vec<String> = names.iter().map(|n| format!("__{}__", n)).collect();
        let diagram = build(chain(0, &[members]), "down").unwrap();
        prop_assert_eq!(diagram, "classDiagram\nclass T0{\n}");
    }

    #[test]
    fn block_bodies_are_rank_sorted(names in prop::collection::vec("_{0,2}[a-z]{1,6}", 0..10)) {
        let leaf = chain(0, &[names]);
        let block = extract_members(&leaf);
        let ranks: Vec<u8> = block.lines.iter().map(|l| l.visibility.rank()).collect();
        let mut sorted = ranks.clone();
        sorted.sort();
        prop_assert_eq!(ranks, sorted);
    }
}
