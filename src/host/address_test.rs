use std::collections::HashSet;

use super::*;

#[test]
fn display_renders_tuple_form() {
    assert_eq!(TargetAddress::single(2).to_string(), "(2,)");
    assert_eq!(TargetAddress::slot(1, 3).to_string(), "(1, 3)");
}

#[test]
fn equality_is_structural() {
    assert_eq!(TargetAddress::slot(1, 3), TargetAddress::new(1, Some(3)));
    assert_ne!(TargetAddress::single(1), TargetAddress::slot(1, 0));

    let mut seen = HashSet::new();
    seen.insert(TargetAddress::single(4));
    assert!(seen.contains(&TargetAddress::new(4, None)));
}
