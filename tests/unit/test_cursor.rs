//! Unit tests for CircularCursorList
//!
//! Tests cover the traversal scenarios from the cursor state machine:
//! linear parking, circular wraparound, empty lists and mode switches.

use utilkit::CircularCursorList;

fn abc() -> CircularCursorList<&'static str> {
    vec!["A", "B", "C"].into()
}

#[test]
fn test_linear_scenario() {
    let mut list = abc();
    list.reset_index();
    let seen: Vec<Option<&str>> = (0..5).map(|_| list.get_next().copied()).collect();
    assert_eq!(seen, vec![Some("A"), Some("B"), Some("C"), None, None]);
}

#[test]
fn test_circular_scenario() {
    let mut list = abc();
    list.set_circular(true);
    list.reset_index();
    let seen: Vec<&str> = (0..4).map(|_| *list.get_next().unwrap()).collect();
    assert_eq!(seen, vec!["A", "B", "C", "A"]);

    list.reset_index();
    assert_eq!(list.get_previous(), Some(&"C"));
}

#[test]
fn test_empty_list_in_both_modes() {
    let mut list: CircularCursorList<String> = CircularCursorList::new();
    for circular in [false, true] {
        list.set_circular(circular);
        assert_eq!(list.get_next(), None);
        assert_eq!(list.get_previous(), None);
    }
}

#[test]
fn test_back_and_forth() {
    let mut list = abc();
    assert_eq!(list.get_next(), Some(&"A"));
    assert_eq!(list.get_next(), Some(&"B"));
    assert_eq!(list.get_previous(), Some(&"A"));
    assert_eq!(list.get_next(), Some(&"B"));
}

#[test]
fn test_reset_after_wrap() {
    let mut list = abc();
    list.set_circular(true);
    for _ in 0..7 {
        list.get_next();
    }
    assert_eq!(list.current(), Some(&"A"));
    list.reset_index();
    assert_eq!(list.current(), None);
    assert_eq!(list.get_next(), Some(&"A"));
}

#[test]
fn test_disabling_circular_mid_walk() {
    let mut list = abc();
    list.set_circular(true);
    list.get_next();
    list.get_next();
    list.get_next();
    list.set_circular(false);
    assert_eq!(list.get_next(), None);
    assert_eq!(list.get_previous(), Some(&"C"));
}

#[test]
fn test_push_extends_walk() {
    let mut list = abc();
    for _ in 0..3 {
        list.get_next();
    }
    list.push("D");
    assert_eq!(list.get_next(), Some(&"D"));
}
