//! Tests for document node construction and element attribute helpers.

use tinyrender_dom::{AttributesMap, Node, NodeType};

fn attrs(pairs: &[(&str, &str)]) -> AttributesMap {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

#[test]
fn test_text_node_has_no_children() {
    let node = Node::text("hello");
    assert!(node.children.is_empty());
    assert_eq!(node.as_text(), Some("hello"));
    assert!(node.as_element().is_none());
}

#[test]
fn test_element_keeps_children_in_order() {
    let node = Node::element(
        "div",
        AttributesMap::new(),
        vec![Node::text("a"), Node::element("p", AttributesMap::new(), vec![])],
    );

    assert_eq!(node.children.len(), 2);
    assert_eq!(node.children[0].as_text(), Some("a"));
    assert!(matches!(
        &node.children[1].node_type,
        NodeType::Element(data) if data.tag_name == "p"
    ));
}

#[test]
fn test_id_lookup() {
    let node = Node::element("div", attrs(&[("id", "main")]), vec![]);
    let element = node.as_element().unwrap();
    assert_eq!(element.id().map(String::as_str), Some("main"));

    let plain = Node::element("div", AttributesMap::new(), vec![]);
    assert!(plain.as_element().unwrap().id().is_none());
}

#[test]
fn test_classes_split_on_any_whitespace() {
    let node = Node::element("div", attrs(&[("class", "  a\tb\n  c ")]), vec![]);
    let classes = node.as_element().unwrap().classes();

    assert_eq!(classes.len(), 3);
    assert!(classes.contains("a"));
    assert!(classes.contains("b"));
    assert!(classes.contains("c"));
}

#[test]
fn test_classes_empty_without_attribute() {
    let node = Node::element("span", AttributesMap::new(), vec![]);
    assert!(node.as_element().unwrap().classes().is_empty());
}
