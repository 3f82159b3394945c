//! CSS Cascading
//!
//! Matches stylesheet rules against document elements and builds the
//! [`StyledNode`] tree per
//! [CSS Cascading and Inheritance Level 4](https://www.w3.org/TR/css-cascade-4/).
//!
//! NOTE: Only specificity participates in cascade sorting. There is no
//! inheritance, no origin or importance, and no initial values: a property
//! the author never sets is simply absent from the node's map.

use tinyrender_dom::{ElementData, Node, NodeType};

use crate::parser::{Rule, Stylesheet};
use crate::selector::Specificity;
use crate::style::{PropertyMap, StyledNode};

/// [§ 6 Cascading](https://www.w3.org/TR/css-cascade-4/#cascading)
///
/// A matched rule with its specificity for cascade ordering.
type MatchedRule<'a> = (Specificity, &'a Rule);

/// [§ 6 Cascading](https://www.w3.org/TR/css-cascade-4/#cascading)
/// "The cascade takes an unordered list of declared values for a given property
/// on a given element, sorts them by their declaration's precedence..."
///
/// Apply `stylesheet` to every node of `root`, returning the styled tree.
#[must_use]
pub fn style_tree<'a>(root: &'a Node, stylesheet: &Stylesheet) -> StyledNode<'a> {
    StyledNode {
        node: root,
        specified_values: match &root.node_type {
            NodeType::Element(elem) => specified_values(elem, stylesheet),
            NodeType::Text(_) => PropertyMap::new(),
        },
        children: root
            .children
            .iter()
            .map(|child| style_tree(child, stylesheet))
            .collect(),
    }
}

/// Apply styles to a single element, returning its cascaded values.
fn specified_values(elem: &ElementData, stylesheet: &Stylesheet) -> PropertyMap {
    let mut values = PropertyMap::new();
    let mut rules = matching_rules(elem, stylesheet);

    // [§ 6.4.3 Specificity](https://www.w3.org/TR/css-cascade-4/#cascade-specificity)
    // Sort by specificity (lower first, so later ones override). The sort is
    // stable, so equal specificities keep source order.
    rules.sort_by(|a, b| a.0.cmp(&b.0));

    // Apply declarations in order
    for (_, rule) in rules {
        for declaration in &rule.declarations {
            let _ = values.insert(declaration.name.clone(), declaration.value.clone());
        }
    }
    values
}

/// Find all rules that match `elem`.
fn matching_rules<'a>(elem: &ElementData, stylesheet: &'a Stylesheet) -> Vec<MatchedRule<'a>> {
    stylesheet
        .rules
        .iter()
        .filter_map(|rule| match_rule(elem, rule))
        .collect()
}

/// If `rule` matches `elem`, return a [`MatchedRule`].
///
/// The sort key is the specificity of the first selector that matches.
/// Selectors are stored most specific first, so this is also the highest
/// specificity among the matching selectors.
fn match_rule<'a>(elem: &ElementData, rule: &'a Rule) -> Option<MatchedRule<'a>> {
    rule.selectors
        .iter()
        .find(|selector| selector.matches(elem))
        .map(|selector| (selector.specificity(), rule))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{Declaration, parse_stylesheet};
    use crate::selector::{Selector, SimpleSelector};
    use crate::values::{ColorValue, Unit, Value};
    use tinyrender_dom::AttributesMap;

    fn div_with_class(class: &str) -> Node {
        let mut attrs = AttributesMap::new();
        let _ = attrs.insert("class".to_string(), class.to_string());
        Node::element("div", attrs, vec![])
    }

    #[test]
    fn test_higher_specificity_wins_regardless_of_order() {
        let sheet = parse_stylesheet(".a { color: #ff0000; } div { color: #0000ff; }").unwrap();
        let node = div_with_class("a");
        let styled = style_tree(&node, &sheet);

        assert_eq!(
            styled.value("color"),
            Some(Value::Color(ColorValue::new(255, 0, 0, 255)))
        );
    }

    #[test]
    fn test_equal_specificity_keeps_source_order() {
        let sheet = parse_stylesheet("div { width: 1px; } div { width: 2px; }").unwrap();
        let node = div_with_class("");
        let styled = style_tree(&node, &sheet);

        assert_eq!(styled.value("width"), Some(Value::Length(2.0, Unit::Px)));
    }

    #[test]
    fn test_rule_uses_first_matching_selector() {
        // #x does not match, so .a gives the sort key.
        let rule = Rule {
            selectors: vec![
                Selector::Simple(SimpleSelector {
                    id: Some("x".to_string()),
                    ..SimpleSelector::default()
                }),
                Selector::Simple(SimpleSelector {
                    class: vec!["a".to_string()],
                    ..SimpleSelector::default()
                }),
            ],
            declarations: vec![Declaration {
                name: "display".to_string(),
                value: Value::Keyword("block".to_string()),
            }],
        };
        let node = div_with_class("a");
        let elem = node.as_element().unwrap();

        assert_eq!(
            match_rule(elem, &rule).map(|(specificity, _)| specificity),
            Some(Specificity(0, 1, 0))
        );
    }

    #[test]
    fn test_text_nodes_get_empty_map() {
        let sheet = parse_stylesheet("* { display: block; }").unwrap();
        let node = Node::element("p", AttributesMap::new(), vec![Node::text("hi")]);
        let styled = style_tree(&node, &sheet);

        assert_eq!(styled.children.len(), 1);
        assert!(styled.children[0].specified_values.is_empty());
        assert_eq!(styled.value("display"), Some(Value::Keyword("block".to_string())));
    }

    #[test]
    fn test_non_matching_rules_are_ignored() {
        let sheet = parse_stylesheet("#nope { width: 5px; } span { width: 6px; }").unwrap();
        let node = div_with_class("a");
        let styled = style_tree(&node, &sheet);
        assert!(styled.specified_values.is_empty());
    }
}
