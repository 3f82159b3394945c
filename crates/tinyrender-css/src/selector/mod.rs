//! CSS Selector matching
//!
//! This module implements the subset of
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/) needed for the
//! cascade: a single compound selector made of an optional type, an optional
//! id and any number of classes. There are no combinators.

use tinyrender_dom::ElementData;

/// [§ 5 Elemental selectors](https://www.w3.org/TR/selectors-4/#elemental-selectors)
///
/// A compound of simple conditions on a single element. Every condition that
/// is present must hold for the selector to match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimpleSelector {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// `None` for the universal selector `*` or when the type is omitted.
    pub tag_name: Option<String>,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    pub id: Option<String>,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    pub class: Vec<String>,
}

/// A selector in a rule's selector list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// A single compound selector with no combinators.
    Simple(SimpleSelector),
}

/// [§ 17 Calculating a selector's specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
///
/// "A selector's specificity is calculated for a given element as follows:
/// - count the number of ID selectors in the selector (= A)
/// - count the number of class selectors, attributes selectors, and
///   pseudo-classes in the selector (= B)
/// - count the number of type selectors and pseudo-elements in the selector (= C)"
///
/// "Specificities are compared by comparing the three components in order:
/// the specificity with a larger A value is more specific; if the two A values
/// are tied, then the specificity with a larger B value is more specific; if
/// the two B values are also tied, then the specificity with a larger C value
/// is more specific; if all the values are tied, the two specificities are equal."
///
/// The derived `Ord` compares fields in declaration order, which is exactly
/// the lexicographic (A, B, C) comparison above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Specificity(pub u32, pub u32, pub u32);

impl Selector {
    /// Compute this selector's specificity.
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        match self {
            Self::Simple(simple) => simple.specificity(),
        }
    }

    /// Does this selector match `element`?
    #[must_use]
    pub fn matches(&self, element: &ElementData) -> bool {
        match self {
            Self::Simple(simple) => simple.matches(element),
        }
    }
}

impl SimpleSelector {
    /// (has id, number of classes, has type)
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        Specificity(
            u32::from(self.id.is_some()),
            u32::try_from(self.class.len()).unwrap_or(u32::MAX),
            u32::from(self.tag_name.is_some()),
        )
    }

    /// [§ 3.3 Structure and Terminology](https://www.w3.org/TR/selectors-4/#structure)
    ///
    /// "A compound selector ... represents a set of simultaneous conditions on
    /// a single element."
    #[must_use]
    pub fn matches(&self, element: &ElementData) -> bool {
        // STEP 1: Type selector.
        if self.tag_name.as_ref().is_some_and(|name| *name != element.tag_name) {
            return false;
        }

        // STEP 2: ID selector.
        if self.id.as_ref().is_some_and(|id| element.id() != Some(id)) {
            return false;
        }

        // STEP 3: Class selectors. Every listed class must be present.
        let element_classes = element.classes();
        self.class
            .iter()
            .all(|class| element_classes.contains(class.as_str()))
    }
}
