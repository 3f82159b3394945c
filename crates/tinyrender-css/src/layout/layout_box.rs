//! Layout box types and the block layout algorithm.
//!
//! [§ 9.2 Controlling box generation](https://www.w3.org/TR/CSS2/visuren.html#box-gen)

#[cfg(feature = "layout-trace")]
use std::cell::Cell;

use thiserror::Error;
use tinyrender_common::warning::warn_once;

use crate::style::{Display, StyledNode};
use crate::values::{Unit, Value};

use super::box_model::Dimensions;

#[cfg(feature = "layout-trace")]
thread_local! {
    static LAYOUT_DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// A styled tree that cannot be turned into a box tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// [§ 2.5 Box Generation](https://www.w3.org/TR/css-display-3/#box-generation)
    ///
    /// "The element and its descendants generate no boxes or text runs."
    /// At the root that leaves nothing to lay out.
    #[error("root element has 'display: none' and generates no box")]
    DisplayNoneRoot,
}

/// [§ 9.2 Controlling box generation](https://www.w3.org/TR/CSS2/visuren.html#box-gen)
///
/// The kind of box a node generates. Boxes generated by an element carry the
/// element's styled node; only layout-generated anonymous boxes do not.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoxType<'a> {
    /// [§ 9.2.1 Block-level elements and block boxes](https://www.w3.org/TR/CSS2/visuren.html#block-boxes)
    BlockNode(&'a StyledNode<'a>),

    /// [§ 9.2.2 Inline-level elements and inline boxes](https://www.w3.org/TR/CSS2/visuren.html#inline-boxes)
    InlineNode(&'a StyledNode<'a>),

    /// [§ 9.2.1.1 Anonymous block boxes](https://www.w3.org/TR/CSS2/visuren.html#anonymous-block-level)
    ///
    /// "...if a block container box has a block-level box inside it, then we
    /// force it to have only block-level boxes inside it."
    ///
    /// Wraps a run of consecutive inline children of a block box.
    AnonymousBlock,
}

/// A node in the layout tree.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutBox<'a> {
    /// Geometry, filled in by [`LayoutBox::layout`].
    pub dimensions: Dimensions,
    /// What generated this box.
    pub box_type: BoxType<'a>,
    /// Child boxes in tree order.
    pub children: Vec<LayoutBox<'a>>,
}

/// [§ 9.2 Controlling box generation](https://www.w3.org/TR/CSS2/visuren.html#box-gen)
///
/// Build the tree of boxes for `style_node` and its descendants, without
/// computing any geometry.
///
/// Block children become direct children of their parent. Each run of inline
/// children of a block box is wrapped in one anonymous block. Children with
/// `display: none` are skipped along with their subtree.
///
/// # Errors
///
/// Returns [`LayoutError::DisplayNoneRoot`] if the root has `display: none`.
pub fn build_layout_tree<'a>(style_node: &'a StyledNode<'a>) -> Result<LayoutBox<'a>, LayoutError> {
    // STEP 1: Create the root box.
    let mut root = LayoutBox::new(match style_node.display() {
        Display::Block => BoxType::BlockNode(style_node),
        Display::Inline => BoxType::InlineNode(style_node),
        Display::None => return Err(LayoutError::DisplayNoneRoot),
    });

    // STEP 2: Create the descendant boxes.
    for child in &style_node.children {
        match child.display() {
            Display::Block => root.children.push(build_layout_tree(child)?),
            Display::Inline => root
                .inline_container()
                .children
                .push(build_layout_tree(child)?),
            Display::None => {}
        }
    }

    Ok(root)
}

impl<'a> LayoutBox<'a> {
    /// Create a box with zeroed geometry and no children.
    #[must_use]
    pub fn new(box_type: BoxType<'a>) -> Self {
        Self {
            dimensions: Dimensions::default(),
            box_type,
            children: Vec::new(),
        }
    }

    /// The styled node that generated this box, if any.
    #[must_use]
    pub const fn style_node(&self) -> Option<&'a StyledNode<'a>> {
        match self.box_type {
            BoxType::BlockNode(node) | BoxType::InlineNode(node) => Some(node),
            BoxType::AnonymousBlock => None,
        }
    }

    /// Where a new inline child should go.
    ///
    /// Inline and anonymous boxes take inline children directly. A block box
    /// reuses its trailing anonymous block, creating one if the last child is
    /// anything else.
    fn inline_container(&mut self) -> &mut Self {
        match self.box_type {
            BoxType::InlineNode(_) | BoxType::AnonymousBlock => self,
            BoxType::BlockNode(_) => {
                let has_trailing_anonymous = matches!(
                    self.children.last(),
                    Some(Self {
                        box_type: BoxType::AnonymousBlock,
                        ..
                    })
                );
                if !has_trailing_anonymous {
                    self.children.push(Self::new(BoxType::AnonymousBlock));
                }
                let last = self.children.len() - 1;
                &mut self.children[last]
            }
        }
    }

    /// Lay out this box and its descendants against `containing_block`.
    ///
    /// [§ 10.1 Definition of containing block](https://www.w3.org/TR/CSS2/visudet.html#containing-block-details)
    ///
    /// "For other elements, if the element's position is 'relative' or
    /// 'static', the containing block is formed by the content edge of the
    /// nearest block container ancestor box."
    ///
    /// The containing block's `content.height` is the height already used by
    /// earlier siblings; a block box is placed directly below it.
    ///
    /// NOTE: Only block boxes are laid out. Inline and anonymous boxes keep
    /// zero geometry and their descendants are not visited.
    pub fn layout(&mut self, containing_block: Dimensions) {
        #[cfg(feature = "layout-trace")]
        let _depth = {
            let depth = LAYOUT_DEPTH.with(|d| {
                let current = d.get();
                d.set(current + 1);
                current
            });
            eprintln!(
                "[LAYOUT DEPTH] depth={depth} box={} children={} cb={:?}",
                self.type_name(),
                self.children.len(),
                containing_block.content
            );
            // Guard struct decrements depth counter on all return paths.
            struct DepthGuard;
            impl Drop for DepthGuard {
                fn drop(&mut self) {
                    LAYOUT_DEPTH.with(|d| d.set(d.get() - 1));
                }
            }
            DepthGuard
        };

        match self.box_type {
            BoxType::BlockNode(style) => self.layout_block(style, containing_block),
            BoxType::InlineNode(_) | BoxType::AnonymousBlock => {
                warn_once(
                    "Layout",
                    "inline layout is not implemented; inline content is not laid out",
                );
            }
        }
    }

    #[cfg(feature = "layout-trace")]
    const fn type_name(&self) -> &'static str {
        match self.box_type {
            BoxType::BlockNode(_) => "block",
            BoxType::InlineNode(_) => "inline",
            BoxType::AnonymousBlock => "anonymous",
        }
    }

    /// [§ 10.3.3](https://www.w3.org/TR/CSS2/visudet.html#blockwidth)
    /// [§ 10.6.3](https://www.w3.org/TR/CSS2/visudet.html#normal-block)
    ///
    /// Lay out a block-level element and its descendants.
    fn layout_block(&mut self, style: &StyledNode<'_>, containing_block: Dimensions) {
        // STEP 1: Width depends on the parent, so it comes first.
        self.calculate_block_width(style, containing_block);

        // STEP 2: Position the box below the siblings already laid out.
        self.calculate_block_position(style, containing_block);

        // STEP 3: Children are positioned inside this box's content area.
        self.layout_block_children();

        // STEP 4: Auto height depends on the children, so it comes last.
        self.calculate_block_height(style);
    }

    /// [§ 10.3.3 Block-level, non-replaced elements in normal flow](https://www.w3.org/TR/CSS2/visudet.html#blockwidth)
    ///
    /// Calculate the width of a block-level box.
    ///
    /// Sets the horizontal margin, border and padding widths and the content
    /// width.
    fn calculate_block_width(&mut self, style: &StyledNode<'_>, containing_block: Dimensions) {
        // "The following constraints must hold among the used values of the
        // other properties:
        //
        //   'margin-left' + 'border-left-width' + 'padding-left' + 'width' +
        //   'padding-right' + 'border-right-width' + 'margin-right'
        //   = width of containing block"
        let zero = Value::Length(0.0, Unit::Px);

        // STEP 1: Read the specified values. `width` has initial value auto;
        // margins, borders and padding are 0.
        let mut width = style
            .value("width")
            .unwrap_or_else(|| Value::Keyword("auto".to_string()));

        let mut margin_left = style.lookup("margin-left", "margin", &zero);
        let mut margin_right = style.lookup("margin-right", "margin", &zero);

        let border_left = style.lookup("border-left-width", "border-width", &zero);
        let border_right = style.lookup("border-right-width", "border-width", &zero);

        let padding_left = style.lookup("padding-left", "padding", &zero);
        let padding_right = style.lookup("padding-right", "padding", &zero);

        // STEP 2: Sum the horizontal extent. auto counts as 0.
        let total: f32 = [
            &margin_left,
            &margin_right,
            &border_left,
            &border_right,
            &padding_left,
            &padding_right,
            &width,
        ]
        .into_iter()
        .map(Value::to_px)
        .sum();

        // STEP 3: "If 'width' is not 'auto' and 'border-left-width' +
        // 'padding-left' + 'width' + 'padding-right' + 'border-right-width'
        // (plus any of 'margin-left' or 'margin-right' that are not 'auto')
        // is larger than the width of the containing block, then any 'auto'
        // values for 'margin-left' or 'margin-right' are, for the following
        // rules, treated as zero."
        if !width.is_keyword("auto") && total > containing_block.content.width {
            if margin_left.is_keyword("auto") {
                margin_left = zero.clone();
            }
            if margin_right.is_keyword("auto") {
                margin_right = zero.clone();
            }
        }

        // STEP 4: Resolve the auto values so the constraint holds.
        // Negative underflow means the box overflows its containing block.
        let underflow = containing_block.content.width - total;

        match (
            width.is_keyword("auto"),
            margin_left.is_keyword("auto"),
            margin_right.is_keyword("auto"),
        ) {
            // "If all of the above have a computed value other than 'auto',
            // the values are said to be 'over-constrained' ... the specified
            // value of 'margin-right' is ignored and the value is calculated
            // so as to make the equality true."
            (false, false, false) => {
                margin_right = Value::Length(margin_right.to_px() + underflow, Unit::Px);
            }

            // "If there is exactly one value specified as 'auto', its used
            // value follows from the equality."
            (false, false, true) => {
                margin_right = Value::Length(underflow, Unit::Px);
            }
            (false, true, false) => {
                margin_left = Value::Length(underflow, Unit::Px);
            }

            // "If both 'margin-left' and 'margin-right' are 'auto', their used
            // values are equal. This horizontally centers the element with
            // respect to the edges of the containing block."
            (false, true, true) => {
                margin_left = Value::Length(underflow / 2.0, Unit::Px);
                margin_right = Value::Length(underflow / 2.0, Unit::Px);
            }

            // "If 'width' is set to 'auto', any other 'auto' values become
            // '0' and 'width' follows from the resulting equality."
            (true, _, _) => {
                if margin_left.is_keyword("auto") {
                    margin_left = zero.clone();
                }
                if margin_right.is_keyword("auto") {
                    margin_right = zero.clone();
                }

                if underflow >= 0.0 {
                    width = Value::Length(underflow, Unit::Px);
                } else {
                    // Width can't be negative. Adjust the right margin instead.
                    width = zero;
                    margin_right = Value::Length(margin_right.to_px() + underflow, Unit::Px);
                }
            }
        }

        // STEP 5: Store the used values.
        let d = &mut self.dimensions;
        d.content.width = width.to_px();

        d.padding.left = padding_left.to_px();
        d.padding.right = padding_right.to_px();

        d.border.left = border_left.to_px();
        d.border.right = border_right.to_px();

        d.margin.left = margin_left.to_px();
        d.margin.right = margin_right.to_px();
    }

    /// [§ 9.4.1 Block formatting contexts](https://www.w3.org/TR/CSS2/visuren.html#block-formatting)
    ///
    /// Calculate the position of a block-level box.
    ///
    /// "In a block formatting context, boxes are laid out one after the other,
    /// vertically, beginning at the top of a containing block."
    ///
    /// Sets the vertical margin, border and padding widths and the content
    /// origin.
    fn calculate_block_position(&mut self, style: &StyledNode<'_>, containing_block: Dimensions) {
        let zero = Value::Length(0.0, Unit::Px);
        let d = &mut self.dimensions;

        // STEP 1: Resolve the vertical edges. There are no auto margins
        // vertically; auto resolves to 0.
        d.margin.top = style.lookup("margin-top", "margin", &zero).to_px();
        d.margin.bottom = style.lookup("margin-bottom", "margin", &zero).to_px();

        d.border.top = style
            .lookup("border-top-width", "border-width", &zero)
            .to_px();
        d.border.bottom = style
            .lookup("border-bottom-width", "border-width", &zero)
            .to_px();

        d.padding.top = style.lookup("padding-top", "padding", &zero).to_px();
        d.padding.bottom = style.lookup("padding-bottom", "padding", &zero).to_px();

        // STEP 2: "Each box's left outer edge touches the left edge of the
        // containing block."
        d.content.x = containing_block.content.x + d.margin.left + d.border.left + d.padding.left;

        // STEP 3: The containing block's height so far is the space taken by
        // earlier siblings, so this box starts right below them.
        d.content.y = containing_block.content.y
            + containing_block.content.height
            + d.margin.top
            + d.border.top
            + d.padding.top;
    }

    /// [§ 9.4.1 Block formatting contexts](https://www.w3.org/TR/CSS2/visuren.html#block-formatting)
    ///
    /// Lay out the children in order, growing this box's content height by
    /// each child's margin box so the next child lands below it.
    ///
    /// NOTE: Margins do not collapse.
    fn layout_block_children(&mut self) {
        let d = &mut self.dimensions;
        for child in &mut self.children {
            child.layout(*d);
            d.content.height += child.dimensions.margin_box().height;
        }
    }

    /// [§ 10.6.3 Block-level non-replaced elements in normal flow](https://www.w3.org/TR/CSS2/visudet.html#normal-block)
    ///
    /// An explicit pixel `height` replaces the height accumulated from the
    /// children. Otherwise the box is exactly as tall as its content.
    fn calculate_block_height(&mut self, style: &StyledNode<'_>) {
        if let Some(Value::Length(height, Unit::Px)) = style.value("height") {
            self.dimensions.content.height = height;
        }
    }
}

/// Build the box tree for `style_node` and lay it out.
///
/// The root is positioned like any block child: below the height already
/// recorded in `containing_block.content.height`. Pass a zero height to
/// start at the top of the content area.
///
/// # Errors
///
/// Returns [`LayoutError::DisplayNoneRoot`] if the root has `display: none`.
pub fn layout_tree<'a>(
    style_node: &'a StyledNode<'a>,
    containing_block: Dimensions,
) -> Result<LayoutBox<'a>, LayoutError> {
    let mut root_box = build_layout_tree(style_node)?;
    root_box.layout(containing_block);
    Ok(root_box)
}
