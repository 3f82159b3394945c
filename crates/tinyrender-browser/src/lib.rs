//! High-level rendering API for tinyrender.
//!
//! # Scope
//!
//! This crate provides:
//! - **Document Loading** - parse markup and a stylesheet into a [`LoadedDocument`]
//! - **Rendering** - style, lay out and paint a document into a [`RenderedPage`]
//! - **Image Output** - convert the canvas into PNG or alpha-first bytes
//!
//! # Not Yet Implemented
//!
//! - Extracting `<style>` elements from the markup
//! - Loading resources from the network

pub mod renderer;

pub use tinyrender_css as css;
pub use tinyrender_dom as dom;
pub use tinyrender_html as html;

use std::fmt::{self, Write as _};

use anyhow::{Context, Result};
use tinyrender_common::warning::clear_warnings;
use tinyrender_css::{
    BoxType, Canvas, Dimensions, DisplayList, LayoutBox, Rect, Stylesheet, build_display_list,
    layout_tree, paint_display_list, parse_stylesheet, style_tree,
};
use tinyrender_dom::{Node, NodeType};

/// Viewport configuration for a render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Viewport width in pixels. Also the width of the root containing block.
    pub width: u32,
    /// Viewport height in pixels.
    pub height: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

impl RenderOptions {
    /// The initial containing block: viewport width, zero height.
    #[must_use]
    pub fn containing_block(&self) -> Dimensions {
        let mut viewport = Dimensions::default();
        viewport.content.width = self.width as f32;
        viewport
    }

    /// Canvas bounds covering the whole viewport.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width as f32, self.height as f32)
    }
}

/// The output of a render.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    /// Drawing commands in paint order.
    pub display_list: DisplayList,
    /// The rasterized viewport.
    pub canvas: Canvas,
}

/// A parsed document and the stylesheet that applies to it.
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    /// Parsed document tree
    pub dom: Node,
    /// Parsed stylesheet
    pub stylesheet: Stylesheet,
}

/// Parse markup and a stylesheet into a [`LoadedDocument`].
///
/// # Errors
///
/// Returns an error if either source fails to parse.
pub fn parse_document(html: &str, css: &str) -> Result<LoadedDocument> {
    let dom = tinyrender_html::parse(html).context("failed to parse HTML")?;
    let stylesheet = parse_stylesheet(css).context("failed to parse CSS")?;
    Ok(LoadedDocument { dom, stylesheet })
}

/// Parse and render in one step.
///
/// # Errors
///
/// Returns an error if parsing fails or the root element is `display: none`.
pub fn render(html: &str, css: &str, options: &RenderOptions) -> Result<RenderedPage> {
    parse_document(html, css)?.render(options)
}

impl LoadedDocument {
    /// Run style, layout, paint and rasterization.
    ///
    /// Warnings recorded by earlier renders are cleared first.
    ///
    /// # Errors
    ///
    /// Returns an error if the root element is `display: none`.
    pub fn render(&self, options: &RenderOptions) -> Result<RenderedPage> {
        clear_warnings();

        // STEP 1: Cascade
        let styled = style_tree(&self.dom, &self.stylesheet);

        // STEP 2: Layout against the viewport-wide containing block
        let layout =
            layout_tree(&styled, options.containing_block()).context("failed to lay out document")?;

        // STEP 3: Paint
        let display_list = build_display_list(&layout);

        // STEP 4: Rasterize
        let canvas = paint_display_list(&display_list, options.bounds());

        Ok(RenderedPage {
            display_list,
            canvas,
        })
    }

    /// Lay out the document and describe the box tree, one box per line.
    ///
    /// # Errors
    ///
    /// Returns an error if the root element is `display: none`.
    pub fn layout_outline(&self, options: &RenderOptions) -> Result<String> {
        let styled = style_tree(&self.dom, &self.stylesheet);
        let layout =
            layout_tree(&styled, options.containing_block()).context("failed to lay out document")?;

        let mut out = String::new();
        write_layout_box(&mut out, &layout, 0).context("failed to format layout tree")?;
        Ok(out)
    }
}

fn write_layout_box(
    out: &mut impl fmt::Write,
    layout_box: &LayoutBox<'_>,
    depth: usize,
) -> fmt::Result {
    let indent = "  ".repeat(depth);
    let label = match layout_box.box_type {
        BoxType::BlockNode(styled) => format!("block {}", node_label(styled.node)),
        BoxType::InlineNode(styled) => format!("inline {}", node_label(styled.node)),
        BoxType::AnonymousBlock => "anonymous".to_string(),
    };
    let rect = layout_box.dimensions.border_box();
    writeln!(
        out,
        "{indent}{label} [x={} y={} w={} h={}]",
        rect.x, rect.y, rect.width, rect.height
    )?;

    for child in &layout_box.children {
        write_layout_box(out, child, depth + 1)?;
    }
    Ok(())
}

fn node_label(node: &Node) -> String {
    match &node.node_type {
        NodeType::Element(data) => format!("<{}>", data.tag_name),
        NodeType::Text(_) => "#text".to_string(),
    }
}
