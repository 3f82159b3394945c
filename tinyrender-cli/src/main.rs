//! tinyrender CLI
//!
//! Renders an HTML document and a stylesheet to a PNG.
//!
//! Usage:
//!   tinyrender page.html --css page.css             Write output.png
//!   tinyrender page.html --css page.css -o out.png  Choose the output file
//!   tinyrender page.html --tree                     Print the layout tree
//!   tinyrender page.html --json                     Print the display list as JSON

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use owo_colors::OwoColorize;
use tinyrender_browser::renderer::save_png;
use tinyrender_browser::{RenderOptions, parse_document};
use tinyrender_common::warning::warning_count;

/// tinyrender: a tiny HTML/CSS-to-pixels renderer
#[derive(Parser, Debug)]
#[command(name = "tinyrender")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Render a page with its stylesheet
    tinyrender page.html --css page.css

    # Custom viewport and output file
    tinyrender page.html --css page.css --width 1024 --height 768 -o page.png

    # Parse inline HTML and print the box tree
    tinyrender --html '<div></div>' --tree
"#)]
struct Cli {
    /// Path to the HTML file
    #[arg(value_name = "FILE")]
    path: Option<PathBuf>,

    /// Parse HTML string directly instead of a file
    #[arg(long, value_name = "HTML", conflicts_with = "path")]
    html: Option<String>,

    /// Stylesheet to apply
    #[arg(long, value_name = "FILE")]
    css: Option<PathBuf>,

    /// Viewport width
    #[arg(long, default_value = "800")]
    width: u32,

    /// Viewport height
    #[arg(long, default_value = "600")]
    height: u32,

    /// Where to write the PNG
    #[arg(short, long, value_name = "FILE", default_value = "output.png")]
    output: PathBuf,

    /// Print the display list as JSON
    #[arg(long)]
    json: bool,

    /// Print the layout tree with computed dimensions
    #[arg(long)]
    tree: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let html = load_html(&cli)?;
    let css = match cli.css {
        Some(ref path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read '{}'", path.display()))?,
        None => String::new(),
    };

    let options = RenderOptions {
        width: cli.width,
        height: cli.height,
    };
    let doc = parse_document(&html, &css)?;

    let page = doc.render(&options)?;

    if cli.tree {
        println!("=== Layout Tree (viewport: {}x{}) ===\n", cli.width, cli.height);
        print!("{}", doc.layout_outline(&options)?);
        println!();
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&page.display_list)?);
    }

    save_png(&page.canvas, &cli.output)?;
    eprintln!(
        "{} {} ({} commands)",
        "Saved".green(),
        cli.output.display(),
        page.display_list.len()
    );

    let warnings = warning_count();
    if warnings > 0 {
        eprintln!("{}", format!("{warnings} unsupported feature warning(s)").yellow());
    }

    Ok(())
}

/// Read the HTML source from `--html` or the positional path.
fn load_html(cli: &Cli) -> anyhow::Result<String> {
    if let Some(ref html) = cli.html {
        Ok(html.clone())
    } else if let Some(ref path) = cli.path {
        fs::read_to_string(path).with_context(|| format!("failed to read '{}'", path.display()))
    } else {
        anyhow::bail!("no input: pass an HTML file or --html")
    }
}
