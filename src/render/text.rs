use std::io::Write;

use super::tree::{Element, Image, ImageSource, Rendered, Stack, Table, Widget};
use crate::errors::TopReadResult;

const INDENT: &str = "  ";

/// Print a render tree for a terminal.
pub fn write_rendered<W: Write>(out: &mut W, rendered: &Rendered) -> TopReadResult<()> {
    match rendered {
        Rendered::Widget(widget) => write_widget(out, widget),
        Rendered::Table(table) => write_table(out, table),
    }
}

fn write_widget<W: Write>(out: &mut W, widget: &Widget) -> TopReadResult<()> {
    writeln!(
        out,
        "[widget] refresh after {}",
        widget.refresh_after.format("%Y-%m-%d %H:%M UTC")
    )?;
    if let Some(url) = &widget.url {
        writeln!(out, "[opens] {}", url)?;
    }
    write_stack(out, &widget.root, 0)
}

fn write_stack<W: Write>(out: &mut W, stack: &Stack, depth: usize) -> TopReadResult<()> {
    let indent = INDENT.repeat(depth);

    if stack.children.is_empty() {
        // Empty sized blocks stand in for missing thumbnails
        if let Some(size) = stack.size {
            writeln!(out, "{}[ no image {}x{} ]", indent, size.width, size.height)?;
        }
        return Ok(());
    }

    if let Some(url) = &stack.url {
        writeln!(out, "{}-> {}", indent, url)?;
    }

    for child in &stack.children {
        match child {
            Element::Text(text) => {
                writeln!(out, "{}{}", indent, text.content)?;
                if let Some(subtitle) = &text.subtitle {
                    writeln!(out, "{}{}", indent, subtitle)?;
                }
            }
            Element::Image(image) => writeln!(out, "{}{}", indent, describe_image(image))?,
            Element::Stack(child) => write_stack(out, child, depth + 1)?,
            Element::Spacer { .. } => {}
        }
    }

    Ok(())
}

fn describe_image(image: &Image) -> String {
    match &image.source {
        ImageSource::Symbol { name } => format!("({})", name),
        ImageSource::Url { url } => format!("[image {}]", url),
        ImageSource::Loaded { url, byte_len, .. } => {
            format!("[image {} bytes from {}]", byte_len, url)
        }
    }
}

fn write_table<W: Write>(out: &mut W, table: &Table) -> TopReadResult<()> {
    for row in &table.rows {
        let cells: Vec<String> = row
            .cells
            .iter()
            .map(|cell| match &cell.content {
                Element::Text(text) => match &text.subtitle {
                    Some(subtitle) if !subtitle.is_empty() => {
                        format!("{} ({})", text.content, subtitle)
                    }
                    _ => text.content.clone(),
                },
                Element::Image(image) => describe_image(image),
                Element::Stack(_) => "[no image]".to_string(),
                Element::Spacer { .. } => String::new(),
            })
            .collect();

        writeln!(out, "{}", cells.join(" | "))?;
        if let Some(url) = &row.url {
            writeln!(out, "{}{}", INDENT, url)?;
        }
    }

    Ok(())
}
