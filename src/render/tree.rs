use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::Color;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn square(edge: f32) -> Self {
        Self::new(edge, edge)
    }
}

/// Insets in (top, leading, bottom, trailing) order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Padding {
    pub top: f32,
    pub leading: f32,
    pub bottom: f32,
    pub trailing: f32,
}

impl Padding {
    pub fn new(top: f32, leading: f32, bottom: f32, trailing: f32) -> Self {
        Self {
            top,
            leading,
            bottom,
            trailing,
        }
    }

    pub fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Regular,
    Semibold,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "style", rename_all = "snake_case")]
pub enum Font {
    System { weight: FontWeight, size: f32 },
    Body,
    Footnote,
}

impl Font {
    pub fn system(weight: FontWeight, size: f32) -> Self {
        Font::System { weight, size }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Text {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub font: Font,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle_color: Option<Color>,
}

impl Text {
    pub fn new(content: impl Into<String>, font: Font) -> Self {
        Self {
            content: content.into(),
            subtitle: None,
            font,
            color: None,
            subtitle_color: None,
        }
    }

    pub fn with_color(mut self, color: &Color) -> Self {
        self.color = Some(color.clone());
        self
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>, color: &Color) -> Self {
        self.subtitle = Some(subtitle.into());
        self.subtitle_color = Some(color.clone());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ImageSource {
    /// Named system symbol, e.g. `3.circle`
    Symbol { name: String },
    /// Loaded lazily by whoever displays the tree
    Url { url: String },
    /// Already downloaded
    Loaded {
        url: String,
        byte_len: usize,
        #[serde(skip)]
        data: Vec<u8>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Image {
    pub source: ImageSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    pub corner_radius: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tint: Option<Color>,
    pub fill: bool,
    pub resizable: bool,
}

impl Image {
    pub fn new(source: ImageSource) -> Self {
        Self {
            source,
            size: None,
            corner_radius: 0.0,
            tint: None,
            fill: false,
            resizable: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stack {
    pub axis: Axis,
    pub padding: Padding,
    pub spacing: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
    pub corner_radius: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    pub center_content: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub children: Vec<Element>,
}

impl Stack {
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            padding: Padding::default(),
            spacing: 0.0,
            background: None,
            corner_radius: 0.0,
            size: None,
            center_content: false,
            url: None,
            children: Vec::new(),
        }
    }

    pub fn horizontal() -> Self {
        Self::new(Axis::Horizontal)
    }

    pub fn vertical() -> Self {
        Self::new(Axis::Vertical)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Element {
    Text(Text),
    Image(Image),
    Stack(Stack),
    Spacer {
        #[serde(skip_serializing_if = "Option::is_none")]
        length: Option<f32>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Widget {
    pub background: Color,
    pub padding: Padding,
    pub refresh_after: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub root: Stack,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    pub width_weight: u32,
    pub content: Element,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub height: f32,
    pub cell_spacing: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub dismiss_on_select: bool,
    pub cells: Vec<Cell>,
}

impl TableRow {
    pub fn new(url: Option<String>) -> Self {
        Self {
            height: 60.0,
            cell_spacing: 10.0,
            url,
            dismiss_on_select: false,
            cells: Vec::new(),
        }
    }

    /// Assign width weights to the cells in order; extra weights are ignored.
    pub fn set_weights(&mut self, weights: &[u32]) {
        for (cell, weight) in self.cells.iter_mut().zip(weights) {
            cell.width_weight = *weight;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub fullscreen: bool,
    pub rows: Vec<TableRow>,
}

/// Output of one run: either a home-screen widget or a table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Rendered {
    Widget(Widget),
    Table(Table),
}
