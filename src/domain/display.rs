use serde::Serialize;

/// Widget size class reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetSize {
    Small,
    Medium,
    Large,
}

impl WidgetSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            WidgetSize::Small => "small",
            WidgetSize::Medium => "medium",
            WidgetSize::Large => "large",
        }
    }
}

impl std::str::FromStr for WidgetSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "small" => Ok(WidgetSize::Small),
            "medium" => Ok(WidgetSize::Medium),
            "large" => Ok(WidgetSize::Large),
            _ => Err(format!("Unknown widget size: {}", s)),
        }
    }
}

impl std::fmt::Display for WidgetSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayContext {
    FullList,
    WidgetSmall,
    WidgetMedium,
    WidgetLarge,
}

/// Where activating a rendered unit navigates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TapTarget {
    /// The whole widget opens the top article's page.
    TopArticle,
    /// The whole widget re-runs the script, which opens the table.
    Reinvoke,
    /// Every row opens its own article page.
    EachRow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThumbnailSize {
    Reduced,
    Full,
}

impl ThumbnailSize {
    /// Edge length of the square thumbnail slot.
    pub fn points(&self) -> f32 {
        match self {
            ThumbnailSize::Reduced => 40.0,
            ThumbnailSize::Full => 60.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayoutPolicy {
    pub show_rank_badge: bool,
    pub thumbnail: Option<ThumbnailSize>,
    pub show_description: bool,
    pub show_views: bool,
    pub tap_target: TapTarget,
}

impl DisplayContext {
    pub fn from_widget_size(size: WidgetSize) -> Self {
        match size {
            WidgetSize::Small => DisplayContext::WidgetSmall,
            WidgetSize::Medium => DisplayContext::WidgetMedium,
            WidgetSize::Large => DisplayContext::WidgetLarge,
        }
    }

    pub fn is_widget(&self) -> bool {
        !matches!(self, DisplayContext::FullList)
    }

    /// Number of articles this context asks the ranker for.
    pub fn article_count(&self, table_maximum: usize) -> usize {
        match self {
            DisplayContext::FullList => table_maximum,
            DisplayContext::WidgetSmall => 1,
            DisplayContext::WidgetMedium => 2,
            DisplayContext::WidgetLarge => 4,
        }
    }

    pub fn layout(&self) -> LayoutPolicy {
        match self {
            DisplayContext::FullList => LayoutPolicy {
                show_rank_badge: true,
                thumbnail: Some(ThumbnailSize::Full),
                show_description: true,
                show_views: true,
                tap_target: TapTarget::EachRow,
            },
            DisplayContext::WidgetSmall => LayoutPolicy {
                show_rank_badge: false,
                thumbnail: None,
                show_description: true,
                show_views: true,
                tap_target: TapTarget::TopArticle,
            },
            DisplayContext::WidgetMedium => LayoutPolicy {
                show_rank_badge: true,
                thumbnail: Some(ThumbnailSize::Reduced),
                show_description: true,
                show_views: false,
                tap_target: TapTarget::Reinvoke,
            },
            DisplayContext::WidgetLarge => LayoutPolicy {
                show_rank_badge: true,
                thumbnail: Some(ThumbnailSize::Full),
                show_description: true,
                show_views: true,
                tap_target: TapTarget::Reinvoke,
            },
        }
    }
}
