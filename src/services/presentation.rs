use url::Url;

use crate::config::Color;
use crate::domain::{DisplayContext, WidgetSize};
use crate::errors::{TopReadError, TopReadResult};

/// Pick the display context. A widget run without a size hint previews as
/// large; table runs ignore the hint.
pub fn select_context(runs_in_widget: bool, size: Option<WidgetSize>) -> DisplayContext {
    if !runs_in_widget {
        return DisplayContext::FullList;
    }
    DisplayContext::from_widget_size(size.unwrap_or(WidgetSize::Large))
}

/// Palette entry for the badge of `rank` (1-based) when `shown` items are
/// listed: `round(rank * palette_len / shown - 1)`. Out-of-range indices
/// yield no colour.
pub fn rank_color(rank: usize, shown: usize, palette: &[Color]) -> Option<&Color> {
    if shown == 0 {
        return None;
    }

    let scaling = palette.len() as f64 / shown as f64;
    let index = (rank as f64 * scaling - 1.0).round();
    if index < 0.0 {
        return None;
    }
    palette.get(index as usize)
}

/// URL that re-runs the script in the host app with the resolved locale.
pub fn reinvocation_url(scheme: &str, script_name: &str, locale: &str) -> TopReadResult<String> {
    let mut url = Url::parse(&format!("{}:///run", scheme))
        .map_err(|e| TopReadError::InvalidUrl(e.to_string()))?;

    url.path_segments_mut()
        .map_err(|_| TopReadError::InvalidUrl(format!("{}:///run cannot take a path", scheme)))?
        .push(script_name);
    url.query_pairs_mut().append_pair("lang", locale);

    Ok(url.to_string())
}
