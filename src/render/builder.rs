use chrono::{DateTime, Utc};

use super::number::abbreviate;
use super::surface::Surface;
use super::tree::{
    Font, FontWeight, Image, ImageSource, Padding, Size, Stack, Table, TableRow, Text, Widget,
};
use crate::config::Theme;
use crate::domain::{Article, DisplayContext, LayoutPolicy, TapTarget};
use crate::services::presentation::rank_color;

const RANK_WEIGHT: u32 = 10;
const TITLE_WEIGHT: u32 = 100;
const VIEWS_WEIGHT: u32 = 20;
const IMAGE_WEIGHT: u32 = 10;

/// One ranked article ready for layout.
#[derive(Debug, Clone)]
pub struct ItemView<'a> {
    /// 1-based
    pub rank: usize,
    pub article: &'a Article,
    /// `None` renders the placeholder block
    pub thumbnail: Option<ImageSource>,
}

/// Number the articles from 1 and pair each with its thumbnail slot.
pub fn item_views<'a>(
    articles: &'a [Article],
    mut thumbnails: Vec<Option<ImageSource>>,
) -> Vec<ItemView<'a>> {
    thumbnails.resize(articles.len(), None);

    articles
        .iter()
        .zip(thumbnails)
        .enumerate()
        .map(|(index, (article, thumbnail))| ItemView {
            rank: index + 1,
            article,
            thumbnail,
        })
        .collect()
}

fn placeholder(edge: f32, theme: &Theme) -> Stack {
    let mut block = Stack::horizontal();
    block.background = Some(theme.foreground_tertiary.clone());
    block.corner_radius = 8.0;
    block.size = Some(Size::square(edge));
    block
}

fn thumbnail_image(source: ImageSource, edge: f32) -> Image {
    let mut image = Image::new(source);
    image.corner_radius = 8.0;
    image.fill = true;
    image.size = Some(Size::square(edge));
    image
}

/// Lay out one widget row into `list` according to `context`.
pub fn list_item<S: Surface>(
    list: &mut S,
    item: &ItemView<'_>,
    context: DisplayContext,
    shown: usize,
    theme: &Theme,
) {
    let layout = context.layout();

    let mut row = Stack::horizontal();
    row.center_content = true;
    row.url = Some(item.article.page_url.clone());

    if layout.show_rank_badge {
        let mut badge = Image::new(ImageSource::Symbol {
            name: format!("{}.circle", item.rank),
        });
        badge.tint = rank_color(item.rank, shown, &theme.rank_colors).cloned();
        badge.resizable = false;
        row.add_image(badge);
    }

    let mut info = Stack::vertical();
    info.padding = if layout.show_rank_badge {
        Padding::new(4.0, 15.0, 4.0, 0.0)
    } else {
        Padding::new(4.0, 0.0, 4.0, 0.0)
    };
    info.spacing = 4.0;

    info.add_text(
        Text::new(&item.article.title, Font::system(FontWeight::Semibold, 16.0))
            .with_color(&theme.foreground_primary),
    );

    if layout.show_description {
        info.add_text(
            Text::new(
                item.article.description_or_empty(),
                Font::system(FontWeight::Regular, 14.0),
            )
            .with_color(&theme.foreground_secondary),
        );
    }

    if layout.show_views {
        let mut stats = Stack::horizontal();
        stats.background = Some(theme.stats_background.clone());
        stats.corner_radius = 4.0;
        stats.size = Some(Size::new(0.0, 18.0));
        stats.center_content = true;
        stats.padding = Padding::uniform(4.0);
        stats.add_text(
            Text::new(
                abbreviate(item.article.views),
                Font::system(FontWeight::Regular, 12.0),
            )
            .with_color(&theme.stats_foreground),
        );
        info.add_stack(stats);
    }

    row.add_stack(info);

    if let Some(size) = layout.thumbnail {
        let edge = size.points();
        row.add_spacer(None);
        match &item.thumbnail {
            Some(source) => row.add_image(thumbnail_image(source.clone(), edge)),
            None => row.add_stack(placeholder(edge, theme)),
        }
    }

    list.add_stack(row);
    // Spread rows out when there is little content
    list.add_spacer(None);
}

/// Build the home-screen widget for an already ranked list.
pub fn widget(
    items: &[ItemView<'_>],
    context: DisplayContext,
    heading: &str,
    url: Option<String>,
    refresh_after: DateTime<Utc>,
    theme: &Theme,
) -> Widget {
    let mut widget = Widget {
        background: theme.background.clone(),
        padding: Padding::new(15.0, 15.0, 0.0, 15.0),
        refresh_after,
        url,
        root: Stack::vertical(),
    };

    widget.add_text(
        Text::new(heading, Font::system(FontWeight::Bold, 18.0))
            .with_color(&theme.foreground_primary),
    );

    let mut list = Stack::vertical();
    list.padding = Padding::new(7.5, 0.0, 0.0, 0.0);

    let shown = context.article_count(items.len());
    for item in items {
        list_item(&mut list, item, context, shown, theme);
    }

    widget.add_stack(list);
    widget.add_spacer(None);

    widget
}

/// Lay out one table row following the full-list layout. Thumbnails stay
/// as URLs for the host to load.
pub fn table_row(item: &ItemView<'_>, layout: &LayoutPolicy, theme: &Theme) -> TableRow {
    let article = item.article;
    let mut row = TableRow::new(match layout.tap_target {
        TapTarget::EachRow => Some(article.page_url.clone()),
        TapTarget::TopArticle | TapTarget::Reinvoke => None,
    });

    let mut weights = Vec::with_capacity(4);

    if layout.show_rank_badge {
        row.add_text(Text::new(
            item.rank.to_string(),
            Font::system(FontWeight::Bold, 16.0),
        ));
        weights.push(RANK_WEIGHT);
    }

    let mut title = Text::new(&article.title, Font::Body);
    if layout.show_description {
        title = title.with_subtitle(article.description_or_empty(), &theme.foreground_secondary);
    }
    row.add_text(title);
    weights.push(TITLE_WEIGHT);

    if layout.show_views {
        row.add_text(Text::new(abbreviate(article.views), Font::Footnote).with_color(&theme.stats_foreground));
        weights.push(VIEWS_WEIGHT);
    }

    if let Some(size) = layout.thumbnail {
        match &item.thumbnail {
            Some(source) => row.add_image(Image::new(source.clone())),
            None => row.add_stack(placeholder(size.points(), theme)),
        }
        weights.push(IMAGE_WEIGHT);
    }

    row.set_weights(&weights);
    row
}

pub fn table(
    items: &[ItemView<'_>],
    context: DisplayContext,
    fullscreen: bool,
    theme: &Theme,
) -> Table {
    let layout = context.layout();

    Table {
        fullscreen,
        rows: items
            .iter()
            .map(|item| table_row(item, &layout, theme))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::tree::Element;
    use chrono::TimeZone;

    fn articles() -> Vec<Article> {
        vec![
            Article::new(
                "Octavia E. Butler".to_string(),
                "https://en.wikipedia.org/wiki/Octavia_E._Butler".to_string(),
                2_450_000,
            )
            .with_description(Some("American science fiction writer".to_string()))
            .with_thumbnail(Some("https://upload.wikimedia.org/b.jpg".to_string())),
            Article::new(
                "Main Page".to_string(),
                "https://en.wikipedia.org/wiki/Main_Page".to_string(),
                950,
            ),
        ]
    }

    fn loaded() -> ImageSource {
        ImageSource::Loaded {
            url: "https://upload.wikimedia.org/b.jpg".to_string(),
            byte_len: 3,
            data: vec![1, 2, 3],
        }
    }

    fn stacks(children: &[Element]) -> Vec<&Stack> {
        children
            .iter()
            .filter_map(|e| match e {
                Element::Stack(s) => Some(s),
                _ => None,
            })
            .collect()
    }

    fn refresh() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 7, 20, 0, 0).unwrap()
    }

    #[test]
    fn test_item_views_number_from_one() {
        let articles = articles();
        let items = item_views(&articles, vec![Some(loaded())]);

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].rank, 1);
        assert_eq!(items[1].rank, 2);
        assert!(items[0].thumbnail.is_some());
        assert!(items[1].thumbnail.is_none());
    }

    #[test]
    fn test_large_item_has_badge_stats_and_thumbnail() {
        let articles = articles();
        let items = item_views(&articles, vec![Some(loaded())]);
        let theme = Theme::default();

        let mut list = Stack::vertical();
        list_item(&mut list, &items[0], DisplayContext::WidgetLarge, 4, &theme);

        // Row followed by a spacer
        assert_eq!(list.children.len(), 2);
        let row = stacks(&list.children)[0];
        assert_eq!(
            row.url.as_deref(),
            Some("https://en.wikipedia.org/wiki/Octavia_E._Butler")
        );

        match &row.children[0] {
            Element::Image(badge) => {
                assert_eq!(
                    badge.source,
                    ImageSource::Symbol {
                        name: "1.circle".to_string()
                    }
                );
                assert_eq!(badge.tint.as_ref(), Some(&theme.rank_colors[0]));
            }
            other => panic!("expected badge, got {:?}", other),
        }

        let info = stacks(&row.children)[0];
        assert_eq!(info.padding, Padding::new(4.0, 15.0, 4.0, 0.0));
        let stats = stacks(&info.children)[0];
        match &stats.children[0] {
            Element::Text(t) => assert_eq!(t.content, "2.5M"),
            other => panic!("expected views text, got {:?}", other),
        }

        match row.children.last() {
            Some(Element::Image(thumb)) => {
                assert_eq!(thumb.size, Some(Size::square(60.0)));
                assert!(thumb.fill);
            }
            other => panic!("expected thumbnail, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_thumbnail_renders_placeholder() {
        let articles = articles();
        let items = item_views(&articles, vec![]);
        let theme = Theme::default();

        let mut list = Stack::vertical();
        list_item(&mut list, &items[1], DisplayContext::WidgetMedium, 2, &theme);

        let row = stacks(&list.children)[0];
        match row.children.last() {
            Some(Element::Stack(block)) => {
                assert_eq!(block.size, Some(Size::square(40.0)));
                assert_eq!(block.background.as_ref(), Some(&theme.foreground_tertiary));
                assert!(block.children.is_empty());
            }
            other => panic!("expected placeholder, got {:?}", other),
        }
    }

    #[test]
    fn test_medium_item_omits_views() {
        let articles = articles();
        let items = item_views(&articles, vec![Some(loaded())]);

        let mut list = Stack::vertical();
        list_item(&mut list, &items[0], DisplayContext::WidgetMedium, 2, &Theme::default());

        let row = stacks(&list.children)[0];
        let info = stacks(&row.children)[0];
        assert!(stacks(&info.children).is_empty());
        assert_eq!(info.children.len(), 2);
    }

    #[test]
    fn test_small_item_has_no_badge_or_thumbnail() {
        let articles = articles();
        let items = item_views(&articles, vec![Some(loaded())]);

        let mut list = Stack::vertical();
        list_item(&mut list, &items[0], DisplayContext::WidgetSmall, 1, &Theme::default());

        let row = stacks(&list.children)[0];
        assert_eq!(row.children.len(), 1);
        let info = stacks(&row.children)[0];
        assert_eq!(info.padding, Padding::new(4.0, 0.0, 4.0, 0.0));
    }

    #[test]
    fn test_widget_structure() {
        let articles = articles();
        let items = item_views(&articles, vec![Some(loaded())]);
        let theme = Theme::default();

        let widget = widget(
            &items,
            DisplayContext::WidgetMedium,
            "Les plus lus",
            Some("scriptable:///run/Top?lang=fr".to_string()),
            refresh(),
            &theme,
        );

        assert_eq!(widget.padding, Padding::new(15.0, 15.0, 0.0, 15.0));
        assert_eq!(widget.refresh_after, refresh());
        assert_eq!(widget.root.children.len(), 3);
        match &widget.root.children[0] {
            Element::Text(t) => assert_eq!(t.content, "Les plus lus"),
            other => panic!("expected heading, got {:?}", other),
        }

        let list = stacks(&widget.root.children)[0];
        // Two rows, each followed by a spacer
        assert_eq!(list.children.len(), 4);

        // Second of two rows takes the last palette colour
        let second = stacks(&list.children)[1];
        match &second.children[0] {
            Element::Image(badge) => assert_eq!(badge.tint.as_ref(), Some(&theme.rank_colors[3])),
            other => panic!("expected badge, got {:?}", other),
        }
    }

    #[test]
    fn test_table_rows() {
        let articles = articles();
        let thumbnails = vec![Some(ImageSource::Url {
            url: "https://upload.wikimedia.org/b.jpg".to_string(),
        })];
        let items = item_views(&articles, thumbnails);

        let table = table(&items, DisplayContext::FullList, false, &Theme::default());

        assert_eq!(table.rows.len(), 2);
        let row = &table.rows[1];
        assert_eq!(row.url.as_deref(), Some("https://en.wikipedia.org/wiki/Main_Page"));
        assert_eq!(
            row.cells.iter().map(|c| c.width_weight).collect::<Vec<_>>(),
            vec![10, 100, 20, 10]
        );
        match &row.cells[0].content {
            Element::Text(t) => assert_eq!(t.content, "2"),
            other => panic!("expected rank, got {:?}", other),
        }
        match &row.cells[1].content {
            Element::Text(t) => assert_eq!(t.subtitle.as_deref(), Some("")),
            other => panic!("expected title, got {:?}", other),
        }
        match &row.cells[2].content {
            Element::Text(t) => assert_eq!(t.content, "950"),
            other => panic!("expected views, got {:?}", other),
        }
        assert!(matches!(row.cells[3].content, Element::Stack(_)));
    }

    #[test]
    fn test_table_row_follows_layout_policy() {
        let articles = articles();
        let items = item_views(&articles, vec![]);
        let theme = Theme::default();

        // Full list: placeholder sized from the layout, row opens its article
        let full = table_row(&items[0], &DisplayContext::FullList.layout(), &theme);
        assert_eq!(
            full.url.as_deref(),
            Some("https://en.wikipedia.org/wiki/Octavia_E._Butler")
        );
        match &full.cells[3].content {
            Element::Stack(block) => assert_eq!(block.size, Some(Size::square(60.0))),
            other => panic!("expected placeholder, got {:?}", other),
        }

        // A layout without per-row targets or views drops both
        let medium = table_row(&items[0], &DisplayContext::WidgetMedium.layout(), &theme);
        assert_eq!(medium.url, None);
        assert_eq!(
            medium.cells.iter().map(|c| c.width_weight).collect::<Vec<_>>(),
            vec![10, 100, 10]
        );
        match &medium.cells[2].content {
            Element::Stack(block) => assert_eq!(block.size, Some(Size::square(40.0))),
            other => panic!("expected placeholder, got {:?}", other),
        }
    }
}
