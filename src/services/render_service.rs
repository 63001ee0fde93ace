use std::thread;

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, warn};

use crate::config::Config;
use crate::domain::{Article, DisplayContext, TapTarget};
use crate::errors::TopReadResult;
use crate::i18n::{StringTable, TOP_READ};
use crate::render::builder;
use crate::render::{ImageSource, Rendered};
use crate::services::presentation::reinvocation_url;
use crate::services::FetchService;
use crate::sources::{FeedSource, ThumbnailLoader};

const REFRESH_AFTER_HOURS: i64 = 8;

pub struct RenderService<'a, S: FeedSource, L: ThumbnailLoader> {
    fetch_service: FetchService<S>,
    thumbnail_loader: L,
    config: &'a Config,
    strings: &'a StringTable,
}

impl<'a, S: FeedSource, L: ThumbnailLoader> RenderService<'a, S, L> {
    pub fn new(
        fetch_service: FetchService<S>,
        thumbnail_loader: L,
        config: &'a Config,
        strings: &'a StringTable,
    ) -> Self {
        Self {
            fetch_service,
            thumbnail_loader,
            config,
            strings,
        }
    }

    /// Fetch, rank and lay out today's most-read list for `context`.
    /// `table_maximum` only applies to the full list.
    pub fn render(
        &self,
        context: DisplayContext,
        locale: &str,
        now: DateTime<Utc>,
        table_maximum: usize,
    ) -> TopReadResult<Rendered> {
        let count = context.article_count(table_maximum);
        let articles = self.fetch_service.top_read(locale, now, count)?;

        if context.is_widget() {
            self.render_widget(&articles, context, locale, now)
                .map(Rendered::Widget)
        } else {
            let thumbnails = articles
                .iter()
                .map(|a| a.thumbnail_url.clone().map(|url| ImageSource::Url { url }))
                .collect();
            let items = builder::item_views(&articles, thumbnails);

            Ok(Rendered::Table(builder::table(
                &items,
                context,
                self.config.fullscreen,
                &self.config.theme,
            )))
        }
    }

    fn render_widget(
        &self,
        articles: &[Article],
        context: DisplayContext,
        locale: &str,
        now: DateTime<Utc>,
    ) -> TopReadResult<crate::render::Widget> {
        let layout = context.layout();

        let thumbnails = if layout.thumbnail.is_some() {
            self.load_thumbnails(articles)
        } else {
            Vec::new()
        };
        let items = builder::item_views(articles, thumbnails);

        let url = match layout.tap_target {
            TapTarget::TopArticle => articles.first().map(|a| a.page_url.clone()),
            TapTarget::Reinvoke => Some(reinvocation_url(
                &self.config.url_scheme,
                &self.config.script_name,
                locale,
            )?),
            // Rows carry their own targets
            TapTarget::EachRow => None,
        };

        Ok(builder::widget(
            &items,
            context,
            self.strings.get(locale, TOP_READ),
            url,
            now + Duration::hours(REFRESH_AFTER_HOURS),
            &self.config.theme,
        ))
    }

    /// Download every thumbnail concurrently. Results stay in article order;
    /// missing or failed images come back as `None`.
    pub fn load_thumbnails(&self, articles: &[Article]) -> Vec<Option<ImageSource>> {
        let loader = &self.thumbnail_loader;

        thread::scope(|scope| {
            let handles: Vec<_> = articles
                .iter()
                .map(|article| {
                    scope.spawn(move || -> Option<ImageSource> {
                        let url = article.thumbnail_url.as_ref()?;
                        match loader.load(url) {
                            Ok(data) => {
                                debug!("Loaded thumbnail {} ({} bytes)", url, data.len());
                                Some(ImageSource::Loaded {
                                    url: url.clone(),
                                    byte_len: data.len(),
                                    data,
                                })
                            }
                            Err(e) => {
                                warn!("Thumbnail {} failed to load: {}", url, e);
                                None
                            }
                        }
                    })
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| handle.join().unwrap_or(None))
                .collect()
        })
    }
}
