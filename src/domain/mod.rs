pub mod article;
pub mod display;
pub mod feed;

pub use article::Article;
pub use display::{DisplayContext, LayoutPolicy, TapTarget, ThumbnailSize, WidgetSize};
pub use feed::{FeaturedFeed, FeedArticle};
