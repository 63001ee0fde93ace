pub mod traits;
pub mod wikipedia;
pub mod thumbnail;

pub use traits::{FeedSource, ThumbnailLoader};
pub use thumbnail::HttpThumbnailLoader;
pub use wikipedia::WikipediaSource;
