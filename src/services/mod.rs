pub mod fetch_service;
pub mod locale_service;
pub mod presentation;
pub mod ranker;
pub mod render_service;

pub use fetch_service::FetchService;
pub use locale_service::{parse_query, LocaleResolver};
pub use render_service::RenderService;
