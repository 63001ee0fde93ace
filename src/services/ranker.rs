use crate::domain::Article;

/// Order articles by views, most viewed first, and keep at most `maximum`.
/// Equal view counts keep their feed order.
pub fn rank(mut articles: Vec<Article>, maximum: usize) -> Vec<Article> {
    // sort_by is stable
    articles.sort_by(|a, b| b.views.cmp(&a.views));
    articles.truncate(maximum);
    articles
}
