//! Partition scraped articles by topic.

use crate::models::{DEFAULT_TOPIC, ScrapedArticle, TopicGroup};

/// Group articles by their topic tag, keeping input order within each group.
///
/// Articles with an empty topic go to the [`DEFAULT_TOPIC`] group.
pub fn group_by_topic(articles: &[ScrapedArticle]) -> TopicGroup {
    let mut grouped = TopicGroup::new();
    for article in articles {
        let key = if article.topic.is_empty() {
            DEFAULT_TOPIC
        } else {
            article.topic.as_str()
        };
        grouped.push(key, article.clone());
    }
    grouped
}
