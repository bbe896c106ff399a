use chrono::{DateTime, Utc};
use outlet_mock_core::model::{News, NewsSource, NewsType};
use rand::Rng;

use crate::fields::{chance, days_before, pick_string, pick_variant, sequential_id};
use crate::vocab;

const IMPORTANT_PROBABILITY: f64 = 0.3;

pub fn build_news<R: Rng + ?Sized>(rng: &mut R, count: usize, now: DateTime<Utc>) -> Vec<News> {
    (0..count)
        .map(|i| News {
            news_id: sequential_id("news", i),
            title: pick_string(rng, vocab::NEWS_TITLES),
            content: format!(
                "News content {}: Important information about recent developments.",
                i + 1
            ),
            news_type: pick_variant(rng, NewsType::ALL),
            source: pick_variant(rng, NewsSource::ALL),
            published_date: days_before(rng, now, 30),
            author: pick_string(rng, vocab::NEWS_AUTHORS),
            url: format!("https://company.com/news/article-{}", i + 1),
            tags: vec![pick_string(rng, vocab::NEWS_TAGS)],
            is_important: chance(rng, IMPORTANT_PROBABILITY),
        })
        .collect()
}
