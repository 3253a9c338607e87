use crate::clicks::{format_clicks, normalize_clicks};
use crate::messages::NO_DATA;
use crate::models::{BookSummary, SampleStats};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AverageRating {
    Value(f64),
    NoData,
}

impl fmt::Display for AverageRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AverageRating::Value(value) => write!(f, "{value:.1}"),
            AverageRating::NoData => f.write_str(NO_DATA),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AggregateSnapshot {
    pub sampled: usize,
    pub rating_count: usize,
    pub avg_rating: AverageRating,
    pub max_clicks: f64,
}

/// Reduces a sample of books to its average rating and highest click count.
///
/// Ratings and click values that fail to parse are left out of the figures
/// instead of counting as zero.
pub fn accumulate(books: &[BookSummary]) -> AggregateSnapshot {
    let mut rating_sum = 0.0;
    let mut rating_count = 0usize;
    let mut max_clicks = 0.0f64;

    for book in books {
        if let Some(rating) = book.rating.as_ref().and_then(|value| value.as_decimal()) {
            rating_sum += rating;
            rating_count += 1;
        }

        if let Some(clicks) = book.monthly_clicks.as_ref().and_then(normalize_clicks) {
            if clicks.is_finite() && clicks > max_clicks {
                max_clicks = clicks;
            }
        }
    }

    let avg_rating = if rating_count == 0 {
        AverageRating::NoData
    } else {
        AverageRating::Value(rating_sum / rating_count as f64)
    };

    AggregateSnapshot {
        sampled: books.len(),
        rating_count,
        avg_rating,
        max_clicks,
    }
}

pub fn sample_stats(snapshot: &AggregateSnapshot, sample_size: u32) -> SampleStats {
    SampleStats {
        sampled: snapshot.sampled,
        sample_size,
        rating_count: snapshot.rating_count,
        avg_rating: snapshot.avg_rating.to_string(),
        max_clicks: format_clicks(snapshot.max_clicks),
    }
}
