//! Shapes upstream distributions into the series the page's charts consume.

use crate::clicks::normalize_clicks;
use crate::messages::MISSING_FIELD;
use crate::models::{AuthorStat, ClickRatingPoint, RatingBucket, TagCount};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySeries {
    pub categories: Vec<String>,
    pub values: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub name: String,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthorSeries {
    pub authors: Vec<String>,
    pub book_counts: Vec<u64>,
    pub avg_ratings: Vec<f64>,
}

/// `[monthly clicks, rating, title]`, serialized as a JSON array.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint(pub f64, pub f64, pub String);

pub fn tag_series(tags: Vec<TagCount>) -> CategorySeries {
    let (categories, values) = tags.into_iter().map(|tag| (tag.name, tag.book_count)).unzip();
    CategorySeries { categories, values }
}

pub fn rating_slices(buckets: Vec<RatingBucket>) -> Vec<PieSlice> {
    buckets
        .into_iter()
        .map(|bucket| PieSlice {
            name: bucket.rating_range,
            value: bucket.book_count,
        })
        .collect()
}

pub fn author_series(authors: Vec<AuthorStat>) -> AuthorSeries {
    let mut series = AuthorSeries {
        authors: Vec::with_capacity(authors.len()),
        book_counts: Vec::with_capacity(authors.len()),
        avg_ratings: Vec::with_capacity(authors.len()),
    };
    for author in authors {
        series.authors.push(author.author);
        series.book_counts.push(author.book_count);
        series.avg_ratings.push(author.avg_rating.unwrap_or(0.0));
    }
    series
}

/// Points whose clicks or rating do not parse are left off the plot.
pub fn scatter_points(points: Vec<ClickRatingPoint>) -> Vec<ScatterPoint> {
    points
        .into_iter()
        .filter_map(|point| {
            let clicks = point.monthly_clicks.as_ref().and_then(normalize_clicks)?;
            let rating = point.rating.as_ref()?.as_decimal()?;
            let title = point.title.unwrap_or_else(|| MISSING_FIELD.to_string());
            Some(ScatterPoint(clicks, rating, title))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FieldValue;

    #[test]
    fn tags_split_into_parallel_vectors() {
        let series = tag_series(vec![
            TagCount { name: "都市".into(), book_count: 40 },
            TagCount { name: "玄幻".into(), book_count: 31 },
        ]);
        assert_eq!(series.categories, vec!["都市", "玄幻"]);
        assert_eq!(series.values, vec![40, 31]);
    }

    #[test]
    fn missing_author_rating_reads_as_zero() {
        let series = author_series(vec![
            AuthorStat { author: "甲".into(), book_count: 3, avg_rating: Some(8.25) },
            AuthorStat { author: "乙".into(), book_count: 2, avg_rating: None },
        ]);
        assert_eq!(series.avg_ratings, vec![8.25, 0.0]);
        assert_eq!(series.book_counts, vec![3, 2]);
    }

    #[test]
    fn scatter_normalizes_clicks_and_skips_bad_points() {
        let points = scatter_points(vec![
            ClickRatingPoint {
                monthly_clicks: Some(FieldValue::Text("1.2万".into())),
                rating: Some(FieldValue::Text("8.1".into())),
                title: Some("一".into()),
            },
            ClickRatingPoint {
                monthly_clicks: Some(FieldValue::Number(900.0)),
                rating: Some(FieldValue::Number(7.0)),
                title: Some("二".into()),
            },
            ClickRatingPoint {
                monthly_clicks: Some(FieldValue::Text("abc".into())),
                rating: Some(FieldValue::Number(7.0)),
                title: Some("三".into()),
            },
            ClickRatingPoint {
                monthly_clicks: Some(FieldValue::Number(10.0)),
                rating: None,
                title: Some("四".into()),
            },
        ]);
        assert_eq!(
            points,
            vec![
                ScatterPoint(12_000.0, 8.1, "一".into()),
                ScatterPoint(900.0, 7.0, "二".into()),
            ]
        );
    }

    #[test]
    fn scatter_keeps_untitled_points() {
        let points = scatter_points(vec![ClickRatingPoint {
            monthly_clicks: Some(FieldValue::Text("2万".into())),
            rating: Some(FieldValue::Text("8.8".into())),
            title: None,
        }]);
        assert_eq!(points, vec![ScatterPoint(20_000.0, 8.8, "-".into())]);
    }

    #[test]
    fn scatter_point_is_a_json_triple() {
        let json = serde_json::to_value(ScatterPoint(5_000.0, 9.5, "书".into())).unwrap();
        assert_eq!(json, serde_json::json!([5000.0, 9.5, "书"]));
    }
}
