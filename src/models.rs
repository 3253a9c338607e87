use serde::{Deserialize, Serialize};

/// A catalog field that the upstream API sends either as a JSON number or as
/// free-form text (`"1.2万"`, `"8.5"`, `"月点击：1130542"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// Plain decimal reading of the field, without unit handling.
    pub fn as_decimal(&self) -> Option<f64> {
        let value = match self {
            FieldValue::Number(value) => *value,
            FieldValue::Text(text) => text.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }

    pub fn display(&self) -> String {
        match self {
            FieldValue::Number(value) if value.fract() == 0.0 => format!("{value:.0}"),
            FieldValue::Number(value) => value.to_string(),
            FieldValue::Text(text) => text.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookSummary {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub monthly_clicks: Option<FieldValue>,
    #[serde(default)]
    pub word_count: Option<FieldValue>,
    #[serde(default)]
    pub flowers: Option<FieldValue>,
    #[serde(default)]
    pub rating: Option<FieldValue>,
    #[serde(default)]
    pub rewards: Option<FieldValue>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BooksPage {
    pub total: u64,
    pub books: Vec<BookSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagCount {
    pub name: String,
    pub book_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingBucket {
    pub rating_range: String,
    pub book_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorStat {
    pub author: String,
    pub book_count: u64,
    #[serde(default)]
    pub avg_rating: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClickRatingPoint {
    #[serde(default)]
    pub monthly_clicks: Option<FieldValue>,
    #[serde(default)]
    pub rating: Option<FieldValue>,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BooksQuery {
    pub page: Option<String>,
}

/// One table row, already rendered to display strings.
#[derive(Debug, Clone, Serialize)]
pub struct BookRow {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub monthly_clicks: String,
    pub word_count: String,
    pub flowers: String,
    pub rating: String,
    pub rewards: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BooksTable {
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
    pub rows: Vec<BookRow>,
    pub empty_message: Option<&'static str>,
    pub pagination: crate::pagination::PageWindow,
}

#[derive(Debug, Clone, Serialize)]
pub struct SampleStats {
    pub sampled: usize,
    pub sample_size: u32,
    pub rating_count: usize,
    pub avg_rating: String,
    pub max_clicks: String,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub total_books: crate::widgets::WidgetPayload<String>,
    pub total_tags: crate::widgets::WidgetPayload<String>,
    pub sample: crate::widgets::WidgetPayload<SampleStats>,
}

#[derive(Debug, Serialize)]
pub struct DashboardState {
    pub total_books: crate::widgets::WidgetView<String>,
    pub total_tags: crate::widgets::WidgetView<String>,
    pub sample: crate::widgets::WidgetView<SampleStats>,
    pub books: crate::widgets::WidgetView<BooksTable>,
    pub tags: crate::widgets::WidgetView<crate::charts::CategorySeries>,
    pub ratings: crate::widgets::WidgetView<Vec<crate::charts::PieSlice>>,
    pub authors: crate::widgets::WidgetView<crate::charts::AuthorSeries>,
    pub correlation: crate::widgets::WidgetView<Vec<crate::charts::ScatterPoint>>,
}
