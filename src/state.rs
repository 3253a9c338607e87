use crate::charts::{AuthorSeries, CategorySeries, PieSlice, ScatterPoint};
use crate::client::CatalogClient;
use crate::config::Config;
use crate::messages;
use crate::models::{BooksTable, SampleStats};
use crate::widgets::Widget;
use std::sync::Arc;

/// One isolated view state per panel on the page.
pub struct Dashboard {
    pub total_books: Widget<String>,
    pub total_tags: Widget<String>,
    pub sample: Widget<SampleStats>,
    pub books: Widget<BooksTable>,
    pub tags: Widget<CategorySeries>,
    pub ratings: Widget<Vec<PieSlice>>,
    pub authors: Widget<AuthorSeries>,
    pub correlation: Widget<Vec<ScatterPoint>>,
}

impl Dashboard {
    pub fn new() -> Self {
        Self {
            total_books: Widget::new("total_books", messages::FETCH_FAILED),
            total_tags: Widget::new("total_tags", messages::FETCH_FAILED),
            sample: Widget::new("sample", messages::FETCH_FAILED),
            books: Widget::new("books", messages::BOOKS_FAILED),
            tags: Widget::new("tags", messages::TAGS_FAILED),
            ratings: Widget::new("ratings", messages::RATINGS_FAILED),
            authors: Widget::new("authors", messages::AUTHORS_FAILED),
            correlation: Widget::new("correlation", messages::CORRELATION_FAILED),
        }
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub client: CatalogClient,
    pub dashboard: Arc<Dashboard>,
}

impl AppState {
    pub fn new(config: Config, client: CatalogClient) -> Self {
        Self {
            config: Arc::new(config),
            client,
            dashboard: Arc::new(Dashboard::new()),
        }
    }
}
