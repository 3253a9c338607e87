use crate::charts::{
    author_series, rating_slices, scatter_points, tag_series, AuthorSeries, CategorySeries,
    PieSlice, ScatterPoint,
};
use crate::clicks::group_thousands;
use crate::errors::AppError;
use crate::messages::{BOOKS_EMPTY, MISSING_FIELD};
use crate::models::{
    BookRow, BookSummary, BooksQuery, BooksTable, DashboardState, FieldValue, SampleStats,
    SummaryResponse,
};
use crate::pagination::{page_offset, page_window, parse_page, total_pages};
use crate::state::AppState;
use crate::stats::{accumulate, sample_stats};
use crate::ui::render_index;
use crate::widgets::WidgetPayload;
use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_index(&state.config))
}

/// Headline figures. The three loads run side by side and fail on their own.
pub async fn summary(State(state): State<AppState>) -> Json<SummaryResponse> {
    let (total_books, total_tags, sample) = tokio::join!(
        load_total_books(&state),
        load_total_tags(&state),
        load_sample(&state),
    );
    Json(SummaryResponse {
        total_books,
        total_tags,
        sample,
    })
}

async fn load_total_books(state: &AppState) -> WidgetPayload<String> {
    let widget = &state.dashboard.total_books;
    let token = widget.begin();
    let result = state
        .client
        .books(1, 0)
        .await
        .map(|page| count_label(page.total));
    widget.complete(token, result).await
}

async fn load_total_tags(state: &AppState) -> WidgetPayload<String> {
    let widget = &state.dashboard.total_tags;
    let token = widget.begin();
    let result = state
        .client
        .tag_distribution()
        .await
        .map(|tags| count_label(tags.len() as u64));
    widget.complete(token, result).await
}

/// Counts past `i64::MAX` saturate instead of wrapping negative.
fn count_label(count: u64) -> String {
    group_thousands(i64::try_from(count).unwrap_or(i64::MAX))
}

async fn load_sample(state: &AppState) -> WidgetPayload<SampleStats> {
    let widget = &state.dashboard.sample;
    let sample_size = state.config.sample_size;
    let token = widget.begin();
    let result = state
        .client
        .books(sample_size, 0)
        .await
        .map(|page| sample_stats(&accumulate(&page.books), sample_size));
    widget.complete(token, result).await
}

pub async fn books(
    State(state): State<AppState>,
    Query(query): Query<BooksQuery>,
) -> Result<Json<WidgetPayload<BooksTable>>, AppError> {
    let page = parse_page(query.page.as_deref())
        .ok_or_else(|| AppError::bad_request("page must be a positive integer"))?;
    let page_size = state.config.page_size;

    let widget = &state.dashboard.books;
    let token = widget.begin();
    let result = state
        .client
        .books(page_size, page_offset(page, page_size))
        .await
        .map(|listing| BooksTable {
            page,
            page_size,
            total: listing.total,
            empty_message: listing.books.is_empty().then_some(BOOKS_EMPTY),
            rows: listing.books.iter().map(book_row).collect(),
            pagination: page_window(page, total_pages(listing.total, page_size)),
        });

    Ok(Json(widget.complete(token, result).await))
}

fn book_row(book: &BookSummary) -> BookRow {
    BookRow {
        id: book.id,
        title: text_or_dash(book.title.as_deref()),
        author: text_or_dash(book.author.as_deref()),
        monthly_clicks: field_or_dash(book.monthly_clicks.as_ref()),
        word_count: field_or_dash(book.word_count.as_ref()),
        flowers: field_or_dash(book.flowers.as_ref()),
        rating: field_or_dash(book.rating.as_ref()),
        rewards: field_or_dash(book.rewards.as_ref()),
    }
}

fn text_or_dash(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => MISSING_FIELD.to_string(),
    }
}

// Zero and empty text render as missing, like the table always has.
fn field_or_dash(value: Option<&FieldValue>) -> String {
    match value {
        Some(FieldValue::Text(text)) => text_or_dash(Some(text.as_str())),
        Some(FieldValue::Number(number)) if *number == 0.0 => MISSING_FIELD.to_string(),
        Some(number) => number.display(),
        None => MISSING_FIELD.to_string(),
    }
}

pub async fn tags_chart(State(state): State<AppState>) -> Json<WidgetPayload<CategorySeries>> {
    let widget = &state.dashboard.tags;
    let token = widget.begin();
    let result = state.client.tag_distribution().await.map(tag_series);
    Json(widget.complete(token, result).await)
}

pub async fn ratings_chart(State(state): State<AppState>) -> Json<WidgetPayload<Vec<PieSlice>>> {
    let widget = &state.dashboard.ratings;
    let token = widget.begin();
    let result = state.client.rating_distribution().await.map(rating_slices);
    Json(widget.complete(token, result).await)
}

pub async fn authors_chart(State(state): State<AppState>) -> Json<WidgetPayload<AuthorSeries>> {
    let widget = &state.dashboard.authors;
    let token = widget.begin();
    let result = state.client.top_authors().await.map(author_series);
    Json(widget.complete(token, result).await)
}

pub async fn correlation_chart(
    State(state): State<AppState>,
) -> Json<WidgetPayload<Vec<ScatterPoint>>> {
    let widget = &state.dashboard.correlation;
    let token = widget.begin();
    let result = state.client.clicks_rating().await.map(scatter_points);
    Json(widget.complete(token, result).await)
}

pub async fn dashboard_state(State(state): State<AppState>) -> Json<DashboardState> {
    let dashboard = &state.dashboard;
    Json(DashboardState {
        total_books: dashboard.total_books.view().await,
        total_tags: dashboard.total_tags.view().await,
        sample: dashboard.sample.view().await,
        books: dashboard.books.view().await,
        tags: dashboard.tags.view().await,
        ratings: dashboard.ratings.view().await,
        authors: dashboard.authors.view().await,
        correlation: dashboard.correlation.view().await,
    })
}
