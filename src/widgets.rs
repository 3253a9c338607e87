//! Per-widget view state.
//!
//! Every dashboard panel owns one [`Widget`]. A load starts with
//! [`Widget::begin`], which hands out a token, and ends with
//! [`Widget::complete`]. A completion is committed only while its token is
//! still the newest one issued; anything older is reported back as stale and
//! leaves the committed view alone. Tokens are shared by every client, so
//! `stale` only says whether `/dashboard/state` took the result; the payload
//! still carries the full view for the caller to render. Loads are never
//! cancelled.

use crate::errors::FetchError;
use chrono::Local;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum WidgetView<T> {
    Loading,
    Ready { data: T, updated_at: String },
    Failed { message: &'static str },
}

/// What a single load reports back to its caller.
#[derive(Debug, Clone, Serialize)]
pub struct WidgetPayload<T> {
    pub token: u64,
    pub stale: bool,
    #[serde(flatten)]
    pub view: WidgetView<T>,
}

struct Slot<T> {
    token: u64,
    view: WidgetView<T>,
}

pub struct Widget<T> {
    name: &'static str,
    failure: &'static str,
    issued: AtomicU64,
    slot: Mutex<Slot<T>>,
}

impl<T: Clone> Widget<T> {
    pub fn new(name: &'static str, failure: &'static str) -> Self {
        Self {
            name,
            failure,
            issued: AtomicU64::new(0),
            slot: Mutex::new(Slot {
                token: 0,
                view: WidgetView::Loading,
            }),
        }
    }

    /// Issues the token for a new load. Tokens start at 1 and only grow.
    pub fn begin(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub async fn complete(&self, token: u64, result: Result<T, FetchError>) -> WidgetPayload<T> {
        let view = match result {
            Ok(data) => WidgetView::Ready {
                data,
                updated_at: Local::now().format("%H:%M:%S").to_string(),
            },
            Err(err) => {
                warn!(widget = self.name, "load failed: {err}");
                WidgetView::Failed {
                    message: self.failure,
                }
            }
        };

        let mut slot = self.slot.lock().await;
        let stale = token < self.issued.load(Ordering::SeqCst) || token <= slot.token;
        if stale {
            debug!(widget = self.name, token, "discarding superseded load");
        } else {
            slot.token = token;
            slot.view = view.clone();
        }

        WidgetPayload { token, stale, view }
    }

    /// The last committed view.
    pub async fn view(&self) -> WidgetView<T> {
        self.slot.lock().await.view.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn upstream_failure() -> FetchError {
        FetchError::Status {
            url: "http://catalog/api/tags/distribution".into(),
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "boom".into(),
        }
    }

    #[tokio::test]
    async fn starts_loading() {
        let widget: Widget<u32> = Widget::new("tags", "failed");
        assert_eq!(widget.view().await, WidgetView::Loading);
    }

    #[tokio::test]
    async fn commits_latest_result() {
        let widget = Widget::new("books", "failed");
        let token = widget.begin();
        let payload = widget.complete(token, Ok(3u32)).await;
        assert!(!payload.stale);
        assert_eq!(payload.token, 1);
        assert!(matches!(widget.view().await, WidgetView::Ready { data: 3, .. }));
    }

    #[tokio::test]
    async fn older_completion_does_not_overwrite_newer() {
        let widget = Widget::new("books", "failed");
        let first = widget.begin();
        let second = widget.begin();

        let newer = widget.complete(second, Ok("page 2")).await;
        assert!(!newer.stale);

        let older = widget.complete(first, Ok("page 1")).await;
        assert!(older.stale);
        assert!(matches!(older.view, WidgetView::Ready { data: "page 1", .. }));
        assert!(matches!(widget.view().await, WidgetView::Ready { data: "page 2", .. }));
    }

    #[tokio::test]
    async fn older_completion_is_dropped_while_newer_in_flight() {
        let widget = Widget::new("books", "failed");
        let first = widget.begin();
        let _second = widget.begin();

        let older = widget.complete(first, Ok(1u8)).await;
        assert!(older.stale);
        assert_eq!(widget.view().await, WidgetView::Loading);
    }

    #[tokio::test]
    async fn failure_uses_widget_message() {
        let widget: Widget<u32> = Widget::new("tags", "获取标签分布数据失败");
        let token = widget.begin();
        let payload = widget.complete(token, Err(upstream_failure())).await;
        assert!(!payload.stale);
        assert_eq!(
            payload.view,
            WidgetView::Failed {
                message: "获取标签分布数据失败"
            }
        );
        assert_eq!(widget.view().await, payload.view);
    }

    #[test]
    fn payload_serializes_flat() {
        let payload = WidgetPayload {
            token: 4,
            stale: false,
            view: WidgetView::<u32>::Failed { message: "获取失败" },
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"token": 4, "stale": false, "status": "failed", "message": "获取失败"})
        );
    }
}
