//! User-facing strings shown in place of dashboard widgets.

pub const NO_DATA: &str = "无数据";
pub const FETCH_FAILED: &str = "获取失败";
pub const BOOKS_FAILED: &str = "获取数据失败";
pub const BOOKS_EMPTY: &str = "没有找到小说数据";
pub const TAGS_FAILED: &str = "获取标签分布数据失败";
pub const RATINGS_FAILED: &str = "获取评分分布数据失败";
pub const AUTHORS_FAILED: &str = "获取热门作者数据失败";
pub const CORRELATION_FAILED: &str = "获取点击量与评分关系数据失败";
pub const MISSING_FIELD: &str = "-";
