use axum::http::header::{CONTENT_RANGE, HeaderMap, HeaderValue};
use serde::Deserialize;

use crate::models::PageParams;

// OFFSET and LIMIT are bound as signed 64-bit integers
const MAX_SQL_BOUND: u64 = i64::MAX.unsigned_abs();

/// Page size limits applied to `index` and `search`.
///
/// Deserializable so hosts can keep it next to the rest of their settings.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PaginationConfig {
    pub default_per_page: u64,
    pub max_per_page: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_per_page: 10,
            max_per_page: 1000,
        }
    }
}

impl PaginationConfig {
    fn clamp(&self, per_page: u64) -> u64 {
        per_page.clamp(1, self.max_per_page.clamp(1, MAX_SQL_BOUND))
    }
}

/// Parse a React Admin `[start, end]` range, falling back to the first page.
#[must_use]
pub fn parse_range(range: &str, config: &PaginationConfig) -> (u64, u64) {
    serde_json::from_str::<[u64; 2]>(range)
        .map(|[start, end]| (start, end))
        .unwrap_or((0, config.default_per_page.saturating_sub(1)))
}

/// Resolve `(offset, limit)` from the request parameters.
///
/// `page`/`per_page` win over `range`; `page` is 1-based and `page=0` is
/// treated as the first page. Offsets past what the database accepts are
/// capped, which yields an empty page.
#[must_use]
pub fn parse_pagination(params: &PageParams, config: &PaginationConfig) -> (u64, u64) {
    let (offset, limit) = if params.page.is_some() || params.per_page.is_some() {
        let per_page = config.clamp(params.per_page.unwrap_or(config.default_per_page));
        let page = params.page.unwrap_or(1);
        (page.saturating_sub(1).saturating_mul(per_page), per_page)
    } else if let Some(range) = &params.range {
        let (start, end) = parse_range(range, config);
        let limit = config.clamp(end.saturating_sub(start).saturating_add(1));
        (start, limit)
    } else {
        (0, config.clamp(config.default_per_page))
    };
    (offset.min(MAX_SQL_BOUND), limit)
}

fn sanitize_resource_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii() && !c.is_ascii_control())
        .collect()
}

/// Build the `Content-Range: <resource> <first>-<last>/<total>` header for a page.
#[must_use]
pub fn calculate_content_range(
    offset: u64,
    limit: u64,
    total_count: u64,
    resource_name: &str,
) -> HeaderMap {
    let last = offset
        .saturating_add(limit)
        .saturating_sub(1)
        .min(total_count.saturating_sub(1));
    let content_range = format!(
        "{} {offset}-{last}/{total_count}",
        sanitize_resource_name(resource_name)
    );

    let mut headers = HeaderMap::new();
    let value = HeaderValue::from_str(&content_range)
        .unwrap_or_else(|_| HeaderValue::from_static("items 0-0/0"));
    headers.insert(CONTENT_RANGE, value);
    headers
}
