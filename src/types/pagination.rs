//! Pagination engine for list endpoints.
//!
//! Listing works on a fully materialized, ordered collection: parameters are
//! normalized first, then the requested window is sliced out and the page
//! metadata computed from the collection size.

use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

use crate::config::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE};

/// Normalized pagination parameters (page >= 1, limit in [1, max_limit])
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationParams {
    pub page: u64,
    pub limit: u64,
}

impl PaginationParams {
    /// Index of the first item on this page
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE_NUMBER,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Clamp raw page/limit values: page to at least 1, limit to `[1, max_limit]`.
pub fn validate_params(page: i64, limit: i64, max_limit: u64) -> PaginationParams {
    let max_limit = max_limit.max(1);
    let page = u64::try_from(page.max(1)).unwrap_or(DEFAULT_PAGE_NUMBER);
    let limit = u64::try_from(limit.max(1)).unwrap_or(1).min(max_limit);

    PaginationParams { page, limit }
}

/// One page of a listing plus navigation metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
    pub has_next: bool,
    pub has_previous: bool,
}

/// Pagination metadata without items, for backends that count separately
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
    pub has_next: bool,
    pub has_previous: bool,
}

impl PaginationMeta {
    pub fn new(total: u64, page: u64, limit: u64) -> Self {
        let total_pages = if limit > 0 { total.div_ceil(limit) } else { 0 };

        Self {
            total,
            page,
            limit,
            total_pages,
            has_next: page < total_pages,
            has_previous: page > 1,
        }
    }

    /// Attach a page of items to this metadata
    pub fn with_items<T>(self, items: Vec<T>) -> PaginatedResponse<T> {
        PaginatedResponse {
            items,
            total: self.total,
            page: self.page,
            limit: self.limit,
            total_pages: self.total_pages,
            has_next: self.has_next,
            has_previous: self.has_previous,
        }
    }
}

/// Slice `[ (page-1)*limit, (page-1)*limit + limit )` out of `all_items`.
///
/// A window past the end yields an empty page, not an error.
pub fn paginate<T>(all_items: Vec<T>, page: u64, limit: u64) -> PaginatedResponse<T> {
    let total = all_items.len() as u64;
    let meta = PaginationMeta::new(total, page, limit);

    let start = usize::try_from(PaginationParams { page, limit }.offset()).unwrap_or(usize::MAX);
    let take = usize::try_from(limit).unwrap_or(usize::MAX);
    let items = all_items.into_iter().skip(start).take(take).collect();

    meta.with_items(items)
}

/// Raw `?page=&limit=` query values as sent by the client.
///
/// Values are kept as strings so that garbage input falls back to defaults
/// instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// 1-based page number (default 1)
    pub page: Option<String>,
    /// Items per page (default 10, capped at 100)
    pub limit: Option<String>,
}

impl PageQuery {
    pub fn new(page: impl Into<String>, limit: impl Into<String>) -> Self {
        Self {
            page: Some(page.into()),
            limit: Some(limit.into()),
        }
    }

    /// Resolve to raw `(page, limit)`; missing, non-numeric or zero values
    /// become the defaults and the limit is capped at `max_limit`.
    pub fn resolve(&self, default_limit: u64, max_limit: u64) -> (i64, i64) {
        let page = parse_leading_int(self.page.as_deref())
            .unwrap_or(DEFAULT_PAGE_NUMBER as i64);
        let limit = parse_leading_int(self.limit.as_deref())
            .unwrap_or(default_limit as i64)
            .min(max_limit as i64);

        (page, limit)
    }
}

/// Parse an optionally signed leading integer (`"12abc"` -> 12); zero counts as absent.
fn parse_leading_int(raw: Option<&str>) -> Option<i64> {
    let raw = raw?.trim_start();
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, raw.strip_prefix('+').unwrap_or(raw)),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let value: i64 = digits[..end].parse().ok()?;

    Some(sign * value).filter(|v| *v != 0)
}
