//! Response envelope types shared by every API surface.
//!
//! All endpoints reply with the same JSON shape: a `data` payload plus a
//! human-readable `message`. List endpoints add a `meta` block with
//! pagination counters so clients can render pagers without a second
//! round-trip.

use serde::Serialize;
use utoipa::ToSchema;

/// Standard envelope for single-item responses: `{ "data": ..., "message": ... }`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub data: T,
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            message: message.into(),
        }
    }
}

/// Pagination counters attached to list responses.
///
/// `page` is 1-based and `total_pages` is computed with a ceiling division,
/// so a partial last page still counts as a page.
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// Total matching documents across all pages.
    pub total: u64,
    /// The page that was returned (1-based).
    pub page: u64,
    /// Number of pages at the requested page size.
    pub total_pages: u64,
}

impl PageMeta {
    pub fn new(total: u64, page: u64, limit: u64) -> Self {
        Self {
            total,
            page,
            total_pages: total.div_ceil(limit.max(1)),
        }
    }
}

/// Envelope for list responses: `{ "data": [...], "meta": {...}, "message": ... }`.
#[derive(Debug, Serialize, ToSchema)]
pub struct PagedResponse<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
    pub message: String,
}

impl<T> PagedResponse<T> {
    pub fn new(data: Vec<T>, meta: PageMeta, message: impl Into<String>) -> Self {
        Self {
            data,
            meta,
            message: message.into(),
        }
    }
}
