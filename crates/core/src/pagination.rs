//! Page/limit arithmetic for list endpoints.

/// Page returned when the client does not ask for one.
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when the client does not ask for one.
pub const DEFAULT_LIMIT: i64 = 10;

/// Upper bound on any requested page size.
pub const MAX_LIMIT: i64 = 100;

/// A resolved `LIMIT`/`OFFSET` pair, always within bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: i64,
    pub offset: i64,
}

impl Page {
    /// Resolve 1-based `page` and `limit` query values into a window.
    ///
    /// Pages below 1 are treated as the first page; the limit is clamped to
    /// `1..=MAX_LIMIT`.
    pub fn resolve(page: Option<i64>, limit: Option<i64>) -> Self {
        let page = page.unwrap_or(DEFAULT_PAGE).max(1);
        let limit = clamp_limit(limit, DEFAULT_LIMIT, MAX_LIMIT);
        Self {
            limit,
            offset: (page - 1).saturating_mul(limit),
        }
    }
}

/// Clamp a user-provided limit to `[1, max]`, falling back to `default`.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}
