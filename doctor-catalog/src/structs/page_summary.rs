use serde::{Deserialize, Serialize};

/// Pagination figures a result list shows under its cards
/// ("Showing 11-20 of 137", page buttons).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSummary {
    /// 1-based current page.
    pub page: usize,
    pub page_size: usize,
    /// Never less than 1, even for empty results.
    pub total_pages: usize,
    /// 1-based index of the first shown result; 0 when there are none.
    pub start_result: usize,
    /// 1-based index of the last shown result.
    pub end_result: usize,
}

impl PageSummary {
    pub fn new(total: usize, page: usize, page_size: usize) -> Self {
        let page = page.max(1);
        let total_pages = if page_size == 0 {
            1
        } else {
            total.div_ceil(page_size).max(1)
        };
        let start_result = if total == 0 {
            0
        } else {
            (page - 1).saturating_mul(page_size).saturating_add(1)
        };
        let end_result = page.saturating_mul(page_size).min(total);

        Self {
            page,
            page_size,
            total_pages,
            start_result,
            end_result,
        }
    }
}
