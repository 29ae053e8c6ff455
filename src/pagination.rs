use serde::Serialize;

/// Page size applied when the caller does not supply `limit`.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Metadata describing where a page sits within the matching result set.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Requested page, echoed verbatim even when it lies past the last page.
    pub current_page: usize,
    /// Number of pages needed for the matching records, never below one.
    pub total_pages: usize,
    /// Number of records matching the filter.
    pub total_customers: usize,
}

/// Bounds of a page inside the filtered sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageWindow {
    pub offset: usize,
    pub len: usize,
    pub info: PageInfo,
}

impl PageWindow {
    /// Half-open index range of the page, always within `0..total`.
    pub fn range(&self) -> std::ops::Range<usize> {
        self.offset..self.offset + self.len
    }
}

/// Computes the slice bounds for `page` of size `limit` over `total` matches.
///
/// Pages past the end produce an empty window rather than an error. Both
/// `page` and `limit` are expected to be at least one; zero is treated as one.
pub fn paginate(total: usize, page: usize, limit: usize) -> PageWindow {
    let limit = limit.max(1);
    let page = page.max(1);

    let offset = (page - 1).saturating_mul(limit);
    let len = if offset >= total {
        0
    } else {
        limit.min(total - offset)
    };

    PageWindow {
        offset: offset.min(total),
        len,
        info: PageInfo {
            current_page: page,
            total_pages: total.div_ceil(limit).max(1),
            total_customers: total,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_of_larger_set() {
        let window = paginate(25, 1, 10);
        assert_eq!(window.range(), 0..10);
        assert_eq!(
            window.info,
            PageInfo {
                current_page: 1,
                total_pages: 3,
                total_customers: 25,
            }
        );
    }

    #[test]
    fn last_page_is_clipped() {
        let window = paginate(25, 3, 10);
        assert_eq!(window.range(), 20..25);
        assert_eq!(window.info.total_pages, 3);
    }

    #[test]
    fn page_beyond_end_is_empty_and_echoed() {
        let window = paginate(25, 9999, 10);
        assert_eq!(window.len, 0);
        assert_eq!(window.range(), 25..25);
        assert_eq!(window.info.current_page, 9999);
        assert_eq!(window.info.total_pages, 3);
    }

    #[test]
    fn empty_set_still_reports_one_page() {
        let window = paginate(0, 1, 10);
        assert_eq!(window.len, 0);
        assert_eq!(window.info.total_pages, 1);
        assert_eq!(window.info.total_customers, 0);
    }

    #[test]
    fn exact_multiple_does_not_add_a_page() {
        assert_eq!(paginate(20, 2, 10).info.total_pages, 2);
        assert_eq!(paginate(20, 2, 10).range(), 10..20);
        assert_eq!(paginate(21, 3, 10).info.total_pages, 3);
    }

    #[test]
    fn huge_page_numbers_do_not_overflow() {
        let window = paginate(5, usize::MAX, usize::MAX);
        assert_eq!(window.len, 0);
        assert_eq!(window.info.total_pages, 1);
    }

    #[test]
    fn page_length_never_exceeds_limit() {
        for total in 0..40 {
            for limit in 1..12 {
                for page in 1..8 {
                    let window = paginate(total, page, limit);
                    assert!(window.len <= limit);
                    assert!(window.range().end <= total);
                    assert_eq!(
                        window.info.total_pages,
                        total.div_ceil(limit).max(1)
                    );
                }
            }
        }
    }
}
