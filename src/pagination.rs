//! Page links shown under a list: edge pages, a window around the current
//! page, and `None` where pages are elided.

/// Pages always shown at each end of the range.
const EDGE_PAGES: usize = 2;
/// Pages shown on each side of the current page.
const AROUND_CURRENT: usize = 2;

fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    if total_pages == 0 {
        return vec![];
    }

    let current_page = current_page.min(total_pages - 1);
    let mut pages = Vec::new();

    let left_end = left_edge.min(total_pages);
    pages.extend((0..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1)
        .min(total_pages)
        .max(mid_start);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(total_pages.saturating_sub(right_edge));

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..total_pages).map(Some));

    pages
}

/// Zero-based page indices to render as pagination buttons.
pub fn page_links(total_pages: usize, current_page: usize) -> Vec<Option<usize>> {
    get_pages(
        total_pages,
        current_page,
        EDGE_PAGES,
        AROUND_CURRENT,
        AROUND_CURRENT,
        EDGE_PAGES,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_pages_without_results() {
        assert!(page_links(0, 0).is_empty());
        assert_eq!(page_links(1, 0), vec![Some(0)]);
    }

    #[test]
    fn short_ranges_are_not_elided() {
        assert_eq!(page_links(3, 1), vec![Some(0), Some(1), Some(2)]);
    }

    #[test]
    fn elides_both_sides_around_middle_page() {
        assert_eq!(
            page_links(10, 5),
            vec![
                Some(0),
                Some(1),
                None,
                Some(3),
                Some(4),
                Some(5),
                Some(6),
                Some(7),
                Some(8),
                Some(9),
            ]
        );
    }

    #[test]
    fn elides_tail_on_first_page() {
        assert_eq!(
            page_links(10, 0),
            vec![Some(0), Some(1), Some(2), None, Some(8), Some(9)]
        );
    }

    #[test]
    fn elides_head_on_last_page() {
        assert_eq!(
            page_links(12, 11),
            vec![Some(0), Some(1), None, Some(9), Some(10), Some(11)]
        );
    }

    #[test]
    fn out_of_range_current_page_is_clamped() {
        assert_eq!(page_links(3, 7), vec![Some(0), Some(1), Some(2)]);
    }

    #[test]
    fn narrow_window_never_repeats_pages() {
        assert_eq!(get_pages(3, 0, 2, 0, 0, 2), vec![Some(0), Some(1), Some(2)]);
    }
}
