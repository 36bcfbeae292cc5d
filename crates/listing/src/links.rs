//! Pagination control items (previous, numbered links, ellipses, next).

use serde::Serialize;

/// One item of the pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageLink {
    Previous { target: usize, disabled: bool },
    Page { number: usize, active: bool },
    Ellipsis,
    Next { target: usize, disabled: bool },
}

/// Numbered links shown without ellipses up to this many pages.
const COMPACT_LIMIT: usize = 7;

/// Items for a control positioned at `current` of `total_pages`.
///
/// A single page needs no control, so `total_pages <= 1` yields nothing.
/// Beyond seven pages the control shows the first and last page, a window
/// around the current page, and ellipses for the gaps.
pub fn page_links(current: usize, total_pages: usize) -> Vec<PageLink> {
    if total_pages <= 1 {
        return Vec::new();
    }
    let current = current.clamp(1, total_pages);
    let page = |number: usize| PageLink::Page {
        number,
        active: number == current,
    };

    let mut items = vec![PageLink::Previous {
        target: current.saturating_sub(1).max(1),
        disabled: current == 1,
    }];

    if total_pages <= COMPACT_LIMIT {
        items.extend((1..=total_pages).map(page));
    } else {
        items.push(page(1));
        if current > 3 {
            items.push(PageLink::Ellipsis);
        }

        let (start, end) = if current >= total_pages - 2 {
            ((total_pages - 3).max(2), total_pages - 1)
        } else if current <= 3 {
            (2, (total_pages - 1).min(4))
        } else {
            ((current - 1).max(2), (current + 1).min(total_pages - 1))
        };
        items.extend((start..=end).map(page));

        if current < total_pages - 2 {
            items.push(PageLink::Ellipsis);
        }
        items.push(page(total_pages));
    }

    items.push(PageLink::Next {
        target: (current + 1).min(total_pages),
        disabled: current == total_pages,
    });
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(links: &[PageLink]) -> String {
        links
            .iter()
            .map(|l| match l {
                PageLink::Previous { disabled, .. } => (if *disabled { "<x" } else { "<" }).to_string(),
                PageLink::Next { disabled, .. } => (if *disabled { "x>" } else { ">" }).to_string(),
                PageLink::Ellipsis => "...".to_string(),
                PageLink::Page { number, active: true } => format!("[{number}]"),
                PageLink::Page { number, .. } => number.to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn single_page_has_no_control() {
        assert!(page_links(1, 1).is_empty());
        assert!(page_links(1, 0).is_empty());
    }

    #[test]
    fn short_ranges_list_every_page() {
        assert_eq!(render(&page_links(1, 3)), "<x [1] 2 3 >");
        assert_eq!(render(&page_links(3, 3)), "< 1 2 [3] x>");
        assert_eq!(render(&page_links(4, 7)), "< 1 2 3 [4] 5 6 7 >");
    }

    #[test]
    fn long_ranges_window_the_middle() {
        assert_eq!(render(&page_links(1, 10)), "<x [1] 2 3 4 ... 10 >");
        assert_eq!(render(&page_links(3, 10)), "< 1 2 [3] 4 ... 10 >");
        assert_eq!(render(&page_links(5, 10)), "< 1 ... 4 [5] 6 ... 10 >");
        assert_eq!(render(&page_links(8, 10)), "< 1 ... 7 [8] 9 10 >");
        assert_eq!(render(&page_links(10, 10)), "< 1 ... 7 8 9 [10] x>");
    }

    #[test]
    fn targets_step_by_one() {
        let links = page_links(5, 10);
        assert_eq!(links.first(), Some(&PageLink::Previous { target: 4, disabled: false }));
        assert_eq!(links.last(), Some(&PageLink::Next { target: 6, disabled: false }));
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_value(PageLink::Page { number: 2, active: true }).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "page", "number": 2, "active": true }));
    }
}
