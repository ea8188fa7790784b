//! Page navigation links for paged listings.

use serde::Serialize;

use crate::domain::list_page::ListPage;

fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// Navigation bar for a paged listing. `None` entries render as gaps.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PageLinks {
    pub pages: Vec<Option<usize>>,
    pub page: usize,
}

impl PageLinks {
    pub fn new(current_page: usize, total_pages: usize) -> Self {
        let current_page = if current_page == 0 { 1 } else { current_page };

        let pages = get_pages(total_pages, current_page, 2, 2, 4, 2);

        Self {
            pages,
            page: current_page,
        }
    }
}

impl<T> From<&ListPage<T>> for PageLinks {
    fn from(list: &ListPage<T>) -> Self {
        Self::new(list.page.get(), list.total_pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::PageNumber;

    #[test]
    fn no_pages_for_empty_listing() {
        assert!(PageLinks::new(1, 0).pages.is_empty());
    }

    #[test]
    fn short_listing_shows_every_page() {
        let links = PageLinks::new(2, 4);
        assert_eq!(links.pages, vec![Some(1), Some(2), Some(3), Some(4)]);
        assert_eq!(links.page, 2);
    }

    #[test]
    fn distant_pages_collapse_into_gaps() {
        let links = PageLinks::new(10, 20);
        assert_eq!(
            links.pages,
            vec![
                Some(1),
                Some(2),
                None,
                Some(8),
                Some(9),
                Some(10),
                Some(11),
                Some(12),
                Some(13),
                Some(14),
                None,
                Some(19),
                Some(20),
            ]
        );
    }

    #[test]
    fn links_follow_list_page() {
        let list: ListPage<()> = ListPage {
            items: vec![],
            page: PageNumber::new(3),
            total_pages: 3,
        };
        let links = PageLinks::from(&list);
        assert_eq!(links.page, 3);
        assert_eq!(links.pages, vec![Some(1), Some(2), Some(3)]);
    }
}
