//! Slicing the sorted products into pages.

use catalogue::Product;
use serde::Serialize;

/// One page of results plus the metadata a pager needs.
#[derive(Debug, Clone, Serialize)]
pub struct Page<'a> {
    pub items: Vec<&'a Product>,
    /// Products that passed the filters, before pagination
    pub total_matched: usize,
    /// The page actually served, after any reset to page 1
    pub page: usize,
    pub page_size: usize,
    /// `ceil(total_matched / page_size)`, 0 when nothing matched
    pub total_pages: usize,
}

impl Page<'_> {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Cut the window `[(page-1)*page_size, page*page_size)` out of `matched`.
///
/// - `page` and `page_size` below 1 are treated as 1
/// - when everything fits on one page the page is forced back to 1
/// - a page past the last one yields no items rather than an error
pub fn paginate(matched: Vec<&Product>, page: usize, page_size: usize) -> Page<'_> {
    let page_size = page_size.max(1);
    let total_matched = matched.len();
    let page = if total_matched <= page_size { 1 } else { page.max(1) };

    let start = (page - 1).saturating_mul(page_size);
    let items = matched.into_iter().skip(start).take(page_size).collect();

    Page {
        items,
        total_matched,
        page,
        page_size,
        total_pages: total_matched.div_ceil(page_size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn products(count: u32) -> Vec<Product> {
        (1..=count)
            .map(|id| Product::new(id, format!("Product {id}"), "misc", id as f64))
            .collect()
    }

    #[test]
    fn test_forty_five_items_in_pages_of_twenty() {
        let all = products(45);

        let page = paginate(all.iter().collect(), 1, 20);
        assert_eq!(page.items.len(), 20);
        assert_eq!(page.total_pages, 3);

        let page = paginate(all.iter().collect(), 3, 20);
        assert_eq!(page.items.len(), 5);
        assert_eq!(page.items[0].id, 41);
        assert!(!page.has_next());

        let page = paginate(all.iter().collect(), 4, 20);
        assert!(page.is_empty());
        assert_eq!(page.total_matched, 45);
    }

    #[test]
    fn test_single_page_forces_page_one() {
        let all = products(7);

        let page = paginate(all.iter().collect(), 3, 20);
        assert_eq!(page.page, 1);
        assert_eq!(page.items.len(), 7);
        assert!(!page.has_previous());
    }

    #[test]
    fn test_exactly_one_full_page() {
        let all = products(20);

        let page = paginate(all.iter().collect(), 2, 20);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.items.len(), 20);
    }

    #[test]
    fn test_empty_input() {
        let page = paginate(Vec::new(), 1, 20);
        assert!(page.is_empty());
        assert_eq!(page.total_matched, 0);
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_next());
    }

    #[test]
    fn test_zero_page_and_size_are_clamped() {
        let all = products(5);

        let page = paginate(all.iter().collect(), 0, 0);
        assert_eq!(page.page_size, 1);
        assert_eq!(page.page, 1);
        assert_eq!(page.items.len(), 1);
    }
}
