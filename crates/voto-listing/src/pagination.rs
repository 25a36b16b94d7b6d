//! Pagination Slicer
//!
//! 1-based page windows over the filtered list. Out-of-range pages are
//! clamped, never rejected.

/// Page sizes offered by the page-size selector
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [18, 27, 36, 45];

pub const DEFAULT_PAGE_SIZE: usize = PAGE_SIZE_OPTIONS[0];

/// How many numbered buttons the navigator shows at most
const MAX_PAGE_LINKS: usize = 5;

/// Current page and page size of the list view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pagination {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Move to `page`; the page size is left alone
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Change the page size and go back to the first page
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }

    /// Called whenever the filtered set changes
    pub fn reset(&mut self) {
        self.page = 1;
    }

    pub fn window<'a, T>(&self, items: &'a [T]) -> PageWindow<'a, T> {
        paginate(items, self.page, self.page_size)
    }
}

/// Pagination tagged with the revision of the filtered set it was chosen
/// for. A newer revision reads back as page 1 with the same page size, so
/// a changed filter never renders a stale page first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageRequest {
    revision: u64,
    pagination: Pagination,
}

impl PageRequest {
    /// Pagination in effect while the filtered set is at `revision`
    pub fn resolve(&self, revision: u64) -> Pagination {
        let mut pagination = self.pagination;
        if self.revision != revision {
            pagination.reset();
        }
        pagination
    }

    pub fn go_to(&mut self, revision: u64, page: usize) {
        self.rebase(revision);
        self.pagination.set_page(page);
    }

    pub fn resize(&mut self, revision: u64, page_size: usize) {
        self.rebase(revision);
        self.pagination.set_page_size(page_size);
    }

    fn rebase(&mut self, revision: u64) {
        self.pagination = self.resolve(revision);
        self.revision = revision;
    }
}

/// `ceil(total / page_size)`, never less than 1
pub fn total_pages(total: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    total.div_ceil(page_size).max(1)
}

/// The visible slice of a list plus where it sits in the whole
#[derive(Debug, PartialEq, Eq)]
pub struct PageWindow<'a, T> {
    pub items: &'a [T],
    /// Page actually shown, after clamping
    pub page: usize,
    pub total_pages: usize,
    /// 1-based index of the first visible item, 0 when empty
    pub first: usize,
    /// 1-based index of the last visible item, 0 when empty
    pub last: usize,
    pub total: usize,
}

impl<T> PageWindow<'_, T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Range line shown under the grid
    pub fn summary(&self) -> String {
        format!("Mostrando {} - {} of {} items", self.first, self.last, self.total)
    }
}

/// Slice out page `page` (1-based) of `items`
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> PageWindow<'_, T> {
    let page_size = page_size.max(1);
    let total = items.len();
    let total_pages = total_pages(total, page_size);
    let page = page.clamp(1, total_pages);

    let start = ((page - 1) * page_size).min(total);
    let end = (start + page_size).min(total);
    let (first, last) = if start < end { (start + 1, end) } else { (0, 0) };

    PageWindow {
        items: &items[start..end],
        page,
        total_pages,
        first,
        last,
        total,
    }
}

/// Entry in the page navigator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Page { number: usize, current: bool },
    Gap,
}

/// Numbered buttons around `current`, with gaps when pages are skipped
pub fn page_links(current: usize, total_pages: usize) -> Vec<PageLink> {
    let total_pages = total_pages.max(1);
    let current = current.clamp(1, total_pages);

    let span = MAX_PAGE_LINKS.min(total_pages);
    let mut start = current.saturating_sub(span / 2).max(1);
    if start + span - 1 > total_pages {
        start = total_pages + 1 - span;
    }
    let end = start + span - 1;

    let mut links = Vec::with_capacity(span + 2);
    if start > 1 {
        links.push(PageLink::Gap);
    }
    for number in start..=end {
        links.push(PageLink::Page { number, current: number == current });
    }
    if end < total_pages {
        links.push(PageLink::Gap);
    }
    links
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(links: &[PageLink]) -> Vec<Option<usize>> {
        links
            .iter()
            .map(|l| match l {
                PageLink::Page { number, .. } => Some(*number),
                PageLink::Gap => None,
            })
            .collect()
    }

    #[test]
    fn test_scenario_d() {
        let items = [1, 2, 3];
        let window = paginate(&items, 2, 1);
        assert_eq!(window.items, &[2]);
        assert_eq!(window.total_pages, 3);
        assert_eq!(window.page, 2);
    }

    #[test]
    fn test_window_lengths_for_every_page() {
        let items: Vec<u32> = (0..95).collect();
        for size in PAGE_SIZE_OPTIONS {
            let pages = total_pages(items.len(), size);
            assert_eq!(pages, (95 + size - 1) / size);
            for p in 1..=pages {
                let window = paginate(&items, p, size);
                assert_eq!(window.items.len(), size.min(95 - (p - 1) * size));
                assert_eq!(window.items[0], ((p - 1) * size) as u32);
            }
        }
    }

    #[test]
    fn test_empty_list_has_one_page() {
        let items: [u8; 0] = [];
        let window = paginate(&items, 1, 18);
        assert_eq!(window.total_pages, 1);
        assert!(window.is_empty());
        assert_eq!(window.summary(), "Mostrando 0 - 0 of 0 items");
    }

    #[test]
    fn test_out_of_range_pages_clamp() {
        let items: Vec<u32> = (0..10).collect();
        let window = paginate(&items, 99, 4);
        assert_eq!(window.page, 3);
        assert_eq!(window.items, &[8, 9]);

        let window = paginate(&items, 0, 4);
        assert_eq!(window.page, 1);
        assert_eq!(window.items, &[0, 1, 2, 3]);

        let window = paginate(&items, 1, 0);
        assert_eq!(window.items, &[0]);
    }

    #[test]
    fn test_summary_and_navigation_flags() {
        let items: Vec<u32> = (0..40).collect();
        let window = paginate(&items, 3, 18);
        assert_eq!(window.summary(), "Mostrando 37 - 40 of 40 items");
        assert!(window.has_prev());
        assert!(!window.has_next());
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let mut pagination = Pagination::default();
        assert_eq!(pagination.page_size(), 18);
        pagination.set_page(3);
        pagination.set_page_size(36);
        assert_eq!(pagination.page(), 1);
        assert_eq!(pagination.page_size(), 36);
    }

    #[test]
    fn test_set_page_keeps_page_size() {
        let mut pagination = Pagination::new(27);
        pagination.set_page(4);
        assert_eq!(pagination.page(), 4);
        assert_eq!(pagination.page_size(), 27);
        pagination.reset();
        assert_eq!(pagination.page(), 1);
        assert_eq!(pagination.page_size(), 27);
    }

    #[test]
    fn test_page_links() {
        assert_eq!(numbers(&page_links(1, 1)), vec![Some(1)]);
        assert_eq!(numbers(&page_links(2, 3)), vec![Some(1), Some(2), Some(3)]);
        assert_eq!(
            numbers(&page_links(1, 10)),
            vec![Some(1), Some(2), Some(3), Some(4), Some(5), None]
        );
        assert_eq!(
            numbers(&page_links(6, 10)),
            vec![None, Some(4), Some(5), Some(6), Some(7), Some(8), None]
        );
        assert_eq!(
            numbers(&page_links(10, 10)),
            vec![None, Some(6), Some(7), Some(8), Some(9), Some(10)]
        );
        assert!(page_links(6, 10).contains(&PageLink::Page { number: 6, current: true }));
    }

    #[test]
    fn test_page_request_resets_on_new_revision() {
        let mut request = PageRequest::default();
        request.resize(0, 27);
        request.go_to(0, 3);
        assert_eq!(request.resolve(0).page(), 3);

        // filtered set changed: page 1 straight away, page size kept
        let next = request.resolve(1);
        assert_eq!(next.page(), 1);
        assert_eq!(next.page_size(), 27);

        request.go_to(1, 2);
        assert_eq!(request.resolve(1).page(), 2);
        assert_eq!(request.resolve(2).page(), 1);
    }

    #[test]
    fn test_page_request_resize_resets_page() {
        let mut request = PageRequest::default();
        request.go_to(4, 5);
        request.resize(4, 45);
        let pagination = request.resolve(4);
        assert_eq!(pagination.page(), 1);
        assert_eq!(pagination.page_size(), 45);
    }
}
