/// Page size used by the browse views.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 16;

/// Up to this many pages are listed without compression.
const MAX_UNCOMPRESSED_PAGES: usize = 7;

/// Number of pages needed for `total_items`, never less than one.
pub fn total_pages(total_items: usize, items_per_page: usize) -> usize {
    if items_per_page == 0 {
        return 1;
    }
    total_items.div_ceil(items_per_page).max(1)
}

/// Page numbers to render, `None` standing for an ellipsis.
///
/// Lists every page up to seven. Beyond that keeps the first page, the last
/// page and `current_page ± 1`; a gap of a single page is filled with that
/// page instead of an ellipsis.
pub fn page_sequence(total_pages: usize, current_page: usize) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }
    if last_page <= MAX_UNCOMPRESSED_PAGES {
        return (1..=last_page).map(Some).collect();
    }

    let current_page = current_page.clamp(1, last_page);
    let mut pages = vec![Some(1)];

    let mid_start = current_page.saturating_sub(1).max(2);
    let mid_end = (current_page + 1).min(last_page - 1);

    match mid_start - 2 {
        0 => {}
        1 => pages.push(Some(2)),
        _ => pages.push(None),
    }
    pages.extend((mid_start..=mid_end).map(Some));

    match (last_page - 1).saturating_sub(mid_end) {
        0 => {}
        1 => pages.push(Some(last_page - 1)),
        _ => pages.push(None),
    }
    pages.push(Some(last_page));

    pages
}

/// Current page, page size and server-reported total.
///
/// `current_page` always stays within `[1, total_pages()]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    current_page: usize,
    items_per_page: usize,
    total_items: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(DEFAULT_ITEMS_PER_PAGE)
    }
}

impl PageState {
    pub fn new(items_per_page: usize) -> Self {
        Self {
            current_page: 1,
            items_per_page: items_per_page.max(1),
            total_items: 0,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_items, self.items_per_page)
    }

    /// Moves to page `page`. Returns `false` and stays put when out of range.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        if page < 1 || page > self.total_pages() {
            return false;
        }
        self.current_page = page;
        true
    }

    /// Back to page 1, as required after any filter change.
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Records a new total and pulls the current page back into range.
    pub fn set_total(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.current_page = self.current_page.clamp(1, self.total_pages());
    }

    pub fn page_sequence(&self) -> Vec<Option<usize>> {
        page_sequence(self.total_pages(), self.current_page)
    }
}
