use serde::Serialize;

/// Default number of records per catalog page
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Requested page, 1-based. Zero values are clamped to 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    page_size: usize,
}

impl PageRequest {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE)
    }
}

/// One page of items plus the totals needed to render page controls
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total_items: self.total_items,
            total_pages: self.total_pages,
        }
    }
}

/// Paginator - pure slicing of an already-filtered sequence
pub struct Paginator;

impl Paginator {
    pub fn paginate<T>(items: Vec<T>, request: PageRequest) -> Page<T> {
        let total_items = items.len();
        let total_pages = total_items.div_ceil(request.page_size());
        let start = (request.page() - 1).saturating_mul(request.page_size());

        let page_items = items
            .into_iter()
            .skip(start)
            .take(request.page_size())
            .collect();

        Page {
            items: page_items,
            page: request.page(),
            page_size: request.page_size(),
            total_items,
            total_pages,
        }
    }
}
