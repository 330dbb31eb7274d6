use crate::catalog::domain::{Category, FilterCriteria};
use crate::catalog::services::{PageRequest, SortOrder};

/// Request for one page of a filtered category catalog
#[derive(Debug, Clone, PartialEq)]
pub struct BrowseRequest {
    pub category: Category,
    pub criteria: FilterCriteria,
    pub sort: SortOrder,
    pub page: PageRequest,
}

impl BrowseRequest {
    /// Unfiltered first page in catalog order
    pub fn new(category: Category) -> Self {
        Self {
            category,
            criteria: FilterCriteria::default(),
            sort: SortOrder::default(),
            page: PageRequest::default(),
        }
    }

    pub fn with_criteria(mut self, criteria: FilterCriteria) -> Self {
        self.criteria = criteria;
        self
    }

    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_page(mut self, page: PageRequest) -> Self {
        self.page = page;
        self
    }
}
