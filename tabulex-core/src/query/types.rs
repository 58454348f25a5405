use serde::{Deserialize, Serialize};
use tabulex_contracts::record_like::Tabular;
use tabulex_model::fields::SortOrder;

/// Main query structure that works everywhere
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TableQuery {
    /// Raw search input; trimmed and lower-cased by the filter stage.
    pub search: String,
    pub sort: SortCriteria,
    pub page: PageRequest,
}

impl TableQuery {
    /// Query seeded with the record shape's default sort.
    pub fn for_record<R: Tabular>() -> Self {
        Self {
            search: String::new(),
            sort: SortCriteria::for_record::<R>(),
            page: PageRequest::default(),
        }
    }
}

/// Sort criteria for queries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SortCriteria {
    pub field: String,
    pub order: SortOrder,
}

impl SortCriteria {
    pub fn for_record<R: Tabular>() -> Self {
        let (field, order) = R::default_sort();
        Self {
            field: field.to_string(),
            order,
        }
    }
}

impl Default for SortCriteria {
    fn default() -> Self {
        Self {
            field: "created_at".to_string(),
            order: SortOrder::Descending,
        }
    }
}

/// Page request options
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageRequest {
    /// 1-based page number.
    pub page: u32,
    pub per_page: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 10,
        }
    }
}

/// Pagination facts describing a full (unsliced) result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub total: u64,
    pub per_page: u32,
    pub current_page: u32,
    /// Number of the last page; 0 when the result set is empty.
    pub last_page: u32,
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            total: 0,
            per_page: PageRequest::default().per_page,
            current_page: 1,
            last_page: 0,
        }
    }
}

/// One fetched page plus its pagination facts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchPayload<R> {
    pub records: Vec<R>,
    pub meta: PageMeta,
}

/// Snapshot handed to the presentation layer.
#[derive(Debug, Clone)]
pub struct PageView<R> {
    pub items: Vec<R>,
    pub total_items: u64,
    pub total_pages: u32,
    pub current_page: u32,
}
