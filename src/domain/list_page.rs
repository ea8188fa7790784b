use serde::{Deserialize, Serialize};

use crate::domain::types::PageNumber;

/// One page of a paged listing as returned by the query service.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    pub page: PageNumber,
    pub total_pages: usize,
}
