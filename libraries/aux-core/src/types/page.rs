/// Paginated response envelope
use serde::{Deserialize, Serialize};

/// Paginated list envelope used by feed, search, and follower endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paginated<T> {
    /// The page of items
    pub items: Vec<T>,

    /// Total matching items on the server
    pub total: u64,

    /// Page size requested
    pub limit: u32,

    /// Offset of the first item in this page
    pub offset: u32,
}

impl<T> Paginated<T> {
    /// True when `offset + items.len()` has reached `total`.
    pub fn is_last_page(&self) -> bool {
        u64::from(self.offset) + self.items.len() as u64 >= self.total
    }
}
