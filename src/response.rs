use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub current_page: i64,
    pub total_pages: i64,
    pub total_items: i64,
    pub limit: i64,
}

impl PageInfo {
    /// A single-page result needs no pagination controls.
    pub fn single_page(&self) -> bool {
        self.total_pages <= 1
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paged<T> {
    #[serde(alias = "items")]
    pub data: Vec<T>,
    pub pagination: PageInfo,
}
