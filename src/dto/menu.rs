use serde::Deserialize;

use crate::dto::params::Pagination;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MenuQuery {
    #[serde(flatten)]
    pub pagination: Pagination,
    pub category: Option<String>,
}

impl MenuQuery {
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = self.pagination.query();
        if let Some(category) = self.category.as_ref().filter(|c| !c.is_empty()) {
            query.push(("category", category.clone()));
        }
        query
    }
}
