use crate::{
    client::ApiClient,
    dto::{menu::MenuQuery, params::Pagination},
    error::AppResult,
    models::{Category, MenuItem},
    response::Paged,
};

impl ApiClient {
    pub async fn list_menu_items(&self, query: &MenuQuery) -> AppResult<Paged<MenuItem>> {
        self.get_json("/menu/item", &query.query()).await
    }

    pub async fn list_categories(&self, pagination: &Pagination) -> AppResult<Paged<Category>> {
        self.get_json("/menu/category", &pagination.query()).await
    }
}
