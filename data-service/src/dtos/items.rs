use crate::models::Item;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub content: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ItemResponse {
    pub id: String,
    pub content: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            content: item.content,
            created_at: item.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ItemCreatedResponse {
    pub success: bool,
    pub message: String,
    pub data: ItemResponse,
}

#[derive(Debug, Serialize)]
pub struct ItemListResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<ItemResponse>,
}
