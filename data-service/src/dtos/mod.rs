pub mod items;

pub use items::{CreateItemRequest, ItemCreatedResponse, ItemListResponse, ItemResponse};
