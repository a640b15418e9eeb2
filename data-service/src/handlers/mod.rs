pub mod health;
pub mod items;
pub mod meta;

pub use health::health_check;
pub use items::{create_item, list_items};
pub use meta::{not_found, service_status};
