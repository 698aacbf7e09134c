pub mod client;

pub use crate::domain::model::{
    ItemType, MenuItem, MenuItemRecord, MenuItemUpdate, OrderItem, OrderRecord, ResourceId, Store,
    StoreRecord, StoreType, StoreUpdate,
};
pub use crate::utils::error::Result;
