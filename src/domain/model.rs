use serde::{Deserialize, Serialize};
use std::fmt;

/// 要新增的店家資料（送往 API 的 payload）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreRecord {
    #[serde(rename = "type")]
    pub store_type: StoreType,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

/// 伺服器只接受這三種店家類型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreType {
    Tacos,
    Icecream,
    Other,
}

/// API 建立資源後回傳的識別碼，可能是字串或數字
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceId {
    Text(String),
    Number(i64),
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceId::Text(s) => write!(f, "{}", s),
            ResourceId::Number(n) => write!(f, "{}", n),
        }
    }
}

/// 列表與查詢回傳的店家（含伺服器指派的 id）
#[derive(Debug, Clone, Deserialize)]
pub struct Store {
    pub id: String,
    #[serde(flatten)]
    pub record: StoreRecord,
}

/// PATCH 用的部分更新；未設定的欄位不會出現在 body 中。type 不可變更
#[derive(Debug, Clone, Default, Serialize)]
pub struct StoreUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Base,
    Filling,
    Topping,
}

/// 要新增的菜單品項，`store` 為所屬店家的 id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemRecord {
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub store: String,
    pub name: String,
    pub slug: String,
    pub descr: String,
    pub price: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MenuItem {
    pub key: String,
    #[serde(flatten)]
    pub record: MenuItemRecord,
}

/// 菜單品項的部分更新。type 與 store 不可變更
#[derive(Debug, Clone, Default, Serialize)]
pub struct MenuItemUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
}

/// 開立訂單：顧客 id 與店家 id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRecord {
    pub cust: String,
    pub store: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub order: String,
    pub item: String,
    pub count: i32,
}
