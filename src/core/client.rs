use crate::domain::model::{
    MenuItem, MenuItemRecord, MenuItemUpdate, OrderItem, OrderRecord, ResourceId, Store,
    StoreRecord, StoreUpdate,
};
use crate::utils::error::{ClientError, Result};
use reqwest::Client;

/// tacos API 的 HTTP 客戶端
pub struct TacosClient {
    base_url: String,
    client: Client,
}

/// 從建立回應的 body 取出 `id` 欄位
fn id_from_body(body: serde_json::Value) -> Result<ResourceId> {
    match body.get("id") {
        Some(id) => Ok(serde_json::from_value(id.clone())?),
        None => Err(ClientError::MissingFieldError {
            field: "id".to_string(),
        }),
    }
}

impl TacosClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }

    /// 建立店家，回傳伺服器指派的識別碼
    ///
    /// 狀態碼刻意不檢查：只要回應 body 是帶有 `id` 的 JSON 就算成功。
    pub async fn create_store(&self, store: &StoreRecord) -> Result<ResourceId> {
        let url = format!("{}/api/v1/stores", self.base_url);
        tracing::debug!("📡 PUT {}", url);

        let response = self.client.put(&url).json(store).send().await?;
        tracing::debug!("📡 response status: {}", response.status());

        let body: serde_json::Value = response.json().await?;
        let id = id_from_body(body)?;

        tracing::info!("📡 store created: {}", id);
        Ok(id)
    }

    /// 列出所有店家
    pub async fn list_stores(&self) -> Result<Vec<Store>> {
        let url = format!("{}/api/v1/stores", self.base_url);
        tracing::debug!("📡 GET {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(ClientError::StatusError {
                status: response.status(),
            });
        }

        let stores: Vec<Store> = response.json().await?;
        tracing::info!("📡 fetched {} stores", stores.len());
        Ok(stores)
    }

    /// 以 id 查詢單一店家
    pub async fn get_store(&self, id: &str) -> Result<Store> {
        let url = format!("{}/api/v1/stores/{}", self.base_url, id);
        tracing::debug!("📡 GET {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(ClientError::StatusError {
                status: response.status(),
            });
        }

        Ok(response.json().await?)
    }

    /// 更新店家資料，body 只帶有設定的欄位
    pub async fn update_store(&self, id: &str, update: &StoreUpdate) -> Result<()> {
        let url = format!("{}/api/v1/stores/{}", self.base_url, id);
        tracing::debug!("📡 PATCH {}", url);

        let response = self.client.patch(&url).json(update).send().await?;
        if !response.status().is_success() {
            return Err(ClientError::StatusError {
                status: response.status(),
            });
        }

        tracing::info!("📡 store {} updated", id);
        Ok(())
    }

    /// 刪除店家
    pub async fn delete_store(&self, id: &str) -> Result<()> {
        let url = format!("{}/api/v1/stores/{}", self.base_url, id);
        tracing::debug!("📡 DELETE {}", url);

        let response = self.client.delete(&url).send().await?;
        if !response.status().is_success() {
            return Err(ClientError::StatusError {
                status: response.status(),
            });
        }

        tracing::info!("📡 store {} deleted", id);
        Ok(())
    }

    /// 新增菜單品項
    pub async fn add_menu_item(&self, item: &MenuItemRecord) -> Result<ResourceId> {
        let url = format!("{}/api/v1/menu", self.base_url);
        tracing::debug!("📡 PUT {}", url);

        let response = self.client.put(&url).json(item).send().await?;
        if !response.status().is_success() {
            return Err(ClientError::StatusError {
                status: response.status(),
            });
        }

        let body: serde_json::Value = response.json().await?;
        id_from_body(body)
    }

    /// 列出指定店家的菜單品項
    pub async fn menu_items(&self, store_id: &str) -> Result<Vec<MenuItem>> {
        let url = format!("{}/api/v1/menu/{}", self.base_url, store_id);
        tracing::debug!("📡 GET {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(ClientError::StatusError {
                status: response.status(),
            });
        }

        let items: Vec<MenuItem> = response.json().await?;
        tracing::info!("📡 fetched {} menu items for store {}", items.len(), store_id);
        Ok(items)
    }

    /// 更新菜單品項，type 與 store 不可變更
    pub async fn update_menu_item(&self, id: &str, update: &MenuItemUpdate) -> Result<()> {
        let url = format!("{}/api/v1/menu/{}", self.base_url, id);
        tracing::debug!("📡 PATCH {}", url);

        let response = self.client.patch(&url).json(update).send().await?;
        if !response.status().is_success() {
            return Err(ClientError::StatusError {
                status: response.status(),
            });
        }

        Ok(())
    }

    /// 刪除菜單品項
    pub async fn delete_menu_item(&self, id: &str) -> Result<()> {
        let url = format!("{}/api/v1/menu/{}", self.base_url, id);
        tracing::debug!("📡 DELETE {}", url);

        let response = self.client.delete(&url).send().await?;
        if !response.status().is_success() {
            return Err(ClientError::StatusError {
                status: response.status(),
            });
        }

        Ok(())
    }

    /// 開立訂單
    pub async fn create_order(&self, order: &OrderRecord) -> Result<ResourceId> {
        let url = format!("{}/api/v1/order", self.base_url);
        tracing::debug!("📡 POST {}", url);

        let response = self.client.post(&url).json(order).send().await?;
        if !response.status().is_success() {
            return Err(ClientError::StatusError {
                status: response.status(),
            });
        }

        let body: serde_json::Value = response.json().await?;
        id_from_body(body)
    }

    /// 在訂單中加入品項
    pub async fn add_order_item(&self, item: &OrderItem) -> Result<ResourceId> {
        let url = format!("{}/api/v1/order", self.base_url);
        tracing::debug!("📡 PUT {}", url);

        let response = self.client.put(&url).json(item).send().await?;
        if !response.status().is_success() {
            return Err(ClientError::StatusError {
                status: response.status(),
            });
        }

        let body: serde_json::Value = response.json().await?;
        id_from_body(body)
    }

    /// 列出訂單中的品項
    pub async fn order_items(&self, order_id: &str) -> Result<Vec<OrderItem>> {
        let url = format!("{}/api/v1/order/{}", self.base_url, order_id);
        tracing::debug!("📡 GET {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(ClientError::StatusError {
                status: response.status(),
            });
        }

        Ok(response.json().await?)
    }
}
