use anyhow::Result;
use httpmock::prelude::*;
use httpmock::Method::PATCH;
use tacos_client::domain::model::StoreUpdate;
use tacos_client::{ResourceId, StoreRecord, StoreType, TacosClient};

fn silly_tacos() -> StoreRecord {
    StoreRecord {
        store_type: StoreType::Tacos,
        name: "Silly Tacos".to_string(),
        address: "459 Taco Terrace".to_string(),
        city: "Nashua".to_string(),
        state: "NH".to_string(),
        zip: "03062".to_string(),
    }
}

/// 店家 API 完整流程：建立、列表、查詢、更新、刪除
#[tokio::test]
async fn test_store_lifecycle() -> Result<()> {
    let server = MockServer::start();
    let store_id = "5b6d2f9a1c4ae03834567890";

    let store_json = serde_json::json!({
        "id": store_id,
        "type": "tacos",
        "name": "Silly Tacos",
        "address": "459 Taco Terrace",
        "city": "Nashua",
        "state": "NH",
        "zip": "03062"
    });

    let create_mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/api/v1/stores")
            .header("content-type", "application/json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({ "id": store_id }));
    });

    let list_mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/stores");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([store_json.clone()]));
    });

    let get_mock = server.mock(|when, then| {
        when.method(GET).path(format!("/api/v1/stores/{}", store_id));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(store_json.clone());
    });

    // PATCH body 只能帶有設定的欄位
    let update_mock = server.mock(|when, then| {
        when.method(PATCH)
            .path(format!("/api/v1/stores/{}", store_id))
            .json_body(serde_json::json!({ "name": "Serious Tacos" }));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({ "MatchedCount": 1, "ModifiedCount": 1 }));
    });

    let delete_mock = server.mock(|when, then| {
        when.method(DELETE)
            .path(format!("/api/v1/stores/{}", store_id));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({ "DeletedCount": 1 }));
    });

    let client = TacosClient::new(format!("http://{}", server.address()));

    let created = client.create_store(&silly_tacos()).await?;
    assert_eq!(created, ResourceId::Text(store_id.to_string()));

    let stores = client.list_stores().await?;
    assert_eq!(stores.len(), 1);
    assert_eq!(stores[0].id, store_id);
    assert_eq!(stores[0].record.store_type, StoreType::Tacos);

    let store = client.get_store(store_id).await?;
    assert_eq!(store.record.name, "Silly Tacos");
    assert_eq!(store.record.zip, "03062");

    let update = StoreUpdate {
        name: Some("Serious Tacos".to_string()),
        ..Default::default()
    };
    client.update_store(store_id, &update).await?;

    client.delete_store(store_id).await?;

    create_mock.assert();
    list_mock.assert();
    get_mock.assert();
    update_mock.assert();
    delete_mock.assert();

    println!("✅ Store lifecycle test passed!");
    Ok(())
}

/// 即使建立失敗，送出的仍必須是 PUT 加 JSON content type
#[tokio::test]
async fn test_create_store_method_and_header_on_failure() -> Result<()> {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/api/v1/stores")
            .header("content-type", "application/json");
        then.status(500).body("Type is required at stores:107");
    });

    let client = TacosClient::new(format!("http://{}", server.address()));
    let result = client.create_store(&silly_tacos()).await;

    // 非 JSON 的錯誤 body 會變成解析錯誤，不會產生假的 id
    assert!(result.is_err());
    api_mock.assert();
    Ok(())
}
