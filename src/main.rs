use clap::Parser;
use tacos_client::utils::logger;
use tacos_client::{CliConfig, StoreRecord, StoreType, TacosClient};

// 目標 API 與 payload 都是寫死的常數
const API_BASE: &str = "http://tacos.wercker.com";

fn store_payload() -> StoreRecord {
    StoreRecord {
        store_type: StoreType::Tacos,
        name: "Silly Tacos".to_string(),
        address: "459 Taco Terrace".to_string(),
        city: "Nashua".to_string(),
        state: "NH".to_string(),
        zip: "03062".to_string(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting tacos-client");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let client = TacosClient::new(API_BASE);
    let store = store_payload();

    println!("creating a store...");
    let store_id = client.create_store(&store).await?;
    println!("store with id {} created", store_id);

    Ok(())
}
