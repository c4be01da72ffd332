use std::env;
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use bridge::config::bridge_config::BridgeConfig;
use bridge::observability::init_tracing;
use bridge_zkapp::client::zkapp_worker_client::ZkappWorkerClient;
use bridge_zkapp::operation::field::Field;
use bridge_zkapp::operation::public_key::PublicKey;
use bridge_zkapp::worker::simulated_zkapp_worker::SimulatedZkappWorker;

const DEMO_PUBLIC_KEY: &str = "B62qkzUATuPpDcqJ7W8pq381ihswvJ2HdFbE64GK2jP1xkqYUnmeuVA";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = match env::args().nth(1) {
        Some(path) => BridgeConfig::load(path)?,
        None => BridgeConfig::default(),
    };
    init_tracing(&config.trace_level);

    let public_key = PublicKey::from_base58(DEMO_PUBLIC_KEY)?;
    let worker = SimulatedZkappWorker::new()
        .with_account(DEMO_PUBLIC_KEY)
        .with_proving_latency(Duration::from_millis(50));
    let client = ZkappWorkerClient::spawn(Arc::new(worker), &config)?;

    client.set_active_instance_to_berkeley().await?;
    client.load_contract().await?;
    client.compile_contract().await?;

    let account = client.fetch_account(&public_key).await?;
    info!(found = account.is_found(), "fetched account");
    client.init_zkapp_instance(&public_key).await?;
    println!("num: {}", client.get_num().await?);

    client.create_update_transaction().await?;
    client.prove_update_transaction().await?;
    println!("update transaction: {}", client.get_transaction_json().await?);
    println!("num: {}", client.get_num().await?);

    client.load_vote_contract().await?;
    client.compile_vote_contract().await?;
    client.init_vote_instance(&public_key).await?;
    client.set_reputation(Field::from(7)).await?;
    client.prove_update_transaction().await?;
    println!("reputation transaction: {}", client.get_transaction_json().await?);
    println!("reputation: {}", client.get_reputation().await?);
    println!("events: {}", client.fetch_events().await?);

    return Ok(());
}
