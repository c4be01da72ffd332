use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;

use bridge::net::connect::envelope::WorkerFault;
use bridge::net::connect::worker::Worker;

use crate::operation::field::Field;
use crate::operation::zkapp_reply::{FetchAccountResult, ZkappReply};
use crate::operation::zkapp_request::ZkappRequest;

/// In-memory stand-in for the zkapp worker context.
///
/// Keeps the contract lifecycle (load, compile, init) and a counter and a
/// reputation per instance. Transactions are created, proved, and then committed
/// when their JSON is fetched, which also records an event. Operations issued
/// before their prerequisites fail with a [`WorkerFault`].
pub struct SimulatedZkappWorker {
    state: Mutex<SimulatedState>,
    known_accounts: HashSet<String>,
    proving_latency: Duration,
}

#[derive(Default)]
struct SimulatedState {
    network_active: bool,
    contract: ContractState,
    vote_contract: ContractState,
    num: u64,
    reputation: u64,
    pending_transaction: Option<PendingTransaction>,
    events: Vec<Value>,
}

#[derive(Default)]
struct ContractState {
    loaded: bool,
    compiled: bool,
    instance: Option<String>,
}

struct PendingTransaction {
    change: StateChange,
    proved: bool,
}

#[derive(Clone, Copy)]
enum StateChange {
    AddToNum(u64),
    SetReputation(u64),
}

impl SimulatedZkappWorker {
    pub fn new() -> Self {
        return SimulatedZkappWorker {
            state: Mutex::new(SimulatedState::default()),
            known_accounts: HashSet::new(),
            proving_latency: Duration::ZERO,
        };
    }

    pub fn with_account(mut self, public_key58: &str) -> Self {
        self.known_accounts.insert(public_key58.to_string());
        return self;
    }

    /// Time spent compiling contracts and proving transactions.
    pub fn with_proving_latency(mut self, proving_latency: Duration) -> Self {
        self.proving_latency = proving_latency;
        return self;
    }

    fn state(&self) -> MutexGuard<'_, SimulatedState> {
        return self.state.lock().unwrap_or_else(PoisonError::into_inner);
    }

    async fn prove(&self) {
        if !self.proving_latency.is_zero() {
            tokio::time::sleep(self.proving_latency).await;
        }
    }

    fn fetch_account(&self, public_key58: String) -> Result<ZkappReply, WorkerFault> {
        if !self.state().network_active {
            return Err(WorkerFault::new("no active network instance"));
        }
        if self.known_accounts.contains(&public_key58) {
            return Ok(ZkappReply::Account(FetchAccountResult::found(json!({
                "publicKey": public_key58,
                "nonce": "0",
            }))));
        }
        return Ok(ZkappReply::Account(FetchAccountResult::missing(json!({
            "statusCode": 404,
            "statusText": format!("Could not find account for public key {}", public_key58),
        }))));
    }

    fn take_proved_transaction(&self) -> Result<ZkappReply, WorkerFault> {
        let mut state = self.state();
        let change = match state.pending_transaction.as_ref() {
            None => return Err(WorkerFault::new("no transaction to send")),
            Some(transaction) if !transaction.proved => return Err(WorkerFault::new("transaction is not proved")),
            Some(transaction) => transaction.change,
        };

        let transaction_json = match change {
            StateChange::AddToNum(amount) => {
                state.num = state.num.checked_add(amount).ok_or_else(|| WorkerFault::new("num overflow"))?;
                json!({"instance": state.contract.instance, "method": "update", "amount": amount.to_string()})
            }
            StateChange::SetReputation(amount) => {
                state.reputation = amount;
                state.events.push(json!({"type": "reputation-set", "amount": amount.to_string()}));
                json!({"instance": state.vote_contract.instance, "method": "setReputation", "amount": amount.to_string()})
            }
        };
        state.pending_transaction = None;
        return Ok(ZkappReply::TransactionJson(transaction_json.to_string()));
    }
}

impl Default for SimulatedZkappWorker {
    fn default() -> Self {
        return Self::new();
    }
}

#[async_trait]
impl Worker<ZkappRequest, ZkappReply> for SimulatedZkappWorker {
    async fn handle(&self, operation: ZkappRequest) -> Result<ZkappReply, WorkerFault> {
        debug!(operation = operation.operation_name().as_str(), "simulated worker handling operation");
        match operation {
            ZkappRequest::SetActiveInstanceToBerkeley {} => {
                self.state().network_active = true;
            }
            ZkappRequest::LoadContract {} => {
                self.state().contract.loaded = true;
            }
            ZkappRequest::CompileContract {} => {
                if !self.state().contract.loaded {
                    return Err(WorkerFault::new("contract is not loaded"));
                }
                self.prove().await;
                self.state().contract.compiled = true;
            }
            ZkappRequest::FetchAccount { public_key58 } => {
                return self.fetch_account(public_key58);
            }
            ZkappRequest::InitZkappInstance { public_key58 } => {
                let mut state = self.state();
                if !state.contract.loaded {
                    return Err(WorkerFault::new("contract is not loaded"));
                }
                state.contract.instance = Some(public_key58);
            }
            ZkappRequest::LoadVoteContract {} => {
                self.state().vote_contract.loaded = true;
            }
            ZkappRequest::CompileVoteContract {} => {
                if !self.state().vote_contract.loaded {
                    return Err(WorkerFault::new("vote contract is not loaded"));
                }
                self.prove().await;
                self.state().vote_contract.compiled = true;
            }
            ZkappRequest::InitVoteInstance { public_key58 } => {
                let mut state = self.state();
                if !state.vote_contract.loaded {
                    return Err(WorkerFault::new("vote contract is not loaded"));
                }
                state.vote_contract.instance = Some(public_key58);
            }
            ZkappRequest::GetNum {} => {
                let state = self.state();
                if state.contract.instance.is_none() {
                    return Err(WorkerFault::new("zkapp instance is not initialized"));
                }
                return Ok(ZkappReply::FieldJson(Field::from(state.num).to_json()));
            }
            ZkappRequest::GetReputation {} => {
                let state = self.state();
                if state.vote_contract.instance.is_none() {
                    return Err(WorkerFault::new("vote instance is not initialized"));
                }
                return Ok(ZkappReply::FieldJson(Field::from(state.reputation).to_json()));
            }
            ZkappRequest::CreateUpdateTransaction { amount } => {
                let mut state = self.state();
                if state.contract.instance.is_none() || !state.contract.compiled {
                    return Err(WorkerFault::new("zkapp contract is not compiled and initialized"));
                }
                state.pending_transaction = Some(PendingTransaction { change: StateChange::AddToNum(amount), proved: false });
            }
            ZkappRequest::SetReputation { amount } => {
                let amount = amount
                    .as_decimal()
                    .parse::<u64>()
                    .map_err(|_| WorkerFault::new(format!("reputation {} is out of range", amount)))?;
                let mut state = self.state();
                if state.vote_contract.instance.is_none() || !state.vote_contract.compiled {
                    return Err(WorkerFault::new("vote contract is not compiled and initialized"));
                }
                state.pending_transaction = Some(PendingTransaction { change: StateChange::SetReputation(amount), proved: false });
            }
            ZkappRequest::FetchEvents {} => {
                let state = self.state();
                if state.vote_contract.instance.is_none() {
                    return Err(WorkerFault::new("vote instance is not initialized"));
                }
                return Ok(ZkappReply::Events(Value::Array(state.events.clone())));
            }
            ZkappRequest::ProveUpdateTransaction {} => {
                if self.state().pending_transaction.is_none() {
                    return Err(WorkerFault::new("no transaction to prove"));
                }
                self.prove().await;
                if let Some(transaction) = self.state().pending_transaction.as_mut() {
                    transaction.proved = true;
                }
            }
            ZkappRequest::GetTransactionJson {} => {
                return self.take_proved_transaction();
            }
        }
        return Ok(ZkappReply::Done);
    }
}

#[cfg(test)]
mod tests {
    use bridge::net::connect::worker::Worker;

    use crate::operation::field::Field;
    use crate::operation::zkapp_reply::ZkappReply;
    use crate::operation::zkapp_request::ZkappRequest;
    use crate::worker::simulated_zkapp_worker::SimulatedZkappWorker;

    const PUBLIC_KEY: &str = "B62qkzUATuPpDcqJ7W8pq381ihswvJ2HdFbE64GK2jP1xkqYUnmeuVA";

    #[tokio::test]
    async fn compile_before_load_fails() {
        let worker = SimulatedZkappWorker::new();
        let result = worker.handle(ZkappRequest::CompileContract {}).await;

        assert_eq!("contract is not loaded", result.unwrap_err().message);
    }

    #[tokio::test]
    async fn fetch_account_needs_an_active_network() {
        let worker = SimulatedZkappWorker::new().with_account(PUBLIC_KEY);
        let result = worker.handle(ZkappRequest::FetchAccount { public_key58: PUBLIC_KEY.to_string() }).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn get_num_starts_at_zero() {
        let worker = SimulatedZkappWorker::new();
        worker.handle(ZkappRequest::LoadContract {}).await.unwrap();
        worker.handle(ZkappRequest::InitZkappInstance { public_key58: PUBLIC_KEY.to_string() }).await.unwrap();

        let reply = worker.handle(ZkappRequest::GetNum {}).await.unwrap();
        assert_eq!(ZkappReply::FieldJson(Field::from(0).to_json()), reply);
    }

    #[tokio::test]
    async fn transaction_json_requires_a_proof() {
        let worker = SimulatedZkappWorker::new();
        worker.handle(ZkappRequest::LoadContract {}).await.unwrap();
        worker.handle(ZkappRequest::CompileContract {}).await.unwrap();
        worker.handle(ZkappRequest::InitZkappInstance { public_key58: PUBLIC_KEY.to_string() }).await.unwrap();
        worker.handle(ZkappRequest::CreateUpdateTransaction { amount: 30 }).await.unwrap();

        let result = worker.handle(ZkappRequest::GetTransactionJson {}).await;
        assert_eq!("transaction is not proved", result.unwrap_err().message);
    }

    #[tokio::test]
    async fn reject_an_update_that_overflows_num() {
        let worker = SimulatedZkappWorker::new();
        worker.handle(ZkappRequest::LoadContract {}).await.unwrap();
        worker.handle(ZkappRequest::CompileContract {}).await.unwrap();
        worker.handle(ZkappRequest::InitZkappInstance { public_key58: PUBLIC_KEY.to_string() }).await.unwrap();

        worker.handle(ZkappRequest::CreateUpdateTransaction { amount: u64::MAX }).await.unwrap();
        worker.handle(ZkappRequest::ProveUpdateTransaction {}).await.unwrap();
        worker.handle(ZkappRequest::GetTransactionJson {}).await.unwrap();

        worker.handle(ZkappRequest::CreateUpdateTransaction { amount: 1 }).await.unwrap();
        worker.handle(ZkappRequest::ProveUpdateTransaction {}).await.unwrap();
        let result = worker.handle(ZkappRequest::GetTransactionJson {}).await;
        assert_eq!("num overflow", result.unwrap_err().message);

        let reply = worker.handle(ZkappRequest::GetNum {}).await.unwrap();
        assert_eq!(ZkappReply::FieldJson(Field::from(u64::MAX).to_json()), reply);
    }

    #[tokio::test]
    async fn sending_an_update_transaction_adds_to_num() {
        let worker = SimulatedZkappWorker::new();
        worker.handle(ZkappRequest::LoadContract {}).await.unwrap();
        worker.handle(ZkappRequest::CompileContract {}).await.unwrap();
        worker.handle(ZkappRequest::InitZkappInstance { public_key58: PUBLIC_KEY.to_string() }).await.unwrap();
        worker.handle(ZkappRequest::CreateUpdateTransaction { amount: 30 }).await.unwrap();
        worker.handle(ZkappRequest::ProveUpdateTransaction {}).await.unwrap();
        worker.handle(ZkappRequest::GetTransactionJson {}).await.unwrap();

        let reply = worker.handle(ZkappRequest::GetNum {}).await.unwrap();
        assert_eq!(ZkappReply::FieldJson(Field::from(30).to_json()), reply);
    }
}
