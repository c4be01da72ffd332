use std::sync::Arc;

use serde_json::Value;

use bridge::client::correlation_client::CorrelationClient;
use bridge::config::bridge_config::BridgeConfig;
use bridge::net::connect::worker::Worker;

use crate::error::ZkappError;
use crate::operation::field::Field;
use crate::operation::public_key::PublicKey;
use crate::operation::zkapp_reply::{FetchAccountResult, ZkappReply};
use crate::operation::zkapp_request::ZkappRequest;

/// Amount every update transaction is created with.
pub const UPDATE_TRANSACTION_AMOUNT: u64 = 30;

/// Typed calls to the zkapp worker, one method per operation.
pub struct ZkappWorkerClient {
    client: CorrelationClient<ZkappRequest, ZkappReply>,
}

impl ZkappWorkerClient {
    pub fn new(client: CorrelationClient<ZkappRequest, ZkappReply>) -> Self {
        return ZkappWorkerClient { client };
    }

    pub fn spawn<W>(worker: Arc<W>, config: &BridgeConfig) -> Result<Self, ZkappError>
        where W: Worker<ZkappRequest, ZkappReply> {
        return Ok(Self::new(CorrelationClient::spawn_with_config(worker, config)?));
    }

    pub async fn set_active_instance_to_berkeley(&self) -> Result<(), ZkappError> {
        return self.call_done(ZkappRequest::SetActiveInstanceToBerkeley {}).await;
    }

    pub async fn load_contract(&self) -> Result<(), ZkappError> {
        return self.call_done(ZkappRequest::LoadContract {}).await;
    }

    pub async fn compile_contract(&self) -> Result<(), ZkappError> {
        return self.call_done(ZkappRequest::CompileContract {}).await;
    }

    pub async fn fetch_account(&self, public_key: &PublicKey) -> Result<FetchAccountResult, ZkappError> {
        let request = ZkappRequest::FetchAccount { public_key58: public_key.to_base58() };
        let operation = request.operation_name();
        return match self.call(request).await? {
            ZkappReply::Account(result) => Ok(result),
            reply => Err(ZkappError::UnexpectedReply { operation, reply }),
        };
    }

    pub async fn init_zkapp_instance(&self, public_key: &PublicKey) -> Result<(), ZkappError> {
        return self.call_done(ZkappRequest::InitZkappInstance { public_key58: public_key.to_base58() }).await;
    }

    pub async fn load_vote_contract(&self) -> Result<(), ZkappError> {
        return self.call_done(ZkappRequest::LoadVoteContract {}).await;
    }

    pub async fn compile_vote_contract(&self) -> Result<(), ZkappError> {
        return self.call_done(ZkappRequest::CompileVoteContract {}).await;
    }

    pub async fn init_vote_instance(&self, public_key: &PublicKey) -> Result<(), ZkappError> {
        return self.call_done(ZkappRequest::InitVoteInstance { public_key58: public_key.to_base58() }).await;
    }

    pub async fn get_num(&self) -> Result<Field, ZkappError> {
        return self.call_field(ZkappRequest::GetNum {}).await;
    }

    pub async fn get_reputation(&self) -> Result<Field, ZkappError> {
        return self.call_field(ZkappRequest::GetReputation {}).await;
    }

    pub async fn create_update_transaction(&self) -> Result<(), ZkappError> {
        return self.call_done(ZkappRequest::CreateUpdateTransaction { amount: UPDATE_TRANSACTION_AMOUNT }).await;
    }

    pub async fn set_reputation(&self, amount: Field) -> Result<(), ZkappError> {
        return self.call_done(ZkappRequest::SetReputation { amount }).await;
    }

    pub async fn fetch_events(&self) -> Result<Value, ZkappError> {
        let request = ZkappRequest::FetchEvents {};
        let operation = request.operation_name();
        return match self.call(request).await? {
            ZkappReply::Events(events) => Ok(events),
            reply => Err(ZkappError::UnexpectedReply { operation, reply }),
        };
    }

    pub async fn prove_update_transaction(&self) -> Result<(), ZkappError> {
        return self.call_done(ZkappRequest::ProveUpdateTransaction {}).await;
    }

    pub async fn get_transaction_json(&self) -> Result<String, ZkappError> {
        let request = ZkappRequest::GetTransactionJson {};
        let operation = request.operation_name();
        return match self.call(request).await? {
            ZkappReply::TransactionJson(transaction) => Ok(transaction),
            reply => Err(ZkappError::UnexpectedReply { operation, reply }),
        };
    }

    pub fn pending_calls(&self) -> usize {
        return self.client.pending_calls();
    }

    async fn call(&self, request: ZkappRequest) -> Result<ZkappReply, ZkappError> {
        return Ok(self.client.invoke(request).await?);
    }

    async fn call_done(&self, request: ZkappRequest) -> Result<(), ZkappError> {
        let operation = request.operation_name();
        return match self.call(request).await? {
            ZkappReply::Done => Ok(()),
            reply => Err(ZkappError::UnexpectedReply { operation, reply }),
        };
    }

    async fn call_field(&self, request: ZkappRequest) -> Result<Field, ZkappError> {
        let operation = request.operation_name();
        return match self.call(request).await? {
            ZkappReply::FieldJson(json) => Field::from_json(&json),
            reply => Err(ZkappError::UnexpectedReply { operation, reply }),
        };
    }
}
