use serde::{Deserialize, Serialize};

use bridge::net::connect::operation::Operation;

use crate::operation::field::Field;
use crate::operation::operation_name::ZkappOperationName;

/// A call to the zkapp worker together with its arguments.
///
/// Serializes as `{"fn": "<name>", "args": {...}}`; operations without arguments
/// carry an empty `args` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "fn", content = "args", rename_all = "camelCase")]
pub enum ZkappRequest {
    SetActiveInstanceToBerkeley {},
    LoadContract {},
    CompileContract {},
    FetchAccount {
        #[serde(rename = "publicKey58")]
        public_key58: String,
    },
    InitZkappInstance {
        #[serde(rename = "publicKey58")]
        public_key58: String,
    },
    LoadVoteContract {},
    CompileVoteContract {},
    InitVoteInstance {
        #[serde(rename = "publicKey58")]
        public_key58: String,
    },
    GetNum {},
    GetReputation {},
    CreateUpdateTransaction { amount: u64 },
    SetReputation { amount: Field },
    FetchEvents {},
    ProveUpdateTransaction {},
    #[serde(rename = "getTransactionJSON")]
    GetTransactionJson {},
}

impl ZkappRequest {
    pub fn operation_name(&self) -> ZkappOperationName {
        return match self {
            ZkappRequest::SetActiveInstanceToBerkeley {} => ZkappOperationName::SetActiveInstanceToBerkeley,
            ZkappRequest::LoadContract {} => ZkappOperationName::LoadContract,
            ZkappRequest::CompileContract {} => ZkappOperationName::CompileContract,
            ZkappRequest::FetchAccount { .. } => ZkappOperationName::FetchAccount,
            ZkappRequest::InitZkappInstance { .. } => ZkappOperationName::InitZkappInstance,
            ZkappRequest::LoadVoteContract {} => ZkappOperationName::LoadVoteContract,
            ZkappRequest::CompileVoteContract {} => ZkappOperationName::CompileVoteContract,
            ZkappRequest::InitVoteInstance { .. } => ZkappOperationName::InitVoteInstance,
            ZkappRequest::GetNum {} => ZkappOperationName::GetNum,
            ZkappRequest::GetReputation {} => ZkappOperationName::GetReputation,
            ZkappRequest::CreateUpdateTransaction { .. } => ZkappOperationName::CreateUpdateTransaction,
            ZkappRequest::SetReputation { .. } => ZkappOperationName::SetReputation,
            ZkappRequest::FetchEvents {} => ZkappOperationName::FetchEvents,
            ZkappRequest::ProveUpdateTransaction {} => ZkappOperationName::ProveUpdateTransaction,
            ZkappRequest::GetTransactionJson {} => ZkappOperationName::GetTransactionJson,
        };
    }
}

impl Operation for ZkappRequest {
    fn name(&self) -> &'static str {
        return self.operation_name().as_str();
    }
}
