use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::ZkappError;

/// The closed set of operations the zkapp worker understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZkappOperationName {
    SetActiveInstanceToBerkeley,
    LoadContract,
    CompileContract,
    FetchAccount,
    InitZkappInstance,
    LoadVoteContract,
    CompileVoteContract,
    InitVoteInstance,
    GetNum,
    GetReputation,
    CreateUpdateTransaction,
    SetReputation,
    FetchEvents,
    ProveUpdateTransaction,
    GetTransactionJson,
}

impl ZkappOperationName {
    pub const ALL: [ZkappOperationName; 15] = [
        ZkappOperationName::SetActiveInstanceToBerkeley,
        ZkappOperationName::LoadContract,
        ZkappOperationName::CompileContract,
        ZkappOperationName::FetchAccount,
        ZkappOperationName::InitZkappInstance,
        ZkappOperationName::LoadVoteContract,
        ZkappOperationName::CompileVoteContract,
        ZkappOperationName::InitVoteInstance,
        ZkappOperationName::GetNum,
        ZkappOperationName::GetReputation,
        ZkappOperationName::CreateUpdateTransaction,
        ZkappOperationName::SetReputation,
        ZkappOperationName::FetchEvents,
        ZkappOperationName::ProveUpdateTransaction,
        ZkappOperationName::GetTransactionJson,
    ];

    /// Name used on the wire.
    pub fn as_str(&self) -> &'static str {
        return match self {
            ZkappOperationName::SetActiveInstanceToBerkeley => "setActiveInstanceToBerkeley",
            ZkappOperationName::LoadContract => "loadContract",
            ZkappOperationName::CompileContract => "compileContract",
            ZkappOperationName::FetchAccount => "fetchAccount",
            ZkappOperationName::InitZkappInstance => "initZkappInstance",
            ZkappOperationName::LoadVoteContract => "loadVoteContract",
            ZkappOperationName::CompileVoteContract => "compileVoteContract",
            ZkappOperationName::InitVoteInstance => "initVoteInstance",
            ZkappOperationName::GetNum => "getNum",
            ZkappOperationName::GetReputation => "getReputation",
            ZkappOperationName::CreateUpdateTransaction => "createUpdateTransaction",
            ZkappOperationName::SetReputation => "setReputation",
            ZkappOperationName::FetchEvents => "fetchEvents",
            ZkappOperationName::ProveUpdateTransaction => "proveUpdateTransaction",
            ZkappOperationName::GetTransactionJson => "getTransactionJSON",
        };
    }
}

impl Display for ZkappOperationName {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.as_str())
    }
}

impl FromStr for ZkappOperationName {
    type Err = ZkappError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        return ZkappOperationName::ALL
            .iter()
            .find(|operation_name| operation_name.as_str() == name)
            .copied()
            .ok_or_else(|| ZkappError::UnrecognizedOperation(name.to_string()));
    }
}
