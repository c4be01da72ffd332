use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result shapes the zkapp worker replies with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum ZkappReply {
    /// The operation ran and has nothing to return.
    Done,
    Account(FetchAccountResult),
    /// JSON text of a single field element.
    FieldJson(String),
    Events(Value),
    TransactionJson(String),
}

/// Either the fetched account or the error the network returned for it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FetchAccountResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

impl FetchAccountResult {
    pub fn found(account: Value) -> Self {
        return FetchAccountResult { account: Some(account), error: None };
    }

    pub fn missing(error: Value) -> Self {
        return FetchAccountResult { account: None, error: Some(error) };
    }

    pub fn is_found(&self) -> bool {
        return self.account.is_some();
    }
}
