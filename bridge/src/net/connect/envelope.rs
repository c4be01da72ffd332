use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::net::connect::call_id::CallId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestEnvelope<Op> {
    pub id: CallId,
    #[serde(flatten)]
    pub operation: Op,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope<Payload> {
    pub id: CallId,
    #[serde(flatten)]
    pub outcome: Outcome<Payload>,
}

/// `Success` serializes under `data`, `Failure` under `fault`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Outcome<Payload> {
    #[serde(rename = "data")]
    Success(Payload),
    #[serde(rename = "fault")]
    Failure(WorkerFault),
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct WorkerFault {
    pub message: String,
}

impl<Op> RequestEnvelope<Op> {
    pub fn new(id: CallId, operation: Op) -> Self {
        return RequestEnvelope { id, operation };
    }
}

impl<Payload> ResponseEnvelope<Payload> {
    pub fn success(id: CallId, payload: Payload) -> Self {
        return ResponseEnvelope { id, outcome: Outcome::Success(payload) };
    }

    pub fn failure(id: CallId, fault: WorkerFault) -> Self {
        return ResponseEnvelope { id, outcome: Outcome::Failure(fault) };
    }

    pub fn from_result(id: CallId, result: Result<Payload, WorkerFault>) -> Self {
        return match result {
            Ok(payload) => Self::success(id, payload),
            Err(fault) => Self::failure(id, fault),
        };
    }
}

impl<Payload> Outcome<Payload> {
    pub fn into_result(self) -> Result<Payload, WorkerFault> {
        return match self {
            Outcome::Success(payload) => Ok(payload),
            Outcome::Failure(fault) => Err(fault),
        };
    }
}

impl WorkerFault {
    pub fn new(message: impl Into<String>) -> Self {
        return WorkerFault { message: message.into() };
    }
}
