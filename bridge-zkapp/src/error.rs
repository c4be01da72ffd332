use thiserror::Error;

use bridge::net::connect::error::{CallError, TransportError};

use crate::operation::operation_name::ZkappOperationName;
use crate::operation::zkapp_reply::ZkappReply;

#[derive(Debug, Error)]
pub enum ZkappError {
    #[error(transparent)]
    Call(#[from] CallError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("unexpected reply to {operation}: {reply:?}")]
    UnexpectedReply { operation: ZkappOperationName, reply: ZkappReply },

    #[error("unrecognized operation: {0}")]
    UnrecognizedOperation(String),

    #[error("invalid field element: {0}")]
    InvalidField(String),

    #[error("invalid base58 public key: {0}")]
    InvalidPublicKey(String),
}
