use thiserror::Error;

use crate::net::connect::call_id::CallId;
use crate::net::connect::envelope::WorkerFault;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CallError {
    #[error("worker fault: {0}")]
    WorkerFault(#[from] WorkerFault),

    #[error("call {id} timed out")]
    Timeout { id: CallId },

    #[error("worker channel closed before call {id} was sent")]
    ChannelClosed { id: CallId },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("worker context is gone")]
    WorkerGone,

    #[error("an inbound handler is already installed on this channel")]
    InboundHandlerAlreadyInstalled,

    #[error("no tokio runtime to deliver inbound envelopes on")]
    NoRuntime,
}
