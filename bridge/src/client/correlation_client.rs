use std::sync::Arc;

use tracing::{debug, warn};

use crate::callback::reply_handle::{ReplyCallback, ReplyHandle};
use crate::clock::clock::SystemClock;
use crate::config::bridge_config::BridgeConfig;
use crate::net::call_waiting_list::call_waiting_list::CallWaitingList;
use crate::net::call_waiting_list::response_callback::ResponseCallbackType;
use crate::net::connect::call_id::{CallId, CallIdGenerator};
use crate::net::connect::channel_transport::ChannelTransport;
use crate::net::connect::envelope::{RequestEnvelope, ResponseEnvelope};
use crate::net::connect::error::{CallError, TransportError};
use crate::net::connect::operation::Operation;
use crate::net::connect::sequential_call_id_generator::SequentialCallIdGenerator;
use crate::net::connect::worker::Worker;
use crate::net::connect::worker_channel::WorkerChannel;

/// Turns the one-way channel to a worker context into call/return.
///
/// Every call gets the next call id, an entry in the call waiting list and one
/// request envelope on the channel. The inbound handler installed at construction
/// settles the entry whose id the reply carries, whatever order replies come in.
pub struct CorrelationClient<Op, Payload> {
    channel: Box<dyn ChannelTransport<Op, Payload>>,
    call_waiting_list: Arc<CallWaitingList<Payload>>,
    call_id_generator: SequentialCallIdGenerator,
}

impl<Op: Operation, Payload: Send + 'static> CorrelationClient<Op, Payload> {
    /// Fails with [`TransportError::NoRuntime`] when `channel` needs a tokio runtime and none is running.
    pub fn new<C>(channel: C) -> Result<Self, TransportError>
        where C: ChannelTransport<Op, Payload> + 'static {
        return Self::new_with_config(channel, &BridgeConfig::default());
    }

    pub fn new_with_config<C>(channel: C, config: &BridgeConfig) -> Result<Self, TransportError>
        where C: ChannelTransport<Op, Payload> + 'static {
        let call_waiting_list = Arc::new(CallWaitingList::new_with_capacity(
            config.initial_pending_capacity,
            Arc::new(SystemClock::new()),
            config.call_waiting_list_config(),
        ));

        let inbound_call_waiting_list = call_waiting_list.clone();
        channel.install_inbound_handler(Box::new(move |envelope: ResponseEnvelope<Payload>| {
            let response = envelope.outcome.into_result().map_err(CallError::from);
            inbound_call_waiting_list.handle_response(envelope.id, response);
        }))?;

        return Ok(CorrelationClient {
            channel: Box::new(channel),
            call_waiting_list,
            call_id_generator: SequentialCallIdGenerator::new(),
        });
    }

    /// Starts `worker` as this client's worker context and connects to it.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<W: Worker<Op, Payload>>(worker: Arc<W>) -> Result<Self, TransportError> {
        return Self::spawn_with_config(worker, &BridgeConfig::default());
    }

    pub fn spawn_with_config<W: Worker<Op, Payload>>(worker: Arc<W>, config: &BridgeConfig) -> Result<Self, TransportError> {
        return Self::new_with_config(WorkerChannel::spawn(worker), config);
    }

    /// Sends `operation` to the worker and returns a handle to its reply without waiting.
    pub fn invoke(&self, operation: Op) -> ReplyHandle<Payload> {
        let reply_callback: Arc<ReplyCallback<Payload>> = Arc::new(ReplyCallback::new());
        let call_id = self.invoke_with_callback(operation, reply_callback.clone());
        return reply_callback.handle(call_id);
    }

    /// Like [`invoke`](Self::invoke), settling `callback` instead of a handle.
    pub fn invoke_with_callback(&self, operation: Op, callback: ResponseCallbackType<Payload>) -> CallId {
        let call_id = self.call_id_generator.generate();
        let operation_name = operation.name();

        self.call_waiting_list.add(call_id, operation_name, callback);
        debug!(call_id, operation = operation_name, "sending call to worker");

        if let Err(err) = self.channel.send(RequestEnvelope::new(call_id, operation)) {
            warn!(call_id, operation = operation_name, error = %err, "could not send call to worker");
            self.call_waiting_list.handle_response(call_id, Err(CallError::ChannelClosed { id: call_id }));
        }
        return call_id;
    }

    pub fn pending_calls(&self) -> usize {
        return self.call_waiting_list.pending_count();
    }

    pub fn is_pending(&self, call_id: CallId) -> bool {
        return self.call_waiting_list.contains(call_id);
    }

    pub fn next_call_id(&self) -> CallId {
        return self.call_id_generator.peek_next();
    }
}
