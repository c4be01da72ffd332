use std::sync::{Arc, Mutex, PoisonError};

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tracing::debug;

use crate::net::connect::channel_transport::{ChannelTransport, InboundHandler};
use crate::net::connect::envelope::{RequestEnvelope, ResponseEnvelope};
use crate::net::connect::error::TransportError;
use crate::net::connect::operation::Operation;
use crate::net::connect::worker::{spawn_worker, Worker};

/// Both directions are unbounded queues, `send` never waits.
pub struct WorkerChannel<Op, Payload> {
    outbound: UnboundedSender<RequestEnvelope<Op>>,
    inbound: Mutex<Option<UnboundedReceiver<ResponseEnvelope<Payload>>>>,
}

pub struct WorkerEndpoint<Op, Payload> {
    requests: UnboundedReceiver<RequestEnvelope<Op>>,
    responder: Responder<Payload>,
}

pub struct Responder<Payload> {
    responses: UnboundedSender<ResponseEnvelope<Payload>>,
}

impl<Op, Payload> WorkerChannel<Op, Payload> {
    pub fn pair() -> (WorkerChannel<Op, Payload>, WorkerEndpoint<Op, Payload>) {
        let (outbound, requests) = mpsc::unbounded_channel();
        let (responses, inbound) = mpsc::unbounded_channel();

        let channel = WorkerChannel { outbound, inbound: Mutex::new(Some(inbound)) };
        let endpoint = WorkerEndpoint { requests, responder: Responder { responses } };
        return (channel, endpoint);
    }
}

impl<Op: Operation, Payload: Send + 'static> WorkerChannel<Op, Payload> {
    /// Must be called from within a tokio runtime.
    pub fn spawn<W: Worker<Op, Payload>>(worker: Arc<W>) -> WorkerChannel<Op, Payload> {
        let (channel, endpoint) = Self::pair();
        spawn_worker(endpoint, worker);
        return channel;
    }
}

impl<Op: Send, Payload: Send + 'static> ChannelTransport<Op, Payload> for WorkerChannel<Op, Payload> {
    fn send(&self, envelope: RequestEnvelope<Op>) -> Result<(), TransportError> {
        return self.outbound.send(envelope).map_err(|_| TransportError::WorkerGone);
    }

    fn install_inbound_handler(&self, handler: InboundHandler<Payload>) -> Result<(), TransportError> {
        let runtime = Handle::try_current().map_err(|_| TransportError::NoRuntime)?;
        let mut inbound = self.inbound
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
            .ok_or(TransportError::InboundHandlerAlreadyInstalled)?;

        runtime.spawn(async move {
            while let Some(envelope) = inbound.recv().await {
                handler(envelope);
            }
            debug!("worker channel closed, inbound delivery stopped");
        });
        return Ok(());
    }
}

impl<Op, Payload> WorkerEndpoint<Op, Payload> {
    pub async fn next_request(&mut self) -> Option<RequestEnvelope<Op>> {
        return self.requests.recv().await;
    }

    pub fn reply(&self, envelope: ResponseEnvelope<Payload>) -> Result<(), TransportError> {
        return self.responder.reply(envelope);
    }

    pub fn responder(&self) -> Responder<Payload> {
        return self.responder.clone();
    }
}

impl<Payload> Responder<Payload> {
    pub fn reply(&self, envelope: ResponseEnvelope<Payload>) -> Result<(), TransportError> {
        return self.responses.send(envelope).map_err(|_| TransportError::WorkerGone);
    }
}

impl<Payload> Clone for Responder<Payload> {
    fn clone(&self) -> Self {
        return Responder { responses: self.responses.clone() };
    }
}

#[cfg(test)]
mod tests {
    use tokio::sync::mpsc;

    use crate::net::connect::channel_transport::ChannelTransport;
    use crate::net::connect::envelope::{RequestEnvelope, ResponseEnvelope};
    use crate::net::connect::error::TransportError;
    use crate::net::connect::worker_channel::WorkerChannel;

    #[tokio::test]
    async fn deliver_requests_in_send_order() {
        let (channel, mut endpoint) = WorkerChannel::<String, String>::pair();

        channel.send(RequestEnvelope::new(0, "first".to_string())).unwrap();
        channel.send(RequestEnvelope::new(1, "second".to_string())).unwrap();
        channel.send(RequestEnvelope::new(2, "third".to_string())).unwrap();

        let mut received = Vec::new();
        for _ in 0..3 {
            received.push(endpoint.next_request().await.unwrap().operation);
        }
        assert_eq!(vec!["first", "second", "third"], received);
    }

    #[tokio::test]
    async fn invoke_inbound_handler_once_per_response() {
        let (channel, endpoint) = WorkerChannel::<String, String>::pair();
        let (sender, mut receiver) = mpsc::unbounded_channel();

        channel.install_inbound_handler(Box::new(move |envelope| {
            sender.send(envelope).unwrap();
        })).unwrap();

        endpoint.reply(ResponseEnvelope::success(1, "B".to_string())).unwrap();
        endpoint.reply(ResponseEnvelope::success(0, "A".to_string())).unwrap();

        assert_eq!(ResponseEnvelope::success(1, "B".to_string()), receiver.recv().await.unwrap());
        assert_eq!(ResponseEnvelope::success(0, "A".to_string()), receiver.recv().await.unwrap());
    }

    #[tokio::test]
    async fn reject_second_inbound_handler() {
        let (channel, _endpoint) = WorkerChannel::<String, String>::pair();

        channel.install_inbound_handler(Box::new(|_| {})).unwrap();
        let result = channel.install_inbound_handler(Box::new(|_| {}));

        assert_eq!(Err(TransportError::InboundHandlerAlreadyInstalled), result);
    }

    #[test]
    fn reject_inbound_handler_outside_a_runtime() {
        let (channel, _endpoint) = WorkerChannel::<String, String>::pair();

        let result = channel.install_inbound_handler(Box::new(|_| {}));
        assert_eq!(Err(TransportError::NoRuntime), result);

        let runtime = tokio::runtime::Runtime::new().unwrap();
        let _guard = runtime.enter();
        assert_eq!(Ok(()), channel.install_inbound_handler(Box::new(|_| {})));
    }

    #[tokio::test]
    async fn send_fails_once_the_worker_side_is_dropped() {
        let (channel, endpoint) = WorkerChannel::<String, String>::pair();
        drop(endpoint);

        let result = channel.send(RequestEnvelope::new(0, "lost".to_string()));
        assert_eq!(Err(TransportError::WorkerGone), result);
    }
}
