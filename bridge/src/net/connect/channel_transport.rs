use crate::net::connect::envelope::{RequestEnvelope, ResponseEnvelope};
use crate::net::connect::error::TransportError;

pub type InboundHandler<Payload> = Box<dyn Fn(ResponseEnvelope<Payload>) + Send + Sync + 'static>;

/// Envelopes sent in one direction arrive in the order they were sent.
pub trait ChannelTransport<Op, Payload>: Send + Sync {
    fn send(&self, envelope: RequestEnvelope<Op>) -> Result<(), TransportError>;

    /// Only one handler can ever be installed on a channel.
    fn install_inbound_handler(&self, handler: InboundHandler<Payload>) -> Result<(), TransportError>;
}
