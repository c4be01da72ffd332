use std::sync::Arc;
use std::time::{Duration, SystemTime};

use tracing::warn;

use crate::clock::clock::Clock;
use crate::net::connect::call_id::CallId;
use crate::net::connect::error::CallError;

pub type ResponseCallbackType<Payload> = Arc<dyn ResponseCallback<Payload> + 'static>;

/// Settlement continuation of one pending call. `Ok` is the success path, `Err` the failure path.
pub trait ResponseCallback<Payload>: Send + Sync {
    fn on_response(&self, response: Result<Payload, CallError>);
}

pub(crate) struct TimestampedCallback<Payload> {
    callback: ResponseCallbackType<Payload>,
    operation_name: &'static str,
    creation_time: SystemTime,
}

impl<Payload> TimestampedCallback<Payload> {
    pub(crate) fn new(callback: ResponseCallbackType<Payload>, operation_name: &'static str, creation_time: SystemTime) -> Self {
        return TimestampedCallback {
            callback,
            operation_name,
            creation_time,
        };
    }

    pub(crate) fn on_response(&self, response: Result<Payload, CallError>) {
        self.callback.on_response(response);
    }

    pub(crate) fn on_timeout_response(&self, call_id: CallId) {
        warn!(call_id, operation = self.operation_name, "call expired without a reply");
        self.callback.on_response(Err(CallError::Timeout { id: call_id }));
    }

    pub(crate) fn has_expired(&self, clock: &Arc<dyn Clock>, expiry_after: &Duration) -> bool {
        return clock.duration_since(self.creation_time).ge(expiry_after);
    }

    pub(crate) fn operation_name(&self) -> &'static str {
        return self.operation_name;
    }
}
