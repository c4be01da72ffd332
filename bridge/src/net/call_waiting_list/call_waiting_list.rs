use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;

use crate::clock::clock::Clock;
use crate::net::call_waiting_list::call_waiting_list_config::CallWaitingListConfig;
use crate::net::call_waiting_list::expired_callback_remover::ExpiredCallbackRemover;
use crate::net::call_waiting_list::response_callback::{ResponseCallbackType, TimestampedCallback};
use crate::net::connect::call_id::CallId;
use crate::net::connect::error::CallError;

/// Outstanding calls keyed by call id, each waiting for exactly one response.
///
/// An entry is removed the moment its response is handled, so a second response
/// for the same id finds nothing and is dropped.
pub struct CallWaitingList<Payload> {
    pending_calls: Arc<DashMap<CallId, TimestampedCallback<Payload>>>,
    clock: Arc<dyn Clock>,
}

impl<Payload: Send + 'static> CallWaitingList<Payload> {
    pub fn new(clock: Arc<dyn Clock>, config: CallWaitingListConfig) -> Self {
        return Self::new_with_capacity(0, clock, config);
    }

    pub fn new_with_capacity(
        capacity: usize,
        clock: Arc<dyn Clock>,
        config: CallWaitingListConfig) -> Self {
        let pending_calls = Arc::new(DashMap::with_capacity(capacity));
        let call_waiting_list = CallWaitingList { pending_calls, clock };

        call_waiting_list.spin_expired_callbacks_remover(config);
        return call_waiting_list;
    }

    pub fn add(&self, call_id: CallId, operation_name: &'static str, callback: ResponseCallbackType<Payload>) {
        let timestamped_callback = TimestampedCallback::new(callback, operation_name, self.clock.now());
        self.pending_calls.insert(call_id, timestamped_callback);
    }

    pub fn handle_response(&self, call_id: CallId, response: Result<Payload, CallError>) {
        let key_value_existence = self.pending_calls.remove(&call_id);
        match key_value_existence {
            Some((_, timestamped_callback)) => {
                debug!(call_id, operation = timestamped_callback.operation_name(), ok = response.is_ok(), "settling call");
                timestamped_callback.on_response(response);
            }
            None => {
                debug!(call_id, "no pending call for response, dropping it");
            }
        }
    }

    pub fn contains(&self, call_id: CallId) -> bool {
        return self.pending_calls.contains_key(&call_id);
    }

    pub fn pending_count(&self) -> usize {
        return self.pending_calls.len();
    }

    fn spin_expired_callbacks_remover(&self, config: CallWaitingListConfig) {
        if let Some(call_expiry_after) = config.get_call_expiry_after() {
            ExpiredCallbackRemover::start(
                &self.pending_calls,
                self.clock.clone(),
                call_expiry_after,
                config.get_pause_expiry_checker(),
            );
        }
    }
}
