use std::sync::{Arc, Weak};
use std::thread;
use std::time::Duration;

use dashmap::DashMap;

use crate::clock::clock::Clock;
use crate::net::connect::call_id::CallId;
use crate::net::call_waiting_list::response_callback::TimestampedCallback;

/// Settles pending calls that outlived `expiry_after` with a timeout.
///
/// Runs on its own thread and stops once the call waiting list it watches is dropped.
pub(crate) struct ExpiredCallbackRemover<Payload> {
    pending_calls: Weak<DashMap<CallId, TimestampedCallback<Payload>>>,
    expiry_after: Duration,
    clock: Arc<dyn Clock>,
}

impl<Payload: Send + 'static> ExpiredCallbackRemover<Payload> {
    pub(crate) fn start(pending_calls: &Arc<DashMap<CallId, TimestampedCallback<Payload>>>,
                        clock: Arc<dyn Clock>,
                        expiry_after: Duration,
                        pause_expiry_checker: Duration) {

        let remover = ExpiredCallbackRemover { pending_calls: Arc::downgrade(pending_calls), expiry_after, clock };
        thread::spawn(move || {
            while remover.remove() {
                thread::sleep(pause_expiry_checker);
            }
        });
    }

    fn remove(&self) -> bool {
        let pending_calls = match self.pending_calls.upgrade() {
            Some(pending_calls) => pending_calls,
            None => return false,
        };

        let expired_call_ids: Vec<CallId> = pending_calls
            .iter()
            .filter(|entry| entry.value().has_expired(&self.clock, &self.expiry_after))
            .map(|entry| *entry.key())
            .collect();

        // callbacks run outside the map's shard locks
        for call_id in expired_call_ids {
            if let Some((call_id, timestamped_callback)) = pending_calls.remove(&call_id) {
                timestamped_callback.on_timeout_response(call_id);
            }
        }
        return true;
    }
}
