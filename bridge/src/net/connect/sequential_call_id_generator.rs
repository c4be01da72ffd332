use std::sync::atomic::{AtomicU64, Ordering};

use crate::net::connect::call_id::{CallId, CallIdGenerator};

pub struct SequentialCallIdGenerator {
    next_call_id: AtomicU64,
}

impl CallIdGenerator for SequentialCallIdGenerator {
    fn generate(&self) -> CallId {
        return self.next_call_id.fetch_add(1, Ordering::SeqCst);
    }
}

impl SequentialCallIdGenerator {
    pub fn new() -> Self {
        return Self::starting_at(0);
    }

    pub fn starting_at(call_id: CallId) -> Self {
        return SequentialCallIdGenerator { next_call_id: AtomicU64::new(call_id) };
    }

    pub fn peek_next(&self) -> CallId {
        return self.next_call_id.load(Ordering::SeqCst);
    }
}

impl Default for SequentialCallIdGenerator {
    fn default() -> Self {
        return Self::new();
    }
}
