use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::task::{Context, Poll, Waker};

use crate::net::call_waiting_list::response_callback::ResponseCallback;
use crate::net::connect::call_id::CallId;
use crate::net::connect::error::CallError;

struct ReplyState<Payload> {
    response: Option<Result<Payload, CallError>>,
    settled: bool,
    waker: Option<Waker>,
}

pub struct ReplyCallback<Payload> {
    state: Arc<Mutex<ReplyState<Payload>>>,
}

/// Dropping the handle does not withdraw the call.
pub struct ReplyHandle<Payload> {
    call_id: CallId,
    state: Arc<Mutex<ReplyState<Payload>>>,
}

impl<Payload: Send> ResponseCallback<Payload> for ReplyCallback<Payload> {
    fn on_response(&self, response: Result<Payload, CallError>) {
        let waker = {
            let mut guard = lock(&self.state);
            if guard.settled {
                return;
            }
            guard.response = Some(response);
            guard.settled = true;
            guard.waker.take()
        };
        if let Some(waker) = waker {
            waker.wake();
        }
    }
}

impl<Payload> ReplyCallback<Payload> {
    pub fn new() -> Self {
        return ReplyCallback {
            state: Arc::new(Mutex::new(ReplyState { response: None, settled: false, waker: None })),
        };
    }

    pub fn handle(&self, call_id: CallId) -> ReplyHandle<Payload> {
        return ReplyHandle { call_id, state: self.state.clone() };
    }
}

impl<Payload> Default for ReplyCallback<Payload> {
    fn default() -> Self {
        return Self::new();
    }
}

impl<Payload> ReplyHandle<Payload> {
    pub fn call_id(&self) -> CallId {
        return self.call_id;
    }

    pub fn is_settled(&self) -> bool {
        return lock(&self.state).settled;
    }
}

impl<Payload> Future for ReplyHandle<Payload> {
    type Output = Result<Payload, CallError>;

    fn poll(self: Pin<&mut Self>, ctx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut guard = lock(&self.state);
        if let Some(response) = guard.response.take() {
            return Poll::Ready(response);
        }

        let register_waker = match guard.waker.as_ref() {
            Some(waker) => !waker.will_wake(ctx.waker()),
            None => true,
        };
        if register_waker {
            guard.waker = Some(ctx.waker().clone());
        }
        return Poll::Pending;
    }
}

fn lock<Payload>(state: &Mutex<ReplyState<Payload>>) -> MutexGuard<'_, ReplyState<Payload>> {
    return state.lock().unwrap_or_else(PoisonError::into_inner);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use crate::callback::reply_handle::ReplyCallback;
    use crate::net::call_waiting_list::response_callback::ResponseCallback;
    use crate::net::connect::envelope::WorkerFault;
    use crate::net::connect::error::CallError;

    #[tokio::test]
    async fn resolve_with_a_response_delivered_before_polling() {
        let reply_callback = ReplyCallback::<String>::new();
        let handle = reply_callback.handle(0);

        reply_callback.on_response(Ok("result-A".to_string()));

        assert!(handle.is_settled());
        assert_eq!(Ok("result-A".to_string()), handle.await);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn resolve_with_a_response_delivered_from_another_task() {
        let reply_callback = Arc::new(ReplyCallback::<String>::new());
        let handle = reply_callback.handle(3);
        assert_eq!(false, handle.is_settled());

        let cloned_callback = reply_callback.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            cloned_callback.on_response(Err(CallError::WorkerFault(WorkerFault::new("no account"))));
        });

        assert_eq!(3, handle.call_id());
        assert_eq!(Err(CallError::WorkerFault(WorkerFault::new("no account"))), handle.await);
    }

    #[tokio::test]
    async fn keep_the_first_response() {
        let reply_callback = ReplyCallback::<u64>::new();
        let handle = reply_callback.handle(1);

        reply_callback.on_response(Ok(1));
        reply_callback.on_response(Ok(2));

        assert_eq!(Ok(1), handle.await);
    }

    #[tokio::test]
    async fn stay_pending_without_a_response() {
        let reply_callback = ReplyCallback::<u64>::new();
        let handle = reply_callback.handle(1);

        let outcome = tokio::time::timeout(Duration::from_millis(20), handle).await;
        assert!(outcome.is_err());
    }
}
