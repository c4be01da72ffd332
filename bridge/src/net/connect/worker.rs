use std::sync::Arc;

use async_trait::async_trait;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::net::connect::envelope::{ResponseEnvelope, WorkerFault};
use crate::net::connect::operation::Operation;
use crate::net::connect::worker_channel::WorkerEndpoint;

#[async_trait]
pub trait Worker<Op, Payload>: Send + Sync + 'static {
    async fn handle(&self, operation: Op) -> Result<Payload, WorkerFault>;
}

/// Requests are taken in send order and each one is handled on its own task. A
/// handler that panics is answered with a [`WorkerFault`].
pub fn spawn_worker<Op, Payload, W>(mut endpoint: WorkerEndpoint<Op, Payload>, worker: Arc<W>) -> JoinHandle<()>
    where
        Op: Operation,
        Payload: Send + 'static,
        W: Worker<Op, Payload> {
    return tokio::spawn(async move {
        while let Some(request) = endpoint.next_request().await {
            let worker = worker.clone();
            let responder = endpoint.responder();
            tokio::spawn(async move {
                let call_id = request.id;
                let operation_name = request.operation.name();
                let operation = request.operation;
                let result = match tokio::spawn(async move { worker.handle(operation).await }).await {
                    Ok(result) => result,
                    Err(err) => {
                        warn!(call_id, operation = operation_name, error = %err, "worker failed while handling call");
                        Err(WorkerFault::new(format!("worker failed while handling {}: {}", operation_name, err)))
                    }
                };
                if responder.reply(ResponseEnvelope::from_result(call_id, result)).is_err() {
                    debug!(call_id, operation = operation_name, "caller context is gone, reply dropped");
                }
            });
        }
        debug!("caller side closed, worker context stopped");
    });
}
