pub mod call_id;
pub mod sequential_call_id_generator;
pub mod operation;
pub mod envelope;
pub mod error;
pub mod channel_transport;
pub mod worker_channel;
pub mod worker;
