pub mod client;
pub mod error;
pub mod operation;
pub mod worker;
