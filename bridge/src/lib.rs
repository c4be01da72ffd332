pub mod callback;
pub mod client;
pub mod clock;
pub mod config;
pub mod net;
pub mod observability;
