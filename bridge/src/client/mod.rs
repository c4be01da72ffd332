pub mod correlation_client;
