pub mod zkapp_worker_client;
