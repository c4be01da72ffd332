pub mod call_waiting_list;
pub mod call_waiting_list_config;
pub mod response_callback;
mod expired_callback_remover;
