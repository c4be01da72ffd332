pub mod connect;
pub mod call_waiting_list;
