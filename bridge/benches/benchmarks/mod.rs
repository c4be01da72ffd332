pub mod call_waiting_list;
