pub mod field;
pub mod operation_name;
pub mod public_key;
pub mod zkapp_reply;
pub mod zkapp_request;
