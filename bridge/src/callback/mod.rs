pub mod reply_handle;
