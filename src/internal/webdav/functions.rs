pub mod parse_multi_status;
pub mod send_request;
