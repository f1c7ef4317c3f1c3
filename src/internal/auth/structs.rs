pub mod credential;
pub mod http_client;
