pub mod byte_stream;
pub mod webdav_client;
