pub mod resolve_url;
