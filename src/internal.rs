pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod item;
pub mod webdav;
