pub mod webdav_config;
