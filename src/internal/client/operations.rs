mod create_dir;
mod download;
mod get;
mod list;
mod status_check;
mod upload;
