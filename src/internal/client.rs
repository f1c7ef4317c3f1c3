//! 客户端门面：list / get / download / upload / create_dir 等对外操作。
//!
//! 每个操作只发一次请求，不重试、不缓存；操作实现按文件拆分在 `operations` 下。

pub mod operations;
pub mod structs;
