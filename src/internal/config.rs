//! 客户端配置：服务器地址、基础路径、端口与凭据，以及基于它们的 URL 拼接规则。

pub mod functions;
pub mod structs;
