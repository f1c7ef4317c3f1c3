//! 客户端错误类型。

use thiserror::Error;

/// `download` 返回非 200 时的操作说明
pub const DOWNLOAD_FAILED: &str = "Failed retrieving file.";

/// `upload` 返回非 200/201 时的操作说明
pub const UPLOAD_FAILED: &str = "Failed uploading file.";

/// `create_dir` 返回非 200/201 时的操作说明
pub const CREATE_DIR_FAILED: &str = "Failed creating folder.";

#[derive(Debug, Error)]
pub enum WebdavError {
    /// PROPFIND 响应体为空、不是 XML，或根节点不是 `multistatus`。
    ///
    /// 反序列化拿不到任何结果（协议错误）时同样归到这里。
    #[error("响应格式异常: {0}")]
    MalformedResponse(String),

    /// 服务端返回了当前操作不接受的状态码
    #[error("请求失败（状态码 {status_code}）: {operation}")]
    RequestFailed {
        status_code: u16,
        operation: &'static str,
    },

    #[error("日期解析失败 [{field}]: {value}")]
    DateParse {
        field: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// 底层 HTTP 错误（连接、TLS、超时等），原样透传
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("请求构造失败: {0}")]
    InvalidRequest(String),

    #[error("配置错误: {0}")]
    InvalidConfig(String),

    #[error("本地文件读写失败: {0}")]
    LocalIo(#[from] std::io::Error),
}

impl WebdavError {
    /// 服务端状态码（仅 `RequestFailed` 有）
    pub fn status_code(&self) -> Option<u16> {
        match self {
            WebdavError::RequestFailed { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }
}
