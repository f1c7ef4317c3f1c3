use chrono::{DateTime, FixedOffset};

/// 一个目录项（文件或目录），由一次 PROPFIND 响应投影而来
///
/// 每次请求都重新构造，构造后不再修改，也不缓存服务端身份。
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub href: String,                                 // 服务端相对路径（原样，可能是 URL 编码）
    pub display_name: Option<String>,                 // 服务端给的显示名
    pub content_type: Option<String>,                 // MIME 类型，目录一般没有
    pub content_length: u64,                          // 文件大小，缺失时为 0
    pub creation_date: Option<DateTime<FixedOffset>>, // 创建时间
    pub last_modified: Option<DateTime<FixedOffset>>, // 最后修改时间
    pub etag: Option<String>,                         // 原始 ETag
    pub is_collection: bool,                          // 是否目录
    pub is_hidden: bool,                              // 是否隐藏
    pub quota_used_bytes: i64,                        // 缺失时为 0
    pub quota_available_bytes: i64,                   // 缺失时为 0
}

impl Item {
    /// 友好化的文件或目录名
    ///
    /// 服务端给了 display_name 就直接用，否则从 href 末尾提取并 URL 解码
    pub fn name(&self) -> String {
        match &self.display_name {
            Some(name) => name.clone(),
            None => percent_encoding::percent_decode_str(
                self.href.trim_end_matches('/').rsplit('/').next().unwrap_or(""),
            )
            .decode_utf8_lossy()
            .to_string(),
        }
    }
}
