use serde::Deserialize;

use super::de_helpers::{de_opt_flag, de_opt_i64, de_opt_text, de_opt_u64};

/// 对应 WebDAV 响应 XML 顶层的 `<D:multistatus>` 节点
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct MultiStatus {
    /// `<D:response>` 节点列表，每个 response 表示一个资源（文件或目录），顺序与服务端一致
    #[serde(rename = "response", default)]
    pub responses: Vec<Response>,
}

/// 对应单个 `<D:response>` 节点
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Response {
    /// `<D:href>`：资源路径（URL 编码，需要解码才能显示原始文件名）
    pub href: String,
    /// `<D:propstat>`：资源属性集和对应状态码的列表
    #[serde(rename = "propstat", default)]
    pub propstats: Vec<PropStat>,
}

/// 对应 `<D:propstat>` 节点：一个属性集 + 对应的 HTTP 状态
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct PropStat {
    /// `<D:prop>`：资源的具体属性
    #[serde(default)]
    pub prop: Prop,
    /// `<D:status>`：该属性集对应的 HTTP 状态，如 "HTTP/1.1 200 OK"
    #[serde(default)]
    pub status: Option<String>,
}

impl PropStat {
    /// 状态行中的状态码，例如 "HTTP/1.1 200 OK" -> 200
    pub fn status_code(&self) -> Option<u16> {
        self.status
            .as_deref()?
            .split_whitespace()
            .find_map(|t| t.parse::<u16>().ok())
    }

    pub fn is_success(&self) -> bool {
        self.status_code()
            .map(|code| (200..=299).contains(&code))
            .unwrap_or(false)
    }
}

/// 对应 `<D:prop>` 节点
///
/// 所有字段都是 Option：`None` 表示响应里没有这个属性（或者是空元素），
/// 与值为 0 区分开，默认值由投影阶段决定。
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Prop {
    /// `<getcontentlength>`：文件大小（字节），目录一般没有此字段
    #[serde(rename = "getcontentlength", deserialize_with = "de_opt_u64", default)]
    pub content_length: Option<u64>,

    /// `<creationdate>`：资源创建时间原文（通常是 ISO8601）
    #[serde(rename = "creationdate", deserialize_with = "de_opt_text", default)]
    pub creation_date: Option<String>,

    /// `<displayname>`：显示名
    #[serde(rename = "displayname", deserialize_with = "de_opt_text", default)]
    pub display_name: Option<String>,

    /// `<getetag>`：实体标签，保留原文（含引号）
    #[serde(rename = "getetag", deserialize_with = "de_opt_text", default)]
    pub etag: Option<String>,

    /// `<getlastmodified>`：最后修改时间原文（HTTP-date 格式）
    #[serde(rename = "getlastmodified", deserialize_with = "de_opt_text", default)]
    pub last_modified: Option<String>,

    /// `<resourcetype>`：资源类型（文件/目录）
    #[serde(rename = "resourcetype", default)]
    pub resource_type: Option<ResourceType>,

    /// `<ishidden>`：微软扩展属性，1 表示隐藏
    #[serde(rename = "ishidden", deserialize_with = "de_opt_flag", default)]
    pub is_hidden: Option<u8>,

    /// `<iscollection>`：微软扩展属性，1 表示目录
    #[serde(rename = "iscollection", deserialize_with = "de_opt_flag", default)]
    pub is_collection: Option<u8>,

    /// `<getcontenttype>`：MIME 类型，目录一般没有
    #[serde(rename = "getcontenttype", deserialize_with = "de_opt_text", default)]
    pub content_type: Option<String>,

    /// `<quota-used-bytes>`：已用空间（RFC 4331）
    #[serde(rename = "quota-used-bytes", deserialize_with = "de_opt_i64", default)]
    pub quota_used_bytes: Option<i64>,

    /// `<quota-available-bytes>`：可用空间，部分服务端用负数表示未知
    #[serde(
        rename = "quota-available-bytes",
        deserialize_with = "de_opt_i64",
        default
    )]
    pub quota_available_bytes: Option<i64>,
}

/// `<resourcetype>` 节点
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct ResourceType {
    /// `<collection/>` 存在表示是目录，否则是文件
    #[serde(rename = "collection", default)]
    pub is_collection: Option<EmptyElement>,
}

/// 空元素的占位结构，例如 `<collection/>`
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct EmptyElement {}
