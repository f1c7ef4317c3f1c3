use chrono::{DateTime, FixedOffset};
use url::Url;

use crate::internal::error::WebdavError;
use crate::internal::item::structs::item::Item;
use crate::webdav::structs::{MultiStatus, Prop, PropStat, Response};

/// 把 multistatus 原始记录投影成 [`Item`]，结果顺序与服务端响应一致
pub trait ToItems {
    /// 全部投影，不做过滤
    fn to_items(self) -> Result<Vec<Item>, WebdavError>;

    /// 列目录用：去掉代表被查询目录本身的那一项
    ///
    /// - `request_uri`：实际发出的完整请求地址
    /// - `request_path`：调用方传入的原始路径
    fn to_listing_items(
        self,
        request_uri: &str,
        request_path: &str,
    ) -> Result<Vec<Item>, WebdavError>;
}

/// 判断 href 是否指向被查询的目录本身
///
/// 以下任一成立即视为自身：
/// - href 与完整请求地址或原始路径相等（忽略大小写）
/// - 去掉末尾 `/` 并 URL 解码后，与原始路径相等
/// - 去掉末尾 `/` 并 URL 解码后，与请求地址中的路径部分相等（服务端一般返回绝对路径）
pub fn is_self_entry(href: &str, request_uri: &str, request_path: &str) -> bool {
    if href.eq_ignore_ascii_case(request_uri)
        || href.eq_ignore_ascii_case(request_path)
    {
        return true;
    }

    let href_trimmed = normalize_path(href);
    if href_trimmed == normalize_path(request_path) {
        return true;
    }

    match Url::parse(request_uri) {
        Ok(url) => href_trimmed == normalize_path(url.path()),
        Err(_) => false,
    }
}

fn normalize_path(path: &str) -> String {
    percent_encoding::percent_decode_str(path.trim_end_matches('/'))
        .decode_utf8_lossy()
        .to_string()
}

fn take_ok_propstat(propstats: Vec<PropStat>) -> Option<PropStat> {
    // 拿到第一个 2xx 的 PropStat（直接 move 出来）；缺少 status 的也接受
    propstats
        .into_iter()
        .find(|ps| ps.is_success() || ps.status.is_none())
}

/// 解析 `getlastmodified`：HTTP-date，兼容 RFC 3339
fn parse_last_modified(
    raw: Option<String>,
) -> Result<Option<DateTime<FixedOffset>>, WebdavError> {
    raw.map(|value| {
        DateTime::parse_from_rfc2822(&value)
            .or_else(|_| DateTime::parse_from_rfc3339(&value))
            .map_err(|source| WebdavError::DateParse {
                field: "getlastmodified",
                value,
                source,
            })
    })
    .transpose()
}

/// 解析 `creationdate`：RFC 3339，兼容 HTTP-date
fn parse_creation_date(
    raw: Option<String>,
) -> Result<Option<DateTime<FixedOffset>>, WebdavError> {
    raw.map(|value| {
        DateTime::parse_from_rfc3339(&value)
            .or_else(|_| DateTime::parse_from_rfc2822(&value))
            .map_err(|source| WebdavError::DateParse {
                field: "creationdate",
                value,
                source,
            })
    })
    .transpose()
}

fn project_response(response: Response) -> Result<Item, WebdavError> {
    let Response { href, propstats } = response;

    // 没有 2xx 的属性集时仍然保留这一项，字段全部走默认值
    let prop = take_ok_propstat(propstats)
        .map(|ps| ps.prop)
        .unwrap_or_default();

    let Prop {
        content_length,
        creation_date,
        display_name,
        etag,
        last_modified,
        resource_type,
        is_hidden,
        is_collection,
        content_type,
        quota_used_bytes,
        quota_available_bytes,
    } = prop;

    let is_collection = is_collection.is_some_and(|flag| flag != 0)
        || resource_type
            .as_ref()
            .and_then(|rt| rt.is_collection.as_ref())
            .is_some();

    Ok(Item {
        href, // move
        display_name,
        content_type,
        content_length: content_length.unwrap_or(0),
        creation_date: parse_creation_date(creation_date)?,
        last_modified: parse_last_modified(last_modified)?,
        etag,
        is_collection,
        is_hidden: is_hidden.is_some_and(|flag| flag != 0),
        quota_used_bytes: quota_used_bytes.unwrap_or(0),
        quota_available_bytes: quota_available_bytes.unwrap_or(0),
    })
}

impl ToItems for MultiStatus {
    fn to_items(self) -> Result<Vec<Item>, WebdavError> {
        self.responses.into_iter().map(project_response).collect()
    }

    fn to_listing_items(
        self,
        request_uri: &str,
        request_path: &str,
    ) -> Result<Vec<Item>, WebdavError> {
        self.responses
            .into_iter()
            .filter(|r| !is_self_entry(&r.href, request_uri, request_path))
            .map(project_response)
            .collect()
    }
}
