use std::collections::HashMap;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Body, Client, Response};
use tracing::debug;

use crate::internal::error::WebdavError;
use crate::internal::webdav::constants::XML_CONTENT_TYPE;
use crate::internal::webdav::enums::WebDavMethod;

/// 调用方请求头转成 `HeaderMap`
///
/// 头名会被统一转成小写（`http` 库的规范形式），HTTP 头名本身不区分大小写，值原样保留
fn to_header_map(
    headers: &HashMap<String, String>,
) -> Result<HeaderMap, WebdavError> {
    let mut header_map = HeaderMap::with_capacity(headers.len());

    for (key, value) in headers {
        let name = HeaderName::from_bytes(key.as_bytes())
            .map_err(|e| WebdavError::InvalidRequest(format!("{key}: {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| WebdavError::InvalidRequest(format!("{key}: {e}")))?;
        header_map.insert(name, value);
    }

    Ok(header_map)
}

/// 发送一次普通请求
///
/// 带请求体时按 `text/xml` 发送；状态码不在这里解释，交给调用方判断
pub async fn send_request(
    client: &Client,
    uri: &str,
    method: WebDavMethod,
    headers: Option<&HashMap<String, String>>,
    body: Option<Vec<u8>>,
) -> Result<Response, WebdavError> {
    let mut request = client.request(method.to_head_method()?, uri);

    if let Some(headers) = headers {
        request = request.headers(to_header_map(headers)?);
    }

    if let Some(body) = body {
        request = request
            .header(CONTENT_TYPE, HeaderValue::from_static(XML_CONTENT_TYPE))
            .body(body);
    }

    debug!(method = method.as_str(), uri, "发送 WebDAV 请求");
    let response = request.send().await?;
    debug!(method = method.as_str(), uri, status = response.status().as_u16(), "收到响应");

    Ok(response)
}

/// 发送上传请求，请求体作为不透明的数据流，不强制 Content-Type
pub async fn send_upload_request(
    client: &Client,
    uri: &str,
    method: WebDavMethod,
    body: Body,
    headers: Option<&HashMap<String, String>>,
) -> Result<Response, WebdavError> {
    let mut request = client.request(method.to_head_method()?, uri).body(body);

    if let Some(headers) = headers {
        request = request.headers(to_header_map(headers)?);
    }

    debug!(method = method.as_str(), uri, "发送上传请求");
    let response = request.send().await?;
    debug!(method = method.as_str(), uri, status = response.status().as_u16(), "收到响应");

    Ok(response)
}
