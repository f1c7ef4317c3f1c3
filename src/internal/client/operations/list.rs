//! 列目录：PROPFIND + Depth 头 + `<propname/>` 请求体。

use std::collections::HashMap;

use tracing::debug;

use crate::internal::client::structs::webdav_client::WebdavClient;
use crate::internal::error::WebdavError;
use crate::internal::item::structs::item::Item;
use crate::internal::webdav::constants::DEPTH_HEADER;
use crate::internal::webdav::enums::{Depth, PropfindRequest, WebDavMethod};
use crate::webdav::functions::{parse_multi_status, send_request};
use crate::webdav::traits::ToItems;

impl WebdavClient {
    /// 列出根目录（Depth 1）
    pub async fn list_root(&self) -> Result<Vec<Item>, WebdavError> {
        self.list("/").await
    }

    /// 列出指定目录的直接子项（Depth 1，避免服务端默认的无限递归）
    ///
    /// 结果中不包含目录自身，顺序与服务端响应一致
    pub async fn list(&self, path: &str) -> Result<Vec<Item>, WebdavError> {
        self.list_with_depth(path, Some(Depth::One)).await
    }

    /// 按指定深度列目录，`depth` 为 `None` 时不发送 Depth 头（服务端默认，通常是 infinity）
    pub async fn list_with_depth(
        &self,
        path: &str,
        depth: Option<Depth>,
    ) -> Result<Vec<Item>, WebdavError> {
        self.list_with_request(path, depth, PropfindRequest::PropName)
            .await
    }

    /// 按指定深度和请求体列目录
    pub async fn list_with_request(
        &self,
        path: &str,
        depth: Option<Depth>,
        propfind: PropfindRequest,
    ) -> Result<Vec<Item>, WebdavError> {
        let list_uri = self.resolve(path, true);

        let mut headers = HashMap::new();
        if let Some(depth) = depth {
            headers.insert(DEPTH_HEADER.to_string(), depth.to_header_value());
        }

        let response = send_request(
            &self.http_client,
            &list_uri,
            WebDavMethod::PROPFIND,
            Some(&headers),
            Some(propfind.body().as_bytes().to_vec()),
        )
        .await?;

        let body = response.bytes().await?;
        let multi_status = parse_multi_status(&body)?;

        let items = multi_status.to_listing_items(&list_uri, path)?;
        debug!(uri = %list_uri, count = items.len(), "列目录完成");

        Ok(items)
    }
}
