//! 读取单个资源的元数据：PROPFIND + `Depth: 0` + `<allprop/>`。

use std::collections::HashMap;

use crate::internal::client::structs::webdav_client::WebdavClient;
use crate::internal::error::WebdavError;
use crate::internal::item::structs::item::Item;
use crate::internal::webdav::constants::DEPTH_HEADER;
use crate::internal::webdav::enums::{Depth, PropfindRequest, WebDavMethod};
use crate::webdav::functions::{parse_multi_status, send_request};
use crate::webdav::traits::ToItems;

impl WebdavClient {
    /// 读取根目录本身的元数据
    pub async fn get_root(&self) -> Result<Option<Item>, WebdavError> {
        self.get("/").await
    }

    /// 读取单个资源的元数据，服务端没有返回任何记录时为 `None`
    pub async fn get(&self, path: &str) -> Result<Option<Item>, WebdavError> {
        let get_uri = self.resolve(path, true);

        let headers = HashMap::from([(
            DEPTH_HEADER.to_string(),
            Depth::Zero.to_header_value(),
        )]);

        let response = send_request(
            &self.http_client,
            &get_uri,
            WebDavMethod::PROPFIND,
            Some(&headers),
            Some(PropfindRequest::AllProp.body().as_bytes().to_vec()),
        )
        .await?;

        let body = response.bytes().await?;
        let multi_status = parse_multi_status(&body)?;

        Ok(multi_status.to_items()?.into_iter().next())
    }
}
