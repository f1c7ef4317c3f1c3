//! 上传：PUT 到 `path + name`，接受 200 / 201。

use std::path::Path;

use bytes::Bytes;
use futures_util::TryStream;
use reqwest::{Body, StatusCode};
use tokio::fs::File;

use crate::internal::client::structs::webdav_client::WebdavClient;
use crate::internal::error::{UPLOAD_FAILED, WebdavError};
use crate::internal::webdav::enums::WebDavMethod;
use crate::webdav::functions::send_upload_request;

use super::status_check::ensure_status;

impl WebdavClient {
    /// 上传文件，`path` 为目标目录、`name` 为文件名，两者直接拼接
    ///
    /// 返回服务端是否报告成功；状态码不是 200 / 201 时返回 `RequestFailed`
    pub async fn upload(
        &self,
        path: &str,
        content: impl Into<Body>,
        name: &str,
    ) -> Result<bool, WebdavError> {
        // 文件地址不带末尾斜杠
        let upload_uri = self.resolve(&format!("{path}{name}"), false);

        let response = send_upload_request(
            &self.http_client,
            &upload_uri,
            WebDavMethod::PUT,
            content.into(),
            None,
        )
        .await?;

        ensure_status(
            &response,
            &[StatusCode::OK, StatusCode::CREATED],
            UPLOAD_FAILED,
        )?;

        // 走到这里时状态码只可能是 200 / 201
        Ok(true)
    }

    /// 以数据流的形式上传
    pub async fn upload_stream<S>(
        &self,
        path: &str,
        stream: S,
        name: &str,
    ) -> Result<bool, WebdavError>
    where
        S: TryStream + Send + Sync + 'static,
        S::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
        Bytes: From<S::Ok>,
    {
        self.upload(path, Body::wrap_stream(stream), name).await
    }

    /// 上传本地文件，边读边传
    pub async fn upload_file(
        &self,
        path: &str,
        local_path: impl AsRef<Path>,
        name: &str,
    ) -> Result<bool, WebdavError> {
        let file = File::open(local_path.as_ref()).await?;

        self.upload(path, Body::from(file), name).await
    }
}
