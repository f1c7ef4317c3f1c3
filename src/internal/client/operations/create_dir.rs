//! 创建目录：MKCOL 到 `path + name`，接受 200 / 201。

use reqwest::StatusCode;

use crate::internal::client::structs::webdav_client::WebdavClient;
use crate::internal::error::{CREATE_DIR_FAILED, WebdavError};
use crate::internal::webdav::enums::WebDavMethod;
use crate::webdav::functions::send_request;

use super::status_check::ensure_status;

impl WebdavClient {
    /// 在 `path` 下创建名为 `name` 的目录
    ///
    /// 目录已存在时服务端通常返回 405 / 409，原样作为 `RequestFailed` 返回
    pub async fn create_dir(&self, path: &str, name: &str) -> Result<bool, WebdavError> {
        // 目录地址同样不带末尾斜杠
        let dir_uri = self.resolve(&format!("{path}{name}"), false);

        let response = send_request(
            &self.http_client,
            &dir_uri,
            WebDavMethod::MKCOL,
            None,
            None,
        )
        .await?;

        ensure_status(
            &response,
            &[StatusCode::OK, StatusCode::CREATED],
            CREATE_DIR_FAILED,
        )?;

        // 走到这里时状态码只可能是 200 / 201
        Ok(true)
    }
}
