//! 下载：GET，只接受 200。

use std::path::{Path, PathBuf};

use bytes::Bytes;
use futures_util::{StreamExt, TryStreamExt};
use reqwest::{Response, StatusCode};
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use crate::internal::client::structs::byte_stream::ByteStream;
use crate::internal::client::structs::webdav_client::WebdavClient;
use crate::internal::error::{DOWNLOAD_FAILED, WebdavError};
use crate::internal::webdav::enums::WebDavMethod;
use crate::webdav::functions::send_request;

use super::status_check::ensure_status;

impl WebdavClient {
    async fn download_response(&self, path: &str) -> Result<Response, WebdavError> {
        // 文件地址不带末尾斜杠
        let download_uri = self.resolve(path, false);

        let response = send_request(
            &self.http_client,
            &download_uri,
            WebDavMethod::GET,
            None,
            None,
        )
        .await?;

        ensure_status(&response, &[StatusCode::OK], DOWNLOAD_FAILED)?;

        Ok(response)
    }

    /// 下载文件，返回响应体数据流
    ///
    /// 非 200 时返回 `RequestFailed`，不会返回数据流
    pub async fn download(&self, path: &str) -> Result<ByteStream, WebdavError> {
        let response = self.download_response(path).await?;

        Ok(Box::pin(response.bytes_stream().map_err(WebdavError::from)))
    }

    /// 下载文件到内存
    pub async fn download_bytes(&self, path: &str) -> Result<Bytes, WebdavError> {
        let response = self.download_response(path).await?;

        Ok(response.bytes().await?)
    }

    /// 下载文件并流式写入本地，返回写入的字节数
    ///
    /// 先写到同目录下的 `<save_path>.part`，完整写完后再改名覆盖目标文件；
    /// 中途失败时删除临时文件，目标位置原有的文件保持不变
    pub async fn download_to(
        &self,
        path: &str,
        save_path: impl AsRef<Path>,
    ) -> Result<u64, WebdavError> {
        let save_path = save_path.as_ref();
        let response = self.download_response(path).await?;

        let temp_path = part_path(save_path);
        let bytes_done = match write_to_file(response, &temp_path).await {
            Ok(bytes_done) => bytes_done,
            Err(e) => {
                if let Err(remove_err) = fs::remove_file(&temp_path).await {
                    warn!(temp_path = %temp_path.display(), error = %remove_err, "删除临时文件失败");
                }
                return Err(e);
            }
        };

        if let Err(e) = fs::rename(&temp_path, save_path).await {
            fs::remove_file(&temp_path).await.ok();
            return Err(e.into());
        }

        debug!(path, save_path = %save_path.display(), bytes_done, "下载完成");

        Ok(bytes_done)
    }
}

/// `a/b.txt` -> `a/b.txt.part`
fn part_path(save_path: &Path) -> PathBuf {
    let mut name = save_path.as_os_str().to_os_string();
    name.push(".part");
    PathBuf::from(name)
}

async fn write_to_file(response: Response, temp_path: &Path) -> Result<u64, WebdavError> {
    let mut file = File::create(temp_path).await?;
    let mut stream = response.bytes_stream();
    let mut bytes_done: u64 = 0;

    while let Some(chunk_result) = stream.next().await {
        let chunk = chunk_result?;
        file.write_all(&chunk).await?;
        bytes_done += chunk.len() as u64;
    }

    file.flush().await?;

    Ok(bytes_done)
}
