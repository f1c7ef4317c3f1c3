use reqwest::{
    Client,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};

use crate::internal::auth::structs::credential::Credential;
use crate::internal::error::WebdavError;

/// 内部临时使用的http客户端结构体，在初始化WebdavClient时使用
pub(crate) struct InternalHttpClient {
    pub(crate) client: Client,
    pub(crate) encrypted_token: Option<String>,
}

impl InternalHttpClient {
    /// 创建http客户端
    ///
    /// 有凭据时把 `Authorization: Basic` 放进默认请求头（预认证，不等 401 质询）；
    /// 响应压缩交给 reqwest 的 gzip / deflate 自动解压
    pub(crate) fn create(
        credential: Option<&Credential>,
    ) -> Result<Self, WebdavError> {
        let mut headers = HeaderMap::new();

        if let Some(credential) = credential {
            let mut auth_value =
                HeaderValue::from_str(&format!("Basic {}", credential.basic_token()))
                    .map_err(|e| WebdavError::InvalidConfig(e.to_string()))?;
            auth_value.set_sensitive(true);

            headers.insert(AUTHORIZATION, auth_value);
        }

        let client = Client::builder()
            .http1_only()
            .gzip(true)
            .deflate(true)
            .default_headers(headers)
            .build()
            .map_err(|e| WebdavError::InvalidConfig(e.to_string()))?;

        Ok(Self {
            client,
            encrypted_token: credential.map(Credential::encrypted_token),
        })
    }
}
