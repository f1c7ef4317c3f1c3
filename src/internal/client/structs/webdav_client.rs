use core::fmt;
use std::sync::Arc;

use reqwest::Client;

use crate::internal::auth::structs::http_client::InternalHttpClient;
use crate::internal::config::structs::webdav_config::WebdavConfig;
use crate::internal::error::WebdavError;

/// WebDAV 客户端
///
/// 只持有不可变配置和 http 客户端句柄，不保存任何请求间状态；
/// clone 很便宜，可以在多个任务里并发调用各个操作。
/// 操作本身都是 future，drop 掉即取消进行中的请求。
///
/// 默认Eq时会匹配配置和凭据摘要，如果需要单独比较凭据，需使用eq_only_token方法
#[derive(Clone)]
pub struct WebdavClient {
    pub(crate) http_client: Client,          // 内部是Arc，不需要特殊处理
    pub(crate) config: Arc<WebdavConfig>,    // 只读共享
    pub(crate) encrypted_token: Option<Arc<String>>,
}

impl WebdavClient {
    /// 按配置创建客户端，配置中的凭据以预认证的方式附加到每个请求
    pub fn new(config: WebdavConfig) -> Result<Self, WebdavError> {
        let http_client = InternalHttpClient::create(config.credential())?;

        Ok(Self {
            http_client: http_client.client,
            config: Arc::new(config),
            encrypted_token: http_client.encrypted_token.map(Arc::new),
        })
    }

    /// 使用调用方自己构造的 http 客户端（代理、超时、认证都由调用方负责），
    /// 配置中的凭据只参与比较，不会再附加到请求上
    pub fn with_http_client(config: WebdavConfig, http_client: Client) -> Self {
        let encrypted_token = config
            .credential()
            .map(|c| Arc::new(c.encrypted_token()));

        Self {
            http_client,
            config: Arc::new(config),
            encrypted_token,
        }
    }

    pub fn config(&self) -> &WebdavConfig {
        &self.config
    }

    /// 把相对路径拼成完整请求地址
    pub fn resolve(&self, path: &str, append_trailing_slash: bool) -> String {
        self.config.resolve(path, append_trailing_slash)
    }

    /// 仅比较凭据是否相等
    pub fn eq_only_token(&self, other: &Self) -> bool {
        self.encrypted_token == other.encrypted_token
    }
}

/// 用于比较客户端是否指向同一服务器、同一账号
impl PartialEq for WebdavClient {
    fn eq(&self, other: &Self) -> bool {
        self.encrypted_token == other.encrypted_token
            && self.config.server() == other.config.server()
            && self.config.base_path() == other.config.base_path()
            && self.config.port() == other.config.port()
    }
}

/// 防止debug泄漏账号
impl fmt::Debug for WebdavClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebdavClient")
            .field("server", &self.config.server())
            .field("base_path", &self.config.base_path())
            .field("port", &self.config.port())
            .field("client", &"<Client with hidden authorization>")
            .finish()
    }
}
