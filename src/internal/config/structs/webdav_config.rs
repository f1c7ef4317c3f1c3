use url::Url;

use crate::internal::auth::structs::credential::Credential;
use crate::internal::config::functions::resolve_url::resolve_url;
use crate::internal::error::WebdavError;

/// 客户端配置
///
/// - `server`：服务器地址（含协议），保存时去掉末尾的 `/`
/// - `base_path`：作为"根目录"的 WebDAV 路径，统一保存成 `/xxx/` 形式，默认 `/`
/// - `port`：可选端口，未设置时使用协议默认端口
/// - `credential`：可选的基础认证凭据
///
/// 交给 [`crate::WebdavClient`] 之后不可再修改。凭据的 Debug 输出已脱敏。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebdavConfig {
    server: String,
    base_path: String,
    port: Option<u16>,
    credential: Option<Credential>,
}

impl WebdavConfig {
    pub fn new(server: &str) -> Self {
        let mut config = Self {
            server: String::new(),
            base_path: "/".to_string(),
            port: None,
            credential: None,
        };
        config.set_server(server);
        config
    }

    /// 从完整 URL 拆出 server / port / base_path
    ///
    /// 例如 `https://dav.example.com:8443/remote/dav/` 会得到
    /// server=`https://dav.example.com`、port=`8443`、base_path=`/remote/dav/`
    pub fn from_url(url: &str) -> Result<Self, WebdavError> {
        if url.trim().is_empty() {
            return Err(WebdavError::InvalidConfig("路径为空".to_string()));
        }

        let parsed =
            Url::parse(url).map_err(|e| WebdavError::InvalidConfig(e.to_string()))?;

        let host = parsed
            .host_str()
            .ok_or_else(|| WebdavError::InvalidConfig(format!("缺少主机名: {url}")))?;

        let mut config = Self::new(&format!("{}://{}", parsed.scheme(), host));
        config.set_port(parsed.port());
        config.set_base_path(parsed.path());

        Ok(config)
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }

    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    /// 设置服务器地址，去掉末尾的 `/`
    pub fn set_server(&mut self, server: &str) {
        self.server = server.trim_end_matches('/').to_string();
    }

    /// 设置基础路径：空白时为 `/`，否则包装成 `/<value>/`
    pub fn set_base_path(&mut self, base_path: &str) {
        let trimmed = base_path.trim_matches('/');
        self.base_path = if trimmed.trim().is_empty() {
            "/".to_string()
        } else {
            format!("/{trimmed}/")
        };
    }

    pub fn set_port(&mut self, port: Option<u16>) {
        self.port = port;
    }

    pub fn set_credential(&mut self, credential: Option<Credential>) {
        self.credential = credential;
    }

    pub fn with_base_path(mut self, base_path: &str) -> Self {
        self.set_base_path(base_path);
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.set_port(Some(port));
        self
    }

    pub fn with_credential(mut self, username: &str, password: &str) -> Self {
        self.set_credential(Some(Credential::new(username, password)));
        self
    }

    /// 把相对路径拼成完整请求地址，见 [`resolve_url`]
    pub fn resolve(&self, path: &str, append_trailing_slash: bool) -> String {
        resolve_url(self, path, append_trailing_slash)
    }
}
