use core::fmt;

use base64::Engine;
use sha2::{Digest, Sha256};

/// 基础认证凭据
///
/// 默认Eq时会同时匹配用户名和密码；Debug 只输出用户名
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    pub username: String,
    password: String,
}

impl Credential {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    /// `user:password` 的 base64 编码，用于 `Authorization: Basic` 头
    pub(crate) fn basic_token(&self) -> String {
        base64::engine::general_purpose::STANDARD
            .encode(format!("{}:{}", self.username, self.password))
    }

    /// token 的 sha256 摘要，只用于比较，不可逆
    pub(crate) fn encrypted_token(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.basic_token().as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

/// 防止debug泄漏密码
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &"<hidden>")
            .finish()
    }
}
