use crate::internal::config::structs::webdav_config::WebdavConfig;

/// 把相对路径拼成完整请求地址
///
/// 规则：
/// - `path` 以 server 开头（忽略大小写）时，先去掉 server 前缀，剩余部分按相对路径处理
/// - 拼接结果为 `server[:port] + base_path + path去掉首尾/`
/// - `append_trailing_slash` 为 true 且结果不以 `/` 结尾时补一个 `/`
///
/// 不做任何校验，非法输入会得到非法 URL，交给调用方负责。
///
/// example:
/// ```ignore
/// use webdav_client::config::{WebdavConfig, resolve_url};
///
/// let config = WebdavConfig::new("https://x.com/");
/// assert_eq!(resolve_url(&config, "/Test/", true), "https://x.com/Test/");
/// ```
pub fn resolve_url(
    config: &WebdavConfig,
    path: &str,
    append_trailing_slash: bool,
) -> String {
    let server = config.server();
    let mut complete_path = config.base_path().to_string();

    let relative = strip_server_prefix(server, path).unwrap_or(path);
    complete_path.push_str(relative.trim_matches('/'));

    if append_trailing_slash && !complete_path.ends_with('/') {
        complete_path.push('/');
    }

    match config.port() {
        Some(port) => format!("{server}:{port}{complete_path}"),
        None => format!("{server}{complete_path}"),
    }
}

/// `path` 以 server 开头（忽略大小写）时返回剩余部分
fn strip_server_prefix<'a>(server: &str, path: &'a str) -> Option<&'a str> {
    if server.is_empty() {
        return None;
    }

    let head = path.get(..server.len())?;
    if head.eq_ignore_ascii_case(server) {
        path.get(server.len()..)
    } else {
        None
    }
}
