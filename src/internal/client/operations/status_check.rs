use reqwest::{Response, StatusCode};
use tracing::warn;

use crate::internal::error::WebdavError;

/// 状态码不在接受范围内时返回 `RequestFailed`
pub(super) fn ensure_status(
    response: &Response,
    accepted: &[StatusCode],
    operation: &'static str,
) -> Result<(), WebdavError> {
    let status = response.status();

    if accepted.contains(&status) {
        return Ok(());
    }

    warn!(url = %response.url(), status = status.as_u16(), operation, "状态码不被接受");

    Err(WebdavError::RequestFailed {
        status_code: status.as_u16(),
        operation,
    })
}
