//! Response envelope
//!
//! Every public catalog operation answers with the same shape:
//! ```json
//! { "success": true, "data": { ... } }
//! { "success": false, "error": "Failed to load products" }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Uniform `{success, data | error}` envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> AppResponse<T> {
    /// 创建成功响应
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// 创建错误响应
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }

    /// Borrow the payload of a successful response
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Convert back into a `Result`, e.g. for callers that prefer `?`
    pub fn into_result(self) -> Result<T, String> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            _ => Err(self.error.unwrap_or_default()),
        }
    }
}

impl<T> From<Result<T, AppError>> for AppResponse<T> {
    fn from(result: Result<T, AppError>) -> Self {
        match result {
            Ok(data) => Self::success(data),
            Err(err) => Self::error(err.message),
        }
    }
}
