//! 统一错误处理
//!
//! Repository errors become [`AppError`]s at the service boundary. Only
//! caller-safe text reaches the envelope:
//!
//! | RepoError | ErrorCode | 返回消息 |
//! |-----------|-----------|----------|
//! | NotFound | 6001 / 6601 | "Product not found" / "Seller not found" |
//! | Validation | 2 | 验证消息原文 |
//! | Database | 9002 | 每个操作固定的失败消息 |
//!
//! The database cause is logged here and dropped.

use shared::error::{AppError, ErrorCode};

use crate::db::repository::RepoError;

/// 操作失败时返回给调用方的固定消息
pub mod messages {
    pub const CREATE_FAILED: &str = "Failed to save product";
    pub const UPDATE_FAILED: &str = "Failed to update product";
    pub const DELETE_FAILED: &str = "Failed to delete product";
    pub const LOAD_FAILED: &str = "Failed to load product";
    pub const LIST_FAILED: &str = "Failed to load products";
    pub const SEARCH_FAILED: &str = "Failed to search products";
    pub const STOCK_FAILED: &str = "Failed to update stock";
    pub const SYNC_FAILED: &str = "Failed to sync store info";
    pub const STATS_FAILED: &str = "Failed to load seller stats";
}

/// Map a repository error to a caller-facing [`AppError`]
///
/// `not_found` picks the code for a missing resource; `failure` is the
/// message returned for database errors.
pub fn repo_to_app_error(err: RepoError, not_found: ErrorCode, failure: &str) -> AppError {
    match err {
        RepoError::NotFound(detail) => {
            tracing::debug!(detail = %detail, "Resource not found");
            AppError::new(not_found)
        }
        RepoError::Validation(msg) => AppError::validation(msg),
        RepoError::Database(cause) => {
            tracing::error!(error = %cause, "{failure}");
            AppError::database(failure)
        }
    }
}

/// [`repo_to_app_error`] for product operations
pub fn product_error(err: RepoError, failure: &str) -> AppError {
    repo_to_app_error(err, ErrorCode::ProductNotFound, failure)
}
