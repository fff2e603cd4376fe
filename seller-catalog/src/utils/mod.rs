//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`error`] - RepoError → AppError 映射
//! - [`logger`] - 日志初始化
//! - [`validation`] - 输入校验

pub mod error;
pub mod logger;
pub mod validation;

pub use error::{product_error, repo_to_app_error};
pub use shared::error::{AppError, AppResult, ErrorCode};
