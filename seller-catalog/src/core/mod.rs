//! 核心模块 - 配置与状态
//!
//! # 模块结构
//!
//! - [`Config`] - 目录服务配置
//! - [`CatalogState`] - 已装配的服务

pub mod config;
pub mod state;

pub use config::Config;
pub use state::CatalogState;
