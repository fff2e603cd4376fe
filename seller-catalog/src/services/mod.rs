//! 服务层
//!
//! # 服务列表
//!
//! - [`ProductService`] - 对外接口，返回统一响应结构
//! - [`StoreSyncService`] - 商品店铺信息快照修复与批量同步
//! - [`CategoryProvider`] - 可用商品分类

pub mod category;
pub mod product_service;
pub mod store_sync;

pub use category::{CategoryProvider, StaticCategoryProvider};
pub use product_service::ProductService;
pub use store_sync::StoreSyncService;
