//! Seller Catalog - 卖家商品目录数据访问层
//!
//! # 架构概述
//!
//! - **数据库** (`db`): 文档存储抽象，嵌入式 SurrealDB 与内存实现
//! - **仓库** (`db::repository`): 商品 CRUD、卖家资料读取
//! - **查询** (`query`): 客户端过滤、排序与搜索
//! - **服务** (`services`): 店铺信息同步、统一响应接口
//!
//! # 模块结构
//!
//! ```text
//! seller-catalog/src/
//! ├── core/          # 配置、状态
//! ├── db/            # 文档存储与仓库
//! ├── query.rs       # 过滤 / 排序 / 搜索
//! ├── services/      # 商品服务、店铺同步、分类
//! └── utils/         # 错误映射、日志、校验
//! ```

pub mod core;
pub mod db;
pub mod query;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use self::core::{CatalogState, Config};
pub use db::repository::{ProductRepository, RepoError, RepoResult, SellerRepository};
pub use db::{DocumentStore, InMemoryDocumentStore, SurrealDocumentStore};
pub use services::{ProductService, StoreSyncService};
pub use utils::{AppError, AppResult, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境: 加载 `.env`，初始化日志
///
/// Returns the loaded configuration.
pub fn setup_environment() -> Config {
    if let Err(e) = dotenv::dotenv() {
        // .env is optional
        eprintln!("No .env loaded: {e}");
    }
    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    config
}
