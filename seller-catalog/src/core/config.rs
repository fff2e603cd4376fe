/// Built-in category set used when `PRODUCT_CATEGORIES` is not set
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Elektronik",
    "Fashion",
    "Makanan",
    "Minuman",
    "Kesehatan",
    "Kecantikan",
    "Rumah Tangga",
    "Olahraga",
    "Hobi",
    "Lainnya",
];

/// Built-in placeholder image used when `PLACEHOLDER_IMAGE` is not set
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/400x400?text=No+Image";

/// 目录服务配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | DATA_DIR | ./data/catalog | SurrealDB (RocksDB) 数据目录 |
/// | DB_NAMESPACE | marketplace | SurrealDB namespace |
/// | DB_NAME | catalog | SurrealDB database |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (未设置) | 设置后写入滚动日志文件 |
/// | PRODUCT_CATEGORIES | 内置列表 | 逗号分隔的分类 |
/// | PLACEHOLDER_IMAGE | 内置 URL | 无图片时使用的占位图 |
///
/// # 示例
///
/// ```ignore
/// DATA_DIR=/var/lib/catalog LOG_LEVEL=debug seller-catalog stats seller-1
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 数据库目录
    pub data_dir: String,
    pub db_namespace: String,
    pub db_name: String,
    /// 日志级别 (EnvFilter 语法)
    pub log_level: String,
    /// 日志文件目录
    pub log_dir: Option<String>,
    /// 可用商品分类
    pub categories: Vec<String>,
    /// 占位图
    pub placeholder_image: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            data_dir: std::env::var("DATA_DIR").unwrap_or_else(|_| "./data/catalog".into()),
            db_namespace: std::env::var("DB_NAMESPACE").unwrap_or_else(|_| "marketplace".into()),
            db_name: std::env::var("DB_NAME").unwrap_or_else(|_| "catalog".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.trim().is_empty()),
            categories: std::env::var("PRODUCT_CATEGORIES")
                .ok()
                .map(|raw| parse_list(&raw))
                .filter(|list| !list.is_empty())
                .unwrap_or_else(|| DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()),
            placeholder_image: std::env::var("PLACEHOLDER_IMAGE")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_PLACEHOLDER_IMAGE.into()),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(data_dir: impl Into<String>, categories: &[&str]) -> Self {
        let mut config = Self::from_env();
        config.data_dir = data_dir.into();
        config.categories = categories.iter().map(|c| c.to_string()).collect();
        config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Split a comma separated list, dropping blank entries
fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
