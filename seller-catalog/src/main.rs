use seller_catalog::{CatalogState, setup_environment};

const USAGE: &str = "usage: seller-catalog <repair-seller|stats|list> <seller-id>";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 设置环境 (dotenv, 日志) 并加载配置
    let config = setup_environment();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (command, seller_id) = match args.as_slice() {
        [command, seller_id] => (command.as_str(), seller_id.as_str()),
        _ => {
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    };

    // 2. 打开数据库并装配服务
    let state = CatalogState::initialize(&config).await?;
    tracing::info!(data_dir = %config.data_dir, command, seller_id, "Seller catalog started");

    // 3. 执行命令，输出统一响应 JSON
    let output = match command {
        "repair-seller" => serde_json::to_string_pretty(&state.products.repair_seller(seller_id).await)?,
        "stats" => serde_json::to_string_pretty(&state.products.get_seller_stats(seller_id).await)?,
        "list" => serde_json::to_string_pretty(&state.products.get_seller_products(seller_id).await)?,
        other => {
            eprintln!("unknown command: {other}\n{USAGE}");
            std::process::exit(2);
        }
    };
    println!("{output}");

    Ok(())
}
