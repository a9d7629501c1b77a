use anyhow::Context;
use shop_server::{Config, Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 设置环境 (dotenv, 日志)
    setup_environment();

    print_banner();

    // 2. 加载配置
    let config = Config::from_env();
    tracing::info!(
        port = config.http_port,
        work_dir = %config.work_dir,
        environment = %config.environment,
        "🛒 Shop server starting..."
    );

    // 3. 初始化服务器状态 (工作目录、订单数据库、商品文件)
    let state = ServerState::initialize(&config).context("Failed to initialize server state")?;

    // 4. 启动 HTTP 服务器
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
