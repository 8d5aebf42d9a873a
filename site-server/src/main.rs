use site_server::{Config, Server, ServerState, init_logger, init_logger_with_file, print_banner};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 加载 .env (不存在时静默跳过)
    dotenv::dotenv().ok();

    // 打印横幅
    print_banner();

    // 2. 加载配置并准备工作目录
    let config = Config::from_env();
    config.ensure_work_dir_structure()?;

    // 3. 初始化日志 (生产环境写入按天滚动的日志文件)
    if config.is_production() {
        let log_dir = config.logs_dir();
        init_logger_with_file(None, log_dir.to_str());
    } else {
        init_logger();
    }

    tracing::info!("🌶️ Pepper Chicken site server starting...");

    // 4. 初始化服务器状态
    let state = ServerState::initialize(&config)?;

    // 5. 启动 HTTP 服务器
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
