use axum::{routing::{get, post}, Router};
use freight_cost_comparator::{api, api::AppState, AppConfig, ShipmentPricer};
use std::sync::Arc;
use tower::ServiceBuilder;
use tracing::info;
use tracing_subscriber::fmt::time::ChronoLocal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日志 - 本地时间格式
    tracing_subscriber::fmt()
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(true)
        .with_level(true)
        .init();

    // 加载配置
    let config = AppConfig::from_env()?;
    info!("Starting server with config: {:?}", config);

    // 加载费率卡, 构建计价服务
    let card = config.load_rate_card()?;
    let pricer = Arc::new(ShipmentPricer::new(card)?);
    info!("Rate card {} loaded, countries: {:?}", pricer.card_version(), pricer.registry().countries());

    let state = AppState {
        pricer,
        lookback_days: config.report.lookback_days,
    };

    // 构建路由
    let app = Router::new()
        .route("/health", get(api::health_check))
        .route("/api/price/batch", post(api::price_batch))
        .route("/api/report/comparison", post(api::comparison_report))
        .with_state(state)
        .layer(ServiceBuilder::new());

    // 启动服务器
    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Server listening on {}", addr);
    info!("API Endpoints:");
    info!("  POST /api/price/batch                - JSON shipments -> prices");
    info!("  POST /api/report/comparison?abos=... - spend report CSV -> comparison CSV");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
