use crate::models::{PriceResult, Shipment};
use crate::report::{self, Selection};
use crate::service::{PricingStats, ShipmentPricer};
use axum::{
    extract::{Json, Query, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const EXPORT_FILE_NAME: &str = "kn_albaran_cost_comparison.csv";

/// 共享状态
#[derive(Clone)]
pub struct AppState {
    pub pricer: Arc<ShipmentPricer>,
    pub lookback_days: i64,
}

/// 请求体: 待计价货物列表
#[derive(Debug, Deserialize)]
pub struct BatchPriceRequest {
    pub shipments: Vec<Shipment>,
}

/// 响应体
#[derive(Debug, Serialize)]
pub struct BatchPriceResponse {
    pub success: bool,
    pub message: String,
    pub stats: Option<PricingStats>,
    pub results: Option<Vec<PriceResult>>,
}

/// 对比报表查询参数: 逗号分隔的 ABO, 为空时按回看天数筛选
#[derive(Debug, Default, Deserialize)]
pub struct ComparisonQuery {
    #[serde(default)]
    pub abos: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

fn error_response(status: StatusCode, message: String) -> Response {
    let body = ErrorResponse {
        success: false,
        message,
    };
    (status, Json(body)).into_response()
}

/// 健康检查
pub async fn health_check() -> &'static str {
    "OK"
}

/// 批量计价接口
pub async fn price_batch(State(state): State<AppState>, Json(req): Json<BatchPriceRequest>) -> Response {
    let results = state.pricer.price_batch(&req.shipments);
    let stats = PricingStats::from_results(&results);

    let response = BatchPriceResponse {
        success: true,
        message: format!(
            "Priced {}/{} shipments ({} by distributor) with rate card {}",
            stats.priced_by_matrix + stats.priced_by_distributor,
            stats.total,
            stats.priced_by_distributor,
            state.pricer.card_version()
        ),
        stats: Some(stats),
        results: Some(results),
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// 花费报表 CSV -> 运费对比 CSV
pub async fn comparison_report(
    State(state): State<AppState>,
    Query(query): Query<ComparisonQuery>,
    body: String,
) -> Response {
    let shipments = match report::load_spend_report(body.as_bytes()) {
        Ok(s) => s,
        Err(e) => {
            tracing::warn!("Spend report rejected: {}", e);
            return error_response(StatusCode::BAD_REQUEST, format!("Error: {}", e));
        }
    };

    let selection = Selection::from_input(&query.abos, Local::now().date_naive(), state.lookback_days);
    let selected = report::select(shipments, &selection);
    if selected.shipments.is_empty() {
        return error_response(
            StatusCode::NOT_FOUND,
            "No orders found for this period or ABO selection.".to_string(),
        );
    }

    let results = state.pricer.price_batch(&selected.shipments);
    let csv = match report::comparison_csv(&results) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!("Comparison export failed: {}", e);
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, format!("Error: {}", e));
        }
    };

    let disposition = format!("attachment; filename=\"{}\"", EXPORT_FILE_NAME);
    let mut response = (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        csv,
    )
        .into_response();

    if !selected.missing_references.is_empty() {
        if let Ok(value) = HeaderValue::from_str(&selected.missing_references.join(",")) {
            response.headers_mut().insert("x-missing-abos", value);
        }
    }
    response
}
