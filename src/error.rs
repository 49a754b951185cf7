use crate::models::{WeightTier, Zone};
use thiserror::Error;

/// Result 类型别名
pub type Result<T> = std::result::Result<T, Error>;

/// 启动/配置阶段错误 (单票计价不会返回此类错误)
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid weight: {0} kg")]
    InvalidWeight(f64),

    #[error("rate card contains no countries")]
    EmptyRateCard,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("rate card JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("spend report is missing column '{0}'")]
    MissingColumn(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
}

/// 费率表查找失败 - 只在单票内部使用, 最终折叠为 UnpricedReason
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RateLookupError {
    #[error("no rate entry for tier '{0}'")]
    MissingTier(WeightTier),

    #[error("zone {zone} outside table bounds for tier '{tier}' ({len} columns)")]
    ZoneOutOfBounds { tier: WeightTier, zone: Zone, len: usize },

    #[error("tier '{0}' is zoned but no zone was resolved")]
    ZoneRequired(WeightTier),
}
