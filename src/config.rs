use crate::error::Error;
use crate::models::RateCard;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub rates: RatesConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RatesConfig {
    /// 费率卡文件; 未配置时使用内置费率卡
    #[serde(default)]
    pub card_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// 未指定 ABO 时回看的天数
    pub lookback_days: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            rates: RatesConfig::default(),
            report: ReportConfig { lookback_days: 60 },
        }
    }
}

impl AppConfig {
    /// 加载顺序: 默认值 -> freight.toml (可选) -> FREIGHT__* 环境变量
    pub fn from_env() -> Result<Self, Error> {
        Self::load(config::Environment::with_prefix("FREIGHT").separator("__"))
    }

    fn load(env: config::Environment) -> Result<Self, Error> {
        let defaults = AppConfig::default();
        let settings = config::Config::builder()
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("report.lookback_days", defaults.report.lookback_days)?
            .add_source(config::File::with_name("freight").required(false))
            .add_source(env)
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// 按配置加载费率卡
    pub fn load_rate_card(&self) -> Result<RateCard, Error> {
        match &self.rates.card_path {
            Some(path) => RateCard::from_path(path),
            None => RateCard::builtin(),
        }
    }
}
