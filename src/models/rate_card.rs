use crate::error::Error;
use crate::models::WeightTier;
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// 编译期内置的费率卡
const BUILTIN_RATE_CARD: &str = include_str!("../../rates/rate_card.json");

/// 费率卡 - 启动时加载一次, 之后只读
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateCard {
    pub version: String,
    pub currency: String,
    pub countries: BTreeMap<String, CountryRates>,
}

/// 单个国家的费率
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CountryRates {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matrix: Option<RateMatrix>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distributor: Option<DistributorTable>,
}

/// 重量档位 -> 价格
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RateMatrix {
    entries: BTreeMap<WeightTier, PriceEntry>,
}

/// 费率表单元: 单一价格 (不分区国家) 或按分区排列的价格序列 (下标 = zone - 1)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceEntry {
    Flat(BigDecimal),
    Zoned(Vec<BigDecimal>),
}

/// 分销商托盘报价
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributorTable {
    /// 1-6 托盘的固定价, 允许缺项
    pub standard: BTreeMap<u32, BigDecimal>,
    /// 7-14 托盘的每托盘单价
    pub mid_rate: BigDecimal,
    /// 15 托盘及以上的每托盘单价
    pub high_rate: BigDecimal,
}

impl RateCard {
    /// 内置费率卡
    pub fn builtin() -> Result<Self, Error> {
        Self::from_json(BUILTIN_RATE_CARD)
    }

    pub fn from_json(json: &str) -> Result<Self, Error> {
        let card: RateCard = serde_json::from_str(json)?;
        if card.countries.is_empty() {
            return Err(Error::EmptyRateCard);
        }
        Ok(card)
    }

    /// 从文件加载 (例如年度合同更新后的新费率卡)
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let card = Self::from_json(&raw)?;
        tracing::info!(
            "Loaded rate card {} ({} countries) from {}",
            card.version,
            card.countries.len(),
            path.as_ref().display()
        );
        Ok(card)
    }

    pub fn country(&self, code: &str) -> Option<&CountryRates> {
        self.countries.get(code)
    }
}

impl RateMatrix {
    pub fn new(entries: BTreeMap<WeightTier, PriceEntry>) -> Self {
        Self { entries }
    }

    pub fn entry(&self, tier: WeightTier) -> Option<&PriceEntry> {
        self.entries.get(&tier)
    }

    pub fn is_zoned(&self) -> bool {
        self.entries.values().any(|e| matches!(e, PriceEntry::Zoned(_)))
    }

    /// 所有分区序列中最短的长度
    pub fn min_columns(&self) -> Option<usize> {
        self.entries
            .values()
            .filter_map(|e| match e {
                PriceEntry::Zoned(prices) => Some(prices.len()),
                PriceEntry::Flat(_) => None,
            })
            .min()
    }

    /// 缺失的档位
    pub fn missing_tiers(&self) -> Vec<WeightTier> {
        WeightTier::ALL
            .iter()
            .copied()
            .filter(|t| !self.entries.contains_key(t))
            .collect()
    }
}
