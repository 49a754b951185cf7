use crate::models::{DistributorTable, RateCard};
use bigdecimal::BigDecimal;
use std::collections::BTreeMap;

/// 7-14 托盘按中档单价计费
const MID_RANGE: std::ops::RangeInclusive<i64> = 7..=14;
/// 15 托盘起按整车单价计费
const HIGH_FROM: i64 = 15;

/// 分销商托盘报价 - 存在时优先于分区费率表
#[derive(Debug, Clone, Default)]
pub struct DistributorOverride {
    tables: BTreeMap<String, DistributorTable>,
}

impl DistributorOverride {
    /// 从费率卡中提取所有分销商报价
    pub fn from_card(card: &RateCard) -> Self {
        let tables = card
            .countries
            .iter()
            .filter_map(|(code, rates)| rates.distributor.clone().map(|t| (code.clone(), t)))
            .collect();
        Self { tables }
    }

    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    /// 国家 + 托盘数 -> 报价; 不在名单内或托盘数无报价时返回 None
    pub fn price(&self, country: &str, pallets: i64) -> Option<BigDecimal> {
        let table = self.tables.get(country)?;
        Self::quote(table, pallets)
    }

    /// # 规则
    /// - 0 或负数托盘: 无报价
    /// - 1-6 托盘: 查固定价表, 缺项视为无报价 (不是 0)
    /// - 7-14 托盘: 托盘数 × mid_rate
    /// - 15+ 托盘: 托盘数 × high_rate
    pub fn quote(table: &DistributorTable, pallets: i64) -> Option<BigDecimal> {
        match pallets {
            n if n <= 0 => None,
            n if MID_RANGE.contains(&n) => Some(&table.mid_rate * BigDecimal::from(n)),
            n if n >= HIGH_FROM => Some(&table.high_rate * BigDecimal::from(n)),
            n => u32::try_from(n).ok().and_then(|n| table.standard.get(&n)).cloned(),
        }
    }
}
