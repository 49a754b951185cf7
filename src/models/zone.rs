use serde::{Deserialize, Serialize};
use std::fmt;

/// 承运商分区编号 (从 1 开始, 仅在同一国家内有意义)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Zone(u8);

impl Zone {
    pub fn new(n: u8) -> Option<Self> {
        (n >= 1).then_some(Self(n))
    }

    /// 费率表列下标 (zone - 1)
    pub fn index(self) -> usize {
        usize::from(self.0) - 1
    }
}

impl TryFrom<u8> for Zone {
    type Error = String;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Zone::new(n).ok_or_else(|| format!("zone numbers start at 1, got {}", n))
    }
}

impl From<Zone> for u8 {
    fn from(zone: Zone) -> Self {
        zone.0
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 结果中展示的分区
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "zone", rename_all = "snake_case")]
pub enum ZoneLabel {
    Resolved(Zone),
    /// 单一费率国家, 没有分区
    Flat,
    /// 走分销商报价, 不看分区
    Distributor,
    Unresolved,
}

impl fmt::Display for ZoneLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoneLabel::Resolved(zone) => write!(f, "{}", zone),
            ZoneLabel::Distributor => f.write_str("N/A (Distributor)"),
            ZoneLabel::Flat | ZoneLabel::Unresolved => f.write_str("N/A"),
        }
    }
}
