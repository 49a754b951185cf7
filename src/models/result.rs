use crate::error::RateLookupError;
use crate::models::{Shipment, WeightTier, Zone, ZoneLabel};
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 单票计价结果 (构造后不可变)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceResult {
    pub shipment: Shipment,
    pub tier: Option<WeightTier>,
    pub outcome: PriceOutcome,
}

/// 计价结论
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PriceOutcome {
    Priced { amount: BigDecimal, basis: PriceBasis },
    Unpriced { reason: UnpricedReason },
}

/// 价格来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "zone", rename_all = "snake_case")]
pub enum PriceBasis {
    Distributor,
    Zoned(Zone),
    Flat,
}

/// 无法计价的原因
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UnpricedReason {
    InvalidWeight { weight_kg: f64 },
    UnsupportedCountry { country: String },
    UnresolvedZone { identifier: String },
    RateUnavailable { zone: Option<Zone>, detail: String },
}

impl UnpricedReason {
    pub fn rate_unavailable(zone: Option<Zone>, err: &RateLookupError) -> Self {
        UnpricedReason::RateUnavailable {
            zone,
            detail: err.to_string(),
        }
    }
}

impl fmt::Display for UnpricedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnpricedReason::InvalidWeight { weight_kg } => write!(f, "invalid weight {} kg", weight_kg),
            UnpricedReason::UnsupportedCountry { country } => write!(f, "no rates for country '{}'", country),
            UnpricedReason::UnresolvedZone { identifier } => write!(f, "no zone for '{}'", identifier),
            UnpricedReason::RateUnavailable { detail, .. } => f.write_str(detail),
        }
    }
}

impl PriceResult {
    pub fn amount(&self) -> Option<&BigDecimal> {
        match &self.outcome {
            PriceOutcome::Priced { amount, .. } => Some(amount),
            PriceOutcome::Unpriced { .. } => None,
        }
    }

    pub fn is_priced(&self) -> bool {
        matches!(self.outcome, PriceOutcome::Priced { .. })
    }

    pub fn zone_label(&self) -> ZoneLabel {
        match &self.outcome {
            PriceOutcome::Priced { basis: PriceBasis::Distributor, .. } => ZoneLabel::Distributor,
            PriceOutcome::Priced { basis: PriceBasis::Zoned(zone), .. } => ZoneLabel::Resolved(*zone),
            PriceOutcome::Priced { basis: PriceBasis::Flat, .. } => ZoneLabel::Flat,
            PriceOutcome::Unpriced {
                reason: UnpricedReason::RateUnavailable { zone: Some(zone), .. },
            } => ZoneLabel::Resolved(*zone),
            PriceOutcome::Unpriced { .. } => ZoneLabel::Unresolved,
        }
    }

    /// 发票金额 - 计算金额 (两者都有时)
    pub fn difference(&self) -> Option<BigDecimal> {
        let invoiced = self.shipment.invoiced.as_ref()?;
        let computed = self.amount()?;
        Some(invoiced - computed)
    }
}
