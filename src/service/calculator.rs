use crate::error::RateLookupError;
use crate::models::{PriceEntry, RateMatrix, WeightTier, Zone};
use bigdecimal::BigDecimal;

/// 超重档位的计费步长 (kg)
const OVERFLOW_STEP_KG: f64 = 100.0;

/// 费率计算 (档位 + 分区 + 费率表 -> 价格), 纯函数
pub struct RateCalculator;

impl RateCalculator {
    /// 计算单票运费
    ///
    /// # 规则
    /// - 普通档位: 直接取 `matrix[tier][zone - 1]` (单一费率国家取标量)
    /// - "up to 2000 kg" / "up to 3000 kg": 表中为每 100 kg 的增量单价,
    ///   价格 = 1000 kg 档位价格 + ceil((重量 - 档位下界) / 100) × 增量单价。
    ///   两个超重档位都以 1000 kg 档位为基价, 不是上一个档位。
    pub fn price(
        tier: WeightTier,
        zone: Option<Zone>,
        matrix: &RateMatrix,
        weight_kg: f64,
    ) -> Result<BigDecimal, RateLookupError> {
        if !tier.is_overflow() {
            return Self::lookup(matrix, tier, zone).cloned();
        }

        let base = Self::lookup(matrix, WeightTier::UpTo1000, zone)?;
        let step_rate = Self::lookup(matrix, tier, zone)?;
        let increments = Self::increments(weight_kg, tier.lower_bound_kg());

        Ok(base + step_rate * BigDecimal::from(increments))
    }

    /// 超出档位下界的 100 kg 步数 (向上取整)
    pub fn increments(weight_kg: f64, origin_kg: f64) -> u64 {
        let remainder = (weight_kg - origin_kg).max(0.0);
        (remainder / OVERFLOW_STEP_KG).ceil() as u64
    }

    fn lookup<'a>(
        matrix: &'a RateMatrix,
        tier: WeightTier,
        zone: Option<Zone>,
    ) -> Result<&'a BigDecimal, RateLookupError> {
        match matrix.entry(tier) {
            None => Err(RateLookupError::MissingTier(tier)),
            Some(PriceEntry::Flat(price)) => Ok(price),
            Some(PriceEntry::Zoned(prices)) => {
                let zone = zone.ok_or(RateLookupError::ZoneRequired(tier))?;
                prices.get(zone.index()).ok_or(RateLookupError::ZoneOutOfBounds {
                    tier,
                    zone,
                    len: prices.len(),
                })
            }
        }
    }
}
