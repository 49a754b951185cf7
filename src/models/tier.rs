use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 重量档位 (左闭右开区间, 单位 kg)
///
/// 3000 kg 以上不再细分, 与 "up to 3000 kg" 共用同一档位。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WeightTier {
    #[serde(rename = "up to 30 kg")]
    UpTo30,
    #[serde(rename = "up to 50 kg")]
    UpTo50,
    #[serde(rename = "up to 100 kg")]
    UpTo100,
    #[serde(rename = "up to 200 kg")]
    UpTo200,
    #[serde(rename = "up to 300 kg")]
    UpTo300,
    #[serde(rename = "up to 400 kg")]
    UpTo400,
    #[serde(rename = "up to 500 kg")]
    UpTo500,
    #[serde(rename = "up to 600 kg")]
    UpTo600,
    #[serde(rename = "up to 700 kg")]
    UpTo700,
    #[serde(rename = "up to 800 kg")]
    UpTo800,
    #[serde(rename = "up to 900 kg")]
    UpTo900,
    #[serde(rename = "up to 1000 kg")]
    UpTo1000,
    #[serde(rename = "up to 2000 kg")]
    UpTo2000,
    #[serde(rename = "up to 3000 kg")]
    UpTo3000,
}

impl WeightTier {
    /// 所有档位, 按重量升序
    pub const ALL: [WeightTier; 14] = [
        WeightTier::UpTo30,
        WeightTier::UpTo50,
        WeightTier::UpTo100,
        WeightTier::UpTo200,
        WeightTier::UpTo300,
        WeightTier::UpTo400,
        WeightTier::UpTo500,
        WeightTier::UpTo600,
        WeightTier::UpTo700,
        WeightTier::UpTo800,
        WeightTier::UpTo900,
        WeightTier::UpTo1000,
        WeightTier::UpTo2000,
        WeightTier::UpTo3000,
    ];

    /// 将重量映射到档位 (边界值归入更高档位)
    ///
    /// 负数或非有限值返回 `Error::InvalidWeight`。
    pub fn classify(weight: f64) -> Result<Self, Error> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(Error::InvalidWeight(weight));
        }

        let tier = Self::ALL
            .iter()
            .copied()
            .find(|t| weight < t.upper_bound_kg())
            .unwrap_or(WeightTier::UpTo3000);
        Ok(tier)
    }

    /// 档位下界 (含)
    pub fn lower_bound_kg(self) -> f64 {
        match self {
            WeightTier::UpTo30 => 0.0,
            WeightTier::UpTo50 => 30.0,
            WeightTier::UpTo100 => 50.0,
            WeightTier::UpTo200 => 100.0,
            WeightTier::UpTo300 => 200.0,
            WeightTier::UpTo400 => 300.0,
            WeightTier::UpTo500 => 400.0,
            WeightTier::UpTo600 => 500.0,
            WeightTier::UpTo700 => 600.0,
            WeightTier::UpTo800 => 700.0,
            WeightTier::UpTo900 => 800.0,
            WeightTier::UpTo1000 => 900.0,
            WeightTier::UpTo2000 => 1000.0,
            WeightTier::UpTo3000 => 2000.0,
        }
    }

    /// 档位上界 (不含); 最高档位没有上界
    pub fn upper_bound_kg(self) -> f64 {
        match self {
            WeightTier::UpTo30 => 30.0,
            WeightTier::UpTo50 => 50.0,
            WeightTier::UpTo100 => 100.0,
            WeightTier::UpTo200 => 200.0,
            WeightTier::UpTo300 => 300.0,
            WeightTier::UpTo400 => 400.0,
            WeightTier::UpTo500 => 500.0,
            WeightTier::UpTo600 => 600.0,
            WeightTier::UpTo700 => 700.0,
            WeightTier::UpTo800 => 800.0,
            WeightTier::UpTo900 => 900.0,
            WeightTier::UpTo1000 => 1000.0,
            WeightTier::UpTo2000 => 2000.0,
            WeightTier::UpTo3000 => f64::INFINITY,
        }
    }

    /// 超重档位: 费率表中存的是每 100 kg 的增量单价, 而不是绝对价格
    pub fn is_overflow(self) -> bool {
        matches!(self, WeightTier::UpTo2000 | WeightTier::UpTo3000)
    }

    pub fn label(self) -> &'static str {
        match self {
            WeightTier::UpTo30 => "up to 30 kg",
            WeightTier::UpTo50 => "up to 50 kg",
            WeightTier::UpTo100 => "up to 100 kg",
            WeightTier::UpTo200 => "up to 200 kg",
            WeightTier::UpTo300 => "up to 300 kg",
            WeightTier::UpTo400 => "up to 400 kg",
            WeightTier::UpTo500 => "up to 500 kg",
            WeightTier::UpTo600 => "up to 600 kg",
            WeightTier::UpTo700 => "up to 700 kg",
            WeightTier::UpTo800 => "up to 800 kg",
            WeightTier::UpTo900 => "up to 900 kg",
            WeightTier::UpTo1000 => "up to 1000 kg",
            WeightTier::UpTo2000 => "up to 2000 kg",
            WeightTier::UpTo3000 => "up to 3000 kg",
        }
    }
}

impl fmt::Display for WeightTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, WeightTier::UpTo30)]
    #[case(29.99, WeightTier::UpTo30)]
    #[case(30.0, WeightTier::UpTo50)]
    #[case(99.5, WeightTier::UpTo100)]
    #[case(120.0, WeightTier::UpTo200)]
    #[case(999.999, WeightTier::UpTo1000)]
    #[case(1000.0, WeightTier::UpTo2000)]
    #[case(1999.0, WeightTier::UpTo2000)]
    #[case(2000.0, WeightTier::UpTo3000)]
    #[case(2999.0, WeightTier::UpTo3000)]
    #[case(3000.0, WeightTier::UpTo3000)]
    #[case(12_500.0, WeightTier::UpTo3000)]
    fn test_classify_boundaries(#[case] weight: f64, #[case] expected: WeightTier) {
        assert_eq!(WeightTier::classify(weight).unwrap(), expected);
    }

    #[rstest]
    #[case(-0.01)]
    #[case(-500.0)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn test_classify_rejects_invalid_weight(#[case] weight: f64) {
        assert!(matches!(WeightTier::classify(weight), Err(Error::InvalidWeight(_))));
    }

    #[test]
    fn test_tiers_are_contiguous_and_increasing() {
        for pair in WeightTier::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert_eq!(pair[0].upper_bound_kg(), pair[1].lower_bound_kg());
        }
        assert_eq!(WeightTier::ALL[0].lower_bound_kg(), 0.0);
    }

    #[test]
    fn test_labels_match_serde_names() {
        for tier in WeightTier::ALL {
            let json = serde_json::to_string(&tier).unwrap();
            assert_eq!(json, format!("\"{}\"", tier.label()));
        }
    }

    proptest! {
        #[test]
        fn classify_lands_inside_its_interval(weight in 0.0f64..50_000.0) {
            let tier = WeightTier::classify(weight).unwrap();
            prop_assert!(weight >= tier.lower_bound_kg());
            prop_assert!(weight < tier.upper_bound_kg());
            let hits = WeightTier::ALL
                .iter()
                .filter(|t| weight >= t.lower_bound_kg() && weight < t.upper_bound_kg())
                .count();
            prop_assert_eq!(hits, 1);
        }
    }
}
