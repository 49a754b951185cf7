use crate::error::Error;
use crate::models::PriceResult;
use bigdecimal::BigDecimal;
use serde::Serialize;

pub const RATES_NOT_AVAILABLE: &str = "Rates not available";

/// 对比表一行
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    #[serde(rename = "ABO")]
    pub abo: String,
    #[serde(rename = "Volume (m3)")]
    pub volume_m3: String,
    #[serde(rename = "Gross weight (kgs)")]
    pub gross_weight_kg: String,
    #[serde(rename = "Packages")]
    pub packages: String,
    #[serde(rename = "Destination")]
    pub destination: String,
    #[serde(rename = "Zone")]
    pub zone: String,
    #[serde(rename = "KN Invoice Price (€)")]
    pub invoiced: String,
    #[serde(rename = "Calculated Price (€)")]
    pub calculated: String,
    #[serde(rename = "Difference (€)")]
    pub difference: String,
}

impl From<&PriceResult> for ComparisonRow {
    fn from(result: &PriceResult) -> Self {
        let shipment = &result.shipment;
        Self {
            abo: shipment.reference.clone(),
            volume_m3: shipment
                .volume_m3
                .map(|v| format!("{:.3}", v))
                .unwrap_or_default(),
            gross_weight_kg: format!("{:.3}", shipment.weight_kg),
            packages: shipment.pallets.to_string(),
            destination: shipment.destination(),
            zone: result.zone_label().to_string(),
            invoiced: shipment
                .invoiced
                .as_ref()
                .map(format_currency)
                .unwrap_or_else(|| "N/A".to_string()),
            calculated: result
                .amount()
                .map(format_currency)
                .unwrap_or_else(|| RATES_NOT_AVAILABLE.to_string()),
            difference: result
                .difference()
                .map(|d| format_currency(&d))
                .unwrap_or_default(),
        }
    }
}

/// 1234.5 -> "€1,234.50"
pub fn format_currency(amount: &BigDecimal) -> String {
    let fixed = amount.round(2).with_scale(2).to_string();
    let (sign, digits) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("€{}{}.{}", sign, grouped, frac_part)
}

/// 生成对比 CSV (UTF-8 BOM, 方便 Excel 直接打开)
pub fn comparison_csv(results: &[PriceResult]) -> Result<Vec<u8>, Error> {
    let mut writer = csv::Writer::from_writer("\u{feff}".as_bytes().to_vec());
    for result in results {
        writer.serialize(ComparisonRow::from(result))?;
    }
    writer.flush()?;
    writer.into_inner().map_err(|e| Error::Io(e.into_error()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PriceBasis, PriceOutcome, Shipment, UnpricedReason, WeightTier, Zone};
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    #[case("0", "€0.00")]
    #[case("36.98", "€36.98")]
    #[case("572", "€572.00")]
    #[case("1234.5", "€1,234.50")]
    #[case("1012345.678", "€1,012,345.68")]
    #[case("-3.02", "€-3.02")]
    #[case("-1500", "€-1,500.00")]
    fn test_format_currency(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(format_currency(&BigDecimal::from_str(raw).unwrap()), expected);
    }

    #[test]
    fn test_comparison_csv() {
        let mut paris = Shipment::new("A250254", "FR", "75010", 1500.0, 0)
            .with_invoiced(BigDecimal::from_str("310.00").unwrap());
        paris.city = "Paris".into();
        paris.country_name = "France".into();
        paris.volume_m3 = Some(2.5);

        let results = vec![
            PriceResult {
                shipment: paris,
                tier: Some(WeightTier::UpTo2000),
                outcome: PriceOutcome::Priced {
                    amount: BigDecimal::from_str("303.37").unwrap(),
                    basis: PriceBasis::Zoned(Zone::new(6).unwrap()),
                },
            },
            PriceResult {
                shipment: Shipment::new("A250256", "FR", "2A004", 25.0, 0),
                tier: Some(WeightTier::UpTo30),
                outcome: PriceOutcome::Unpriced {
                    reason: UnpricedReason::UnresolvedZone { identifier: "2A004".into() },
                },
            },
        ];

        let bytes = comparison_csv(&results).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let mut lines = text.lines();

        assert_eq!(
            lines.next(),
            Some("\u{feff}ABO,Volume (m3),Gross weight (kgs),Packages,Destination,Zone,KN Invoice Price (€),Calculated Price (€),Difference (€)")
        );
        assert_eq!(
            lines.next(),
            Some("A250254,2.500,1500.000,0,\"Paris, France, 75010\",6,€310.00,€303.37,€6.63")
        );
        assert_eq!(
            lines.next(),
            Some("A250256,,25.000,0,\", , 2A004\",N/A,N/A,Rates not available,")
        );
    }
}
