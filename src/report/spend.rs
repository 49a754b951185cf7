use crate::error::Error;
use crate::models::Shipment;
use bigdecimal::BigDecimal;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use indexmap::IndexSet;
use serde::Deserialize;
use std::io::Read;
use std::str::FromStr;

/// 花费报表原始行 (承运商导出, 分号分隔)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpendRow {
    #[serde(rename = "Shipment Creation/Booking Date (Day)")]
    pub booking_date: String,
    #[serde(rename = "ABO")]
    pub abo: String,
    #[serde(rename = "Spend in EUR")]
    pub spend_eur: String,
    #[serde(rename = "Volume (m3)")]
    pub volume_m3: String,
    #[serde(rename = "Gross weight (kgs)")]
    pub gross_weight_kg: String,
    #[serde(rename = "Consignee ZIP Code")]
    pub zip_code: String,
    #[serde(rename = "Destination")]
    pub destination: String,
    #[serde(rename = "Consignee Country")]
    pub country: String,
    #[serde(rename = "Consignee Country / UN Code")]
    pub country_code: String,
    #[serde(rename = "Packages")]
    pub packages: String,
}

/// 报表必须包含的列
pub const REQUIRED_COLUMNS: [&str; 10] = [
    "Shipment Creation/Booking Date (Day)",
    "ABO",
    "Spend in EUR",
    "Volume (m3)",
    "Gross weight (kgs)",
    "Consignee ZIP Code",
    "Destination",
    "Consignee Country",
    "Consignee Country / UN Code",
    "Packages",
];

const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%d/%m/%Y", "%d.%m.%Y", "%d-%m-%Y"];

/// "1.234,5" -> "1234.5" (点为千分位, 逗号为小数点)
pub fn normalize_locale_number(raw: &str) -> Option<String> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != '.').collect();
    let cleaned = cleaned.replace(',', ".");
    if cleaned.is_empty() {
        return None;
    }
    Some(cleaned)
}

pub fn parse_locale_f64(raw: &str) -> Option<f64> {
    normalize_locale_number(raw)?.parse::<f64>().ok().filter(|v| v.is_finite())
}

pub fn parse_locale_decimal(raw: &str) -> Option<BigDecimal> {
    BigDecimal::from_str(&normalize_locale_number(raw)?).ok()
}

/// 件数解析失败按 0 处理
pub fn parse_packages(raw: &str) -> i64 {
    match parse_locale_f64(raw) {
        Some(v) if v >= 0.0 && v <= f64::from(u32::MAX) => v.trunc() as i64,
        _ => 0,
    }
}

pub fn parse_booking_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        })
}

/// "UNITED KINGDOM" -> "United Kingdom"
pub fn title_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut prev_alpha = false;
    for c in raw.trim().chars() {
        if prev_alpha {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_alpha = c.is_alphabetic();
    }
    out
}

impl SpendRow {
    /// 转为待计价货物; 重量无法解析时返回 None
    pub fn into_shipment(self) -> Option<Shipment> {
        let weight_kg = parse_locale_f64(&self.gross_weight_kg)?;
        Some(Shipment {
            reference: self.abo.trim().to_string(),
            weight_kg,
            postal_code: self.zip_code.trim().to_string(),
            country_code: self.country_code.trim().to_ascii_uppercase(),
            pallets: parse_packages(&self.packages),
            invoiced: parse_locale_decimal(&self.spend_eur),
            booked_on: parse_booking_date(&self.booking_date),
            volume_m3: parse_locale_f64(&self.volume_m3),
            city: self.destination.trim().to_string(),
            country_name: title_case(&self.country),
        })
    }
}

/// 读取花费报表: 第一行为标题说明, 第二行才是表头
pub fn load_spend_report<R: Read>(mut reader: R) -> Result<Vec<Shipment>, Error> {
    let mut raw = String::new();
    reader.read_to_string(&mut raw)?;
    let raw = raw.trim_start_matches('\u{feff}');
    let body = raw.split_once('\n').map(|(_, rest)| rest).unwrap_or("");

    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(body.as_bytes());

    let headers = csv_reader.headers()?.clone();
    if let Some(missing) = REQUIRED_COLUMNS.iter().find(|col| !headers.iter().any(|h| h == **col)) {
        return Err(Error::MissingColumn(missing.to_string()));
    }

    let mut shipments = Vec::new();
    for (idx, row) in csv_reader.deserialize::<SpendRow>().enumerate() {
        let row = row?;
        let abo = row.abo.clone();
        match row.into_shipment() {
            Some(s) => shipments.push(s),
            None => tracing::warn!("Row {} ({}) has no usable gross weight, skipping", idx + 1, abo),
        }
    }

    tracing::info!("Loaded {} shipments from spend report", shipments.len());
    Ok(shipments)
}

/// 选择要对比的货物
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// 指定 ABO 列表
    References(Vec<String>),
    /// 某日期 (含) 之后下单的全部货物
    BookedSince(NaiveDate),
}

impl Selection {
    /// 输入为空时回退到最近 `lookback_days` 天
    pub fn from_input(raw: &str, today: NaiveDate, lookback_days: i64) -> Self {
        let refs = parse_references(raw);
        if refs.is_empty() {
            Selection::BookedSince(today - Duration::days(lookback_days))
        } else {
            Selection::References(refs)
        }
    }
}

/// "a250254, A250255,,a250254" -> ["A250254", "A250255"]
pub fn parse_references(raw: &str) -> Vec<String> {
    let refs: IndexSet<String> = raw
        .split(',')
        .map(|s| s.trim().to_uppercase())
        .filter(|s| !s.is_empty())
        .collect();
    refs.into_iter().collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectionOutcome {
    pub shipments: Vec<Shipment>,
    pub missing_references: Vec<String>,
}

pub fn select(shipments: Vec<Shipment>, selection: &Selection) -> SelectionOutcome {
    match selection {
        Selection::References(refs) => {
            let known: IndexSet<String> = shipments.iter().map(|s| s.reference.to_uppercase()).collect();
            let missing_references: Vec<String> = refs.iter().filter(|r| !known.contains(*r)).cloned().collect();
            if !missing_references.is_empty() {
                tracing::warn!("ABO not found: {}", missing_references.join(", "));
            }

            let shipments = shipments
                .into_iter()
                .filter(|s| refs.contains(&s.reference.to_uppercase()))
                .collect();
            SelectionOutcome {
                shipments,
                missing_references,
            }
        }
        Selection::BookedSince(since) => {
            let shipments = shipments
                .into_iter()
                .filter(|s| s.booked_on.is_some_and(|d| d >= *since))
                .collect();
            SelectionOutcome {
                shipments,
                missing_references: Vec::new(),
            }
        }
    }
}
