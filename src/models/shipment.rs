use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 待计价的单票货物 (一行花费报表)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    pub reference: String,              // ABO / 提货单号
    pub weight_kg: f64,                 // 毛重
    pub postal_code: String,            // 邮编, 爱尔兰为郡名
    pub country_code: String,           // ISO 国家代码
    #[serde(default)]
    pub pallets: i64,                   // 托盘/件数, <= 0 视为无托盘
    #[serde(default)]
    pub invoiced: Option<BigDecimal>,   // 承运商发票金额 (不参与计价)
    #[serde(default)]
    pub booked_on: Option<NaiveDate>,
    #[serde(default)]
    pub volume_m3: Option<f64>,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country_name: String,
}

impl Shipment {
    pub fn new(
        reference: impl Into<String>,
        country_code: impl Into<String>,
        postal_code: impl Into<String>,
        weight_kg: f64,
        pallets: i64,
    ) -> Self {
        Self {
            reference: reference.into(),
            weight_kg,
            postal_code: postal_code.into(),
            country_code: country_code.into(),
            pallets,
            invoiced: None,
            booked_on: None,
            volume_m3: None,
            city: String::new(),
            country_name: String::new(),
        }
    }

    pub fn with_invoiced(mut self, amount: BigDecimal) -> Self {
        self.invoiced = Some(amount);
        self
    }

    /// 用于路由的国家代码 (去空格, 大写)
    pub fn normalized_country(&self) -> String {
        self.country_code.trim().to_ascii_uppercase()
    }

    /// "城市, 国家, 邮编"
    pub fn destination(&self) -> String {
        format!("{}, {}, {}", self.city, self.country_name, self.postal_code)
    }
}
