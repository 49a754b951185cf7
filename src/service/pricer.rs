use crate::error::{Error, RateLookupError};
use crate::models::{
    PriceBasis, PriceOutcome, PriceResult, RateCard, RateMatrix, Shipment, UnpricedReason, WeightTier,
};
use crate::service::{DistributorOverride, RateCalculator};
use crate::zones::{self, ZoneResolver};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 单个国家的分区费率路径
pub struct CountryProfile {
    resolver: Option<Box<dyn ZoneResolver>>,
    matrix: RateMatrix,
}

impl CountryProfile {
    pub fn is_flat(&self) -> bool {
        !self.matrix.is_zoned()
    }
}

/// 国家代码 -> 分区解析器 + 费率表
#[derive(Default)]
pub struct CountryRegistry {
    profiles: HashMap<String, CountryProfile>,
}

impl CountryRegistry {
    /// 用费率卡和解析器构建注册表, 同时检查数据一致性 (只告警, 不中断)
    pub fn build(card: &RateCard, resolvers: Vec<(&str, Box<dyn ZoneResolver>)>) -> Self {
        let mut resolvers: HashMap<String, Box<dyn ZoneResolver>> = resolvers
            .into_iter()
            .map(|(code, r)| (code.to_ascii_uppercase(), r))
            .collect();

        let mut profiles = HashMap::new();
        for (code, rates) in &card.countries {
            let Some(matrix) = rates.matrix.clone() else {
                continue;
            };

            let missing = matrix.missing_tiers();
            if !missing.is_empty() {
                tracing::warn!("Rate matrix for {} is missing tiers {:?}", code, missing);
            }

            let resolver = resolvers.remove(code);
            match (&resolver, matrix.min_columns()) {
                (None, Some(_)) => {
                    tracing::warn!(
                        "Country {} has a zoned rate matrix but no zone resolver, matrix pricing disabled",
                        code
                    );
                    continue;
                }
                (Some(r), Some(columns)) if usize::from(r.zone_count()) > columns => {
                    tracing::warn!(
                        "Country {}: resolver yields {} zones but rate matrix has only {} columns",
                        code,
                        r.zone_count(),
                        columns
                    );
                }
                _ => {}
            }

            profiles.insert(code.clone(), CountryProfile { resolver, matrix });
        }

        for code in resolvers.keys() {
            tracing::warn!("Zone resolver for {} has no rate matrix in this card", code);
        }

        Self { profiles }
    }

    pub fn get(&self, country: &str) -> Option<&CountryProfile> {
        self.profiles.get(country)
    }

    pub fn countries(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.profiles.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }
}

/// 批量计价统计
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingStats {
    pub total: usize,
    pub priced_by_matrix: usize,
    pub priced_by_distributor: usize,
    pub unpriced: usize,
}

impl PricingStats {
    pub fn from_results(results: &[PriceResult]) -> Self {
        let mut stats = PricingStats {
            total: results.len(),
            ..Default::default()
        };
        for r in results {
            match &r.outcome {
                PriceOutcome::Priced { basis: PriceBasis::Distributor, .. } => stats.priced_by_distributor += 1,
                PriceOutcome::Priced { .. } => stats.priced_by_matrix += 1,
                PriceOutcome::Unpriced { .. } => stats.unpriced += 1,
            }
        }
        stats
    }
}

/// 运费计价服务
///
/// 每票货物独立计价, 不保留跨票状态; 费率数据在构造时注入, 之后只读。
pub struct ShipmentPricer {
    card_version: String,
    registry: CountryRegistry,
    distributors: DistributorOverride,
}

impl ShipmentPricer {
    /// 使用内置分区解析器
    pub fn new(card: RateCard) -> Result<Self, Error> {
        Self::with_resolvers(card, zones::builtin_resolvers())
    }

    pub fn with_resolvers(card: RateCard, resolvers: Vec<(&str, Box<dyn ZoneResolver>)>) -> Result<Self, Error> {
        if card.countries.is_empty() {
            return Err(Error::EmptyRateCard);
        }

        let registry = CountryRegistry::build(&card, resolvers);
        let distributors = DistributorOverride::from_card(&card);

        tracing::info!(
            "Pricer ready: rate card {}, matrix countries {:?}, distributor countries {:?}",
            card.version,
            registry.countries(),
            distributors.countries().collect::<Vec<_>>()
        );

        Ok(Self {
            card_version: card.version,
            registry,
            distributors,
        })
    }

    pub fn card_version(&self) -> &str {
        &self.card_version
    }

    pub fn registry(&self) -> &CountryRegistry {
        &self.registry
    }

    /// 单票计价 (不会失败, 失败原因写在结果里)
    pub fn price(&self, shipment: &Shipment) -> PriceResult {
        let (tier, outcome) = match WeightTier::classify(shipment.weight_kg) {
            Ok(tier) => (Some(tier), self.price_tier(shipment, tier)),
            Err(_) => (
                None,
                PriceOutcome::Unpriced {
                    reason: UnpricedReason::InvalidWeight {
                        weight_kg: shipment.weight_kg,
                    },
                },
            ),
        };

        PriceResult {
            shipment: shipment.clone(),
            tier,
            outcome,
        }
    }

    fn price_tier(&self, shipment: &Shipment, tier: WeightTier) -> PriceOutcome {
        let country = shipment.normalized_country();

        // 1. 分销商报价优先
        if let Some(amount) = self.distributors.price(&country, shipment.pallets) {
            tracing::debug!(
                "{}: distributor price {} for {} pallets ({})",
                shipment.reference, amount, shipment.pallets, country
            );
            return PriceOutcome::Priced {
                amount,
                basis: PriceBasis::Distributor,
            };
        }

        // 2. 分区 + 费率表
        let Some(profile) = self.registry.get(&country) else {
            return PriceOutcome::Unpriced {
                reason: UnpricedReason::UnsupportedCountry { country },
            };
        };

        let zone = match &profile.resolver {
            Some(resolver) if !profile.is_flat() => match resolver.resolve(&shipment.postal_code) {
                Some(zone) => Some(zone),
                None => {
                    return PriceOutcome::Unpriced {
                        reason: UnpricedReason::UnresolvedZone {
                            identifier: shipment.postal_code.clone(),
                        },
                    };
                }
            },
            _ => None,
        };

        match RateCalculator::price(tier, zone, &profile.matrix, shipment.weight_kg) {
            Ok(amount) => {
                let basis = zone.map_or(PriceBasis::Flat, PriceBasis::Zoned);
                tracing::debug!("{}: {} {} -> {} ({:?})", shipment.reference, country, tier, amount, basis);
                PriceOutcome::Priced { amount, basis }
            }
            Err(err) => {
                self.report_table_issue(shipment, &country, &err);
                PriceOutcome::Unpriced {
                    reason: UnpricedReason::rate_unavailable(zone, &err),
                }
            }
        }
    }

    fn report_table_issue(&self, shipment: &Shipment, country: &str, err: &RateLookupError) {
        tracing::warn!(
            "Rate table {} / {}: {} (shipment {})",
            self.card_version, country, err, shipment.reference
        );
    }

    /// 批量计价; 单票失败不影响其他票, 结果顺序与输入一致
    pub fn price_batch(&self, shipments: &[Shipment]) -> Vec<PriceResult> {
        let results: Vec<PriceResult> = shipments.par_iter().map(|s| self.price(s)).collect();

        let stats = PricingStats::from_results(&results);
        tracing::info!(
            "计价完成: 总数: {}, 费率表: {}, 分销商: {}, 无报价: {}",
            stats.total, stats.priced_by_matrix, stats.priced_by_distributor, stats.unpriced
        );
        results
    }
}
