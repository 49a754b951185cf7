use bigdecimal::BigDecimal;
use freight_cost_comparator::models::{PriceBasis, UnpricedReason, ZoneLabel};
use freight_cost_comparator::report::{comparison_csv, load_spend_report, select, Selection};
use freight_cost_comparator::{PriceOutcome, RateCard, Shipment, ShipmentPricer, WeightTier, Zone};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::{fixture, rstest};
use std::str::FromStr;

#[fixture]
fn pricer() -> ShipmentPricer {
    ShipmentPricer::new(RateCard::builtin().unwrap()).unwrap()
}

fn dec(s: &str) -> BigDecimal {
    BigDecimal::from_str(s).unwrap()
}

#[rstest]
#[case("FR", "69001", 25.0, WeightTier::UpTo30, 1, "36.98")]
#[case("FR", "75010", 1500.0, WeightTier::UpTo2000, 6, "303.37")]
#[case("DE", "70173", 25.0, WeightTier::UpTo30, 1, "32.37")]
fn test_zoned_matrix_prices(
    pricer: ShipmentPricer,
    #[case] country: &str,
    #[case] postal: &str,
    #[case] weight: f64,
    #[case] tier: WeightTier,
    #[case] zone: u8,
    #[case] expected: &str,
) {
    let result = pricer.price(&Shipment::new("T", country, postal, weight, 0));
    assert_eq!(result.tier, Some(tier));
    assert_eq!(
        result.outcome,
        PriceOutcome::Priced {
            amount: dec(expected),
            basis: PriceBasis::Zoned(Zone::new(zone).unwrap()),
        }
    );
    assert_eq!(result.zone_label().to_string(), zone.to_string());
}

#[rstest]
fn test_flat_country(pricer: ShipmentPricer) {
    let result = pricer.price(&Shipment::new("PL1", "PL", "00-001", 120.0, 0));
    assert_eq!(result.tier, Some(WeightTier::UpTo200));
    assert_eq!(result.amount(), Some(&dec("76.54")));
    assert_eq!(result.zone_label(), ZoneLabel::Flat);
    assert_eq!(result.zone_label().to_string(), "N/A");
}

#[rstest]
fn test_distributor_pallets_take_precedence(pricer: ShipmentPricer) {
    let result = pricer.price(&Shipment::new("GB1", "gb ", "EC1A 1BB", 640.0, 3));
    assert_eq!(
        result.outcome,
        PriceOutcome::Priced {
            amount: dec("572"),
            basis: PriceBasis::Distributor,
        }
    );
    assert_eq!(result.zone_label().to_string(), "N/A (Distributor)");
}

#[rstest]
fn test_negative_pallets_mean_no_distributor_price(pricer: ShipmentPricer) {
    let shipments: Vec<Shipment> = serde_json::from_str(
        r#"[
            {"reference": "GB2", "weight_kg": 25.0, "postal_code": "EC1A 1BB", "country_code": "GB", "pallets": -1},
            {"reference": "GB3", "weight_kg": 25.0, "postal_code": "EC1A 1BB", "country_code": "GB", "pallets": 3}
        ]"#,
    )
    .unwrap();
    let results = pricer.price_batch(&shipments);

    assert_eq!(results[0].amount(), Some(&dec("46.95")));
    assert_eq!(results[0].zone_label().to_string(), "1");
    assert_eq!(results[1].amount(), Some(&dec("572")));
}

#[rstest]
fn test_unmapped_postal_prefix_is_unavailable(pricer: ShipmentPricer) {
    let result = pricer.price(&Shipment::new("FR9", "FR", "20000", 25.0, 0));
    assert!(!result.is_priced());
    assert_eq!(
        result.outcome,
        PriceOutcome::Unpriced {
            reason: UnpricedReason::UnresolvedZone {
                identifier: "20000".into()
            },
        }
    );
}

#[rstest]
fn test_unknown_irish_county_without_pallets(pricer: ShipmentPricer) {
    let result = pricer.price(&Shipment::new("IE9", "IE", "unknown-county", 25.0, 0));
    assert!(matches!(
        result.outcome,
        PriceOutcome::Unpriced {
            reason: UnpricedReason::UnresolvedZone { .. }
        }
    ));
    assert_eq!(result.zone_label(), ZoneLabel::Unresolved);
}

#[rstest]
fn test_irish_county_names_are_case_insensitive(pricer: ShipmentPricer) {
    let lower = pricer.price(&Shipment::new("IE1", "IE", "dublin", 25.0, 0));
    let upper = pricer.price(&Shipment::new("IE2", "IE", "  DUBLIN ", 25.0, 0));
    assert!(lower.is_priced());
    assert_eq!(lower.outcome, upper.outcome);
}

#[rstest]
fn test_pricing_is_idempotent(pricer: ShipmentPricer) {
    let shipment = Shipment::new("R1", "AT", "1010", 455.5, 0);
    assert_eq!(pricer.price(&shipment), pricer.price(&shipment));
}

#[rstest]
fn test_spend_report_to_comparison(pricer: ShipmentPricer) {
    let report = "Spend report\n\
Shipment Creation/Booking Date (Day);ABO;Spend in EUR;Volume (m3);Gross weight (kgs);Consignee ZIP Code;Destination;Consignee Country;Consignee Country / UN Code;Packages\n\
2025-06-02;A1;1.012,40;2,500;1.500,000;75010;Paris;FRANCE;FR;0\n\
2025-06-03;A2;600,00;1,200;640;EC1A 1BB;London;UNITED KINGDOM;GB;3\n";

    let shipments = load_spend_report(report.as_bytes()).unwrap();
    let selected = select(shipments, &Selection::References(vec!["A1".into(), "A2".into()]));
    let results = pricer.price_batch(&selected.shipments);
    let text = String::from_utf8(comparison_csv(&results).unwrap()).unwrap();

    let rows: Vec<&str> = text.lines().skip(1).collect();
    assert_eq!(
        rows,
        vec![
            "A1,2.500,1500.000,0,\"Paris, France, 75010\",6,\"€1,012.40\",€303.37,€709.03",
            "A2,1.200,640.000,3,\"London, United Kingdom, EC1A 1BB\",N/A (Distributor),€600.00,€572.00,€28.00",
        ]
    );
}

proptest! {
    #[test]
    fn prop_price_never_decreases_up_to_1000kg(a in 0.0f64..=1000.0, b in 0.0f64..=1000.0) {
        let pricer = ShipmentPricer::new(RateCard::builtin().unwrap()).unwrap();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let p_lo = pricer.price(&Shipment::new("P", "FR", "69001", lo, 0));
        let p_hi = pricer.price(&Shipment::new("P", "FR", "69001", hi, 0));
        prop_assert!(p_lo.amount().unwrap() <= p_hi.amount().unwrap());
    }

    #[test]
    fn prop_overflow_prices_grow_within_tier(w in 1000.5f64..1999.0) {
        let pricer = ShipmentPricer::new(RateCard::builtin().unwrap()).unwrap();
        let p1 = pricer.price(&Shipment::new("P", "DE", "70173", w, 0));
        let p2 = pricer.price(&Shipment::new("P", "DE", "70173", w + 1.0, 0));
        prop_assert!(p1.amount().unwrap() <= p2.amount().unwrap());
    }
}
