//! 承运商分区表
//!
//! 数字国家按邮编前两位 (爱沙尼亚按完整五位邮编), 英国按字母区号, 爱尔兰按郡名。
//! 没有列出的前缀一律视为无法分区。

use super::{LetterPrefixResolver, Membership, NumericPrefixResolver, RegionNameResolver, RegionPrecedence};

/// France: 邮编前两位
pub const FRANCE: NumericPrefixResolver = NumericPrefixResolver::two_digits(&[
    // zone 1
    Membership::Set(&[69]),
    // zone 2
    Membership::Set(&[38, 42]),
    // zone 3
    Membership::Set(&[1, 3, 4, 5, 7, 13, 21, 25, 26, 30, 34, 39, 43, 48, 58, 63, 71, 73, 74, 84]),
    // zone 4
    Membership::Set(&[6, 11, 12, 15, 19, 23, 24, 46, 66, 68, 70, 81, 83, 90]),
    // zone 5
    Membership::Set(&[9, 16, 17, 22, 31, 32, 33, 47, 56, 65, 67, 82, 85]),
    // zone 6
    Membership::Set(&[75, 91, 92, 94]),
    // zone 7
    Membership::Set(&[77, 78, 93, 95]),
    // zone 8
    Membership::Set(&[2, 10, 27, 28, 41, 45, 51, 60, 76, 80, 89]),
    // zone 9
    Membership::Set(&[40, 64]),
    // zone 10
    Membership::Set(&[8, 14, 18, 36, 37, 52, 53, 55, 59, 61, 62, 72]),
    // zone 11
    Membership::Set(&[35, 44, 49, 50, 54, 57, 79, 86, 87, 88]),
    // zone 12
    Membership::Set(&[29]),
]);

/// Belgium: 邮编前两位
pub const BELGIUM: NumericPrefixResolver = NumericPrefixResolver::two_digits(&[
    // zone 1
    Membership::Ranges(&[(10, 13), (16, 19), (21, 22), (25, 26), (28, 28), (30, 31)]),
    // zone 2
    Membership::Ranges(&[
        (14, 15), (20, 20), (23, 24), (29, 29), (32, 39),
        (42, 46), (50, 53), (60, 62), (70, 72), (90, 99),
    ]),
    // zone 3
    Membership::Ranges(&[(40, 41), (47, 49), (55, 56), (64, 66), (68, 69), (73, 73), (75, 89)]),
    // zone 4
    Membership::Ranges(&[(67, 67)]),
]);

/// Czechia: 邮编前两位
pub const CZECHIA: NumericPrefixResolver = NumericPrefixResolver::two_digits(&[
    // zone 1
    Membership::Set(&[10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 25, 27]),
    // zone 2
    Membership::Set(&[26, 28, 29, 30, 31, 32, 33, 41, 43, 44, 47]),
    // zone 3
    Membership::Set(&[60, 61, 62, 63, 64, 66]),
    // zone 4
    Membership::Set(&[34, 35, 36, 37, 38, 39, 40, 46, 50, 51, 53, 54, 55, 58]),
    // zone 5
    Membership::Set(&[56, 57, 59, 67, 68, 69, 77]),
    // zone 6
    Membership::Set(&[70, 71, 72, 73, 74, 75, 76, 78, 79]),
]);

/// Denmark: 邮编前两位
pub const DENMARK: NumericPrefixResolver = NumericPrefixResolver::two_digits(&[
    // zone 1
    Membership::Set(&[60, 70, 72, 73, 87]),
    // zone 2
    Membership::Set(&[51, 52, 54, 55, 56, 61, 65, 66, 67, 68, 69, 71, 74, 80, 81, 82, 83, 86, 88]),
    // zone 3
    Membership::Set(&[
        49, 50, 53, 57, 58, 59, 62, 63, 64, 75, 76, 77, 78, 79, 84, 85, 89, 90, 91, 92, 95, 96,
    ]),
    // zone 4
    Membership::Set(&[93, 94, 97, 98, 99]),
    // zone 5
    Membership::Set(&[
        10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 34, 35,
        36, 40, 43,
    ]),
    // zone 6
    Membership::Set(&[30, 31, 32, 33, 41, 42, 44, 45, 46, 47]),
    // zone 7
    Membership::Set(&[48]),
]);

/// Finland: 邮编前两位
pub const FINLAND: NumericPrefixResolver = NumericPrefixResolver::two_digits(&[
    // zone 1
    Membership::Set(&[0, 2, 8, 9]),
    // zone 2
    Membership::Set(&[3, 7, 10, 11, 12, 13, 14]),
    // zone 3
    Membership::Set(&[
        15, 16, 17, 18, 19, 20, 21, 24, 25, 30, 31, 32, 33, 36, 37, 45, 46, 47, 48, 49,
    ]),
    // zone 4
    Membership::Set(&[23, 26, 27, 28, 29, 34, 35, 38, 39, 40, 41, 42, 50, 51, 52, 53, 54, 55, 56]),
    // zone 5
    Membership::Set(&[43, 44, 57, 58, 59, 60, 61, 62, 63, 64, 76, 77, 78, 79]),
    // zone 6
    Membership::Set(&[65, 66, 68, 69, 70, 71, 72, 73, 74, 80, 82, 83]),
    // zone 7
    Membership::Set(&[22, 67, 75, 81, 84, 85, 86, 87, 88, 89, 90, 91, 92]),
    // zone 8
    Membership::Set(&[93, 94, 95, 96, 97, 98]),
    // zone 9
    Membership::Set(&[99]),
]);

/// Germany: 邮编前两位
pub const GERMANY: NumericPrefixResolver = NumericPrefixResolver::two_digits(&[
    // zone 1
    Membership::Set(&[70, 71, 72, 73, 74, 75, 76, 86, 88, 89, 97]),
    // zone 2
    Membership::Set(&[44, 45, 51, 55, 56, 57, 58, 60, 61, 65, 78]),
    // zone 3
    Membership::Set(&[40, 42, 47, 48, 52, 53, 54, 59, 77, 79, 85]),
    // zone 4
    Membership::Set(&[32, 33, 49, 63, 64, 66, 67, 68, 69]),
    // zone 5
    Membership::Set(&[34, 41, 46, 50, 80, 81, 82, 84, 87, 90, 91, 92, 93]),
    // zone 6
    Membership::Set(&[7, 36, 37, 83]),
    // zone 7
    Membership::Set(&[9, 30, 31, 35, 96]),
    // zone 8
    Membership::Set(&[26, 27, 28, 99]),
    // zone 9
    Membership::Set(&[1, 4, 6, 8, 29, 38, 95, 98]),
    // zone 10
    Membership::Set(&[2, 3, 20, 21, 22, 39, 94]),
    // zone 11
    Membership::Set(&[10, 12, 13, 14, 15, 23, 25]),
    // zone 12
    Membership::Set(&[16, 17, 18, 19, 24]),
]);

/// Netherlands: 邮编前两位
pub const NETHERLANDS: NumericPrefixResolver = NumericPrefixResolver::two_digits(&[
    // zone 1
    Membership::Ranges(&[(65, 70), (73, 73)]),
    // zone 2
    Membership::Set(&[
        12, 13, 34, 35, 36, 37, 38, 39, 40, 41, 52, 53, 54, 58, 71, 72, 74, 80, 81, 82,
    ]),
    // zone 3
    Membership::Set(&[
        10, 11, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32, 33,
        42, 46, 47, 48, 49, 50, 51, 55, 56, 57, 59, 60, 61, 62, 63, 64, 75, 76, 77, 78, 79, 83,
        84, 85, 86, 87, 88, 89, 90, 91, 92, 93, 94, 95, 96, 97, 98,
    ]),
    // zone 4
    Membership::Set(&[43, 44, 45, 99]),
]);

/// Austria: 邮编前两位
pub const AUSTRIA: NumericPrefixResolver = NumericPrefixResolver::two_digits(&[
    // zone 1
    Membership::Set(&[50, 51, 52, 53, 54]),
    // zone 2
    Membership::Set(&[46, 48, 49, 55, 56, 57, 58]),
    // zone 3
    Membership::Set(&[10, 11, 12, 13, 21, 22, 23, 34]),
    // zone 4
    Membership::Set(&[20, 24, 25, 27, 30, 31, 35, 37, 70, 71, 72]),
    // zone 5
    Membership::Set(&[33, 40, 41, 42, 43, 44, 45, 47, 60, 61, 62, 63, 88, 89, 95, 97, 98]),
    // zone 6
    Membership::Set(&[80, 84, 85]),
    // zone 7
    Membership::Set(&[64, 65, 66, 96, 99]),
    // zone 8
    Membership::Set(&[75, 76, 81, 82, 83]),
    // zone 9
    Membership::Set(&[67, 68, 69]),
    // zone 10
    Membership::Set(&[26, 28, 32, 36, 38, 39, 73, 74, 86]),
    // zone 11
    Membership::Set(&[29, 87, 90, 91, 92, 93, 94]),
    // zone 12
    Membership::Set(&[14]),
]);

/// Switzerland: 邮编前两位
pub const SWITZERLAND: NumericPrefixResolver = NumericPrefixResolver::two_digits(&[
    // zone 1
    Membership::Set(&[28, 29, 40, 41, 42, 43, 44, 46, 50, 52]),
    // zone 2
    Membership::Set(&[51, 53, 54, 55, 56, 80, 81, 82, 83, 84, 86, 89]),
    // zone 3
    Membership::Set(&[25, 27, 30, 33, 34, 45, 47, 48, 49, 57, 61, 62]),
    // zone 4
    Membership::Set(&[60, 63, 64, 85, 87, 88, 90, 91, 92, 93, 95, 96]),
    // zone 5
    Membership::Set(&[
        10, 13, 14, 15, 16, 17, 18, 20, 21, 22, 23, 24, 26, 31, 32, 35, 36, 37, 38, 73, 94, 97,
    ]),
    // zone 6
    Membership::Set(&[65, 67, 70, 71, 72, 74]),
    // zone 7
    Membership::Set(&[11, 12, 19, 39, 66, 68, 69, 75, 76]),
    // zone 8
    Membership::Set(&[77]),
]);

/// Croatia: 邮编前两位
pub const CROATIA: NumericPrefixResolver = NumericPrefixResolver::two_digits(&[
    // zone 1
    Membership::Set(&[10]),
    // zone 2
    Membership::Set(&[42, 44, 47, 49]),
    // zone 3
    Membership::Set(&[33, 34, 40, 43, 48, 51, 53]),
    // zone 4
    Membership::Set(&[23, 31, 32, 35, 52]),
    // zone 5
    Membership::Set(&[22]),
    // zone 6
    Membership::Set(&[21]),
    // zone 7
    Membership::Set(&[20]),
]);

/// Estonia: 完整五位邮编
pub const ESTONIA: NumericPrefixResolver = NumericPrefixResolver::whole_number(&[
    // zone 1
    Membership::Ranges(&[(10000, 13999), (15000, 15000), (74000, 76999)]),
    // zone 2
    Membership::Ranges(&[(45000, 45000), (72000, 73999), (78000, 79999)]),
    // zone 3
    Membership::Ranges(&[
        (29000, 32999), (40000, 44999), (46000, 46000), (48000, 51999), (60000, 61999),
        (69000, 71999), (80000, 80000), (85000, 88999), (90000, 92999), (94000, 94999),
    ]),
    // zone 4
    Membership::Ranges(&[(20000, 21999), (62000, 68999), (93000, 93999)]),
]);

/// United Kingdom: 邮编字母区号
pub const UNITED_KINGDOM: LetterPrefixResolver = LetterPrefixResolver::new(&[
    // zone 1
    &[
        "BR", "CM", "DA", "DE", "E", "EC", "IG", "KT", "LE", "ME", "N", "NG", "NW", "RM", "S",
        "SE", "SM", "SS",
    ],
    // zone 2
    &[
        "AL", "B", "CO", "CR", "CT", "CV", "CW", "DY", "EN", "GU", "HA", "HP", "LU", "NN", "PE",
        "RG", "RH", "SG", "SK", "SL", "ST", "SW", "TF", "TN", "TW", "UB", "W", "WC", "WD", "WS",
        "WV",
    ],
    // zone 3
    &[
        "BA", "BB", "BD", "BL", "BN", "BS", "CB", "CH", "DN", "GL", "HD", "HR", "HU", "HX", "IP",
        "L", "LD", "LN", "LS", "M", "MK", "NR", "OL", "OX", "PO", "PR", "SN", "SO", "SP", "SY",
        "WA", "WF", "WN", "WR", "YO",
    ],
    // zone 4
    &["BH", "CF", "DH", "DL", "DT", "FY", "HG", "NP", "SR", "TS"],
    // zone 5
    &["LL", "NE", "TA"],
    // zone 6
    &["EX", "LA", "SA", "TQ"],
    // zone 7
    &["BT", "CA", "DG", "EH", "FK", "G", "KA", "KY", "ML", "PL", "TD", "TR"],
    // zone 8
    &["AB", "DD", "IV", "PA", "PH"],
]);

/// Ireland: 郡名
///
/// meath 和 wicklow 在承运商数据中同时属于 1 区和 2 区, 保持原样, 取较低分区。
pub const IRELAND: RegionNameResolver = RegionNameResolver::new(
    &[
        // zone 1
        &["dublin", "meath", "wicklow"],
        // zone 2
        &["kildare", "louth", "meath", "wicklow"],
        // zone 3
        &[
            "carlow", "cavan", "kilkenny", "laoighis", "longford", "monaghan", "offaly",
            "roscommon", "tipperary", "westmeath", "wexford",
        ],
        // zone 4
        &["clare", "donegal", "galway", "leitrim", "limerick", "sligo", "waterford"],
        // zone 5
        &["cork", "kerry", "mayo"],
    ],
    RegionPrecedence::LowestZone,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Zone;
    use crate::zones::ZoneResolver;
    use rstest::rstest;

    const TWO_DIGIT: [(&str, NumericPrefixResolver); 10] = [
        ("AT", AUSTRIA),
        ("BE", BELGIUM),
        ("CH", SWITZERLAND),
        ("CZ", CZECHIA),
        ("DE", GERMANY),
        ("DK", DENMARK),
        ("FI", FINLAND),
        ("FR", FRANCE),
        ("HR", CROATIA),
        ("NL", NETHERLANDS),
    ];

    #[test]
    fn test_two_digit_prefixes_are_disjoint() {
        for (code, resolver) in TWO_DIGIT {
            for prefix in 0..100 {
                let zones = resolver.zones_containing(prefix);
                assert!(zones.len() <= 1, "{} prefix {:02} in zones {:?}", code, prefix, zones);
            }
        }
    }

    #[test]
    fn test_estonia_ranges_are_disjoint() {
        for zip in 0..100_000 {
            assert!(ESTONIA.zones_containing(zip).len() <= 1, "EE {} overlaps", zip);
        }
    }

    #[test]
    fn test_uk_areas_are_disjoint() {
        for area in UNITED_KINGDOM.areas() {
            assert_eq!(UNITED_KINGDOM.zones_containing(area).len(), 1, "GB area {}", area);
        }
    }

    #[test]
    fn test_every_zone_is_reachable() {
        for (code, resolver) in TWO_DIGIT {
            let mut seen: Vec<Zone> = (0..100).filter_map(|p| resolver.zones_containing(p).first().copied()).collect();
            seen.sort();
            seen.dedup();
            assert_eq!(seen.len(), usize::from(resolver.zone_count()), "{}", code);
        }
    }

    #[test]
    fn test_ireland_known_overlap() {
        let ambiguous: Vec<&str> = IRELAND.ambiguous_names().into_iter().map(|(name, _)| name).collect();
        assert_eq!(ambiguous, vec!["meath", "wicklow"]);
        assert_eq!(IRELAND.resolve("Wicklow"), Zone::new(1));
        assert_eq!(IRELAND.resolve("Kildare"), Zone::new(2));
    }

    #[rstest]
    #[case(FRANCE, "69001", Some(1))]
    #[case(FRANCE, "75010", Some(6))]
    #[case(FRANCE, "29200", Some(12))]
    #[case(FRANCE, "20000", None)]
    #[case(FRANCE, "2A004", None)]
    #[case(BELGIUM, "1000", Some(1))]
    #[case(BELGIUM, "6700", Some(4))]
    #[case(BELGIUM, "5400", None)]
    #[case(GERMANY, "01067", Some(9))]
    #[case(GERMANY, " 80331", Some(5))]
    #[case(NETHERLANDS, "7300", Some(1))]
    #[case(NETHERLANDS, "0999", None)]
    #[case(FINLAND, "00100", Some(1))]
    #[case(CROATIA, "10000", Some(1))]
    #[case(CROATIA, "60000", None)]
    fn test_numeric_spot_checks(
        #[case] resolver: NumericPrefixResolver,
        #[case] zip: &str,
        #[case] expected: Option<u8>,
    ) {
        assert_eq!(resolver.resolve(zip), expected.and_then(Zone::new));
    }

    #[rstest]
    #[case("10115", Some(1))]
    #[case("15000", Some(1))]
    #[case("15001", None)]
    #[case("45000", Some(2))]
    #[case("93500", Some(4))]
    #[case("EE-10115", None)]
    fn test_estonia_spot_checks(#[case] zip: &str, #[case] expected: Option<u8>) {
        assert_eq!(ESTONIA.resolve(zip), expected.and_then(Zone::new));
    }

    #[rstest]
    #[case("EC1A 1BB", Some(1))]
    #[case("B33 8TH", Some(2))]
    #[case("M1 1AE", Some(3))]
    #[case("AB10 1XG", Some(8))]
    #[case("ZE1 0AA", None)]
    fn test_uk_spot_checks(#[case] postcode: &str, #[case] expected: Option<u8>) {
        assert_eq!(UNITED_KINGDOM.resolve(postcode), expected.and_then(Zone::new));
    }
}
