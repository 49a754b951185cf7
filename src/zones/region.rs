use super::{zone_at, ZoneResolver};
use crate::models::Zone;

/// 地区名同时出现在多个分区时取哪个
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionPrecedence {
    LowestZone,
    HighestZone,
}

/// 按地区名解析 (爱尔兰按郡名)
///
/// 承运商数据里个别郡名同时列在两个分区中, 这里保留原始数据不去重,
/// 由 `precedence` 决定取哪个分区。
#[derive(Debug, Clone, Copy)]
pub struct RegionNameResolver {
    zones: &'static [&'static [&'static str]],
    precedence: RegionPrecedence,
}

impl RegionNameResolver {
    pub const fn new(zones: &'static [&'static [&'static str]], precedence: RegionPrecedence) -> Self {
        Self { zones, precedence }
    }

    pub const fn with_precedence(self, precedence: RegionPrecedence) -> Self {
        Self {
            zones: self.zones,
            precedence,
        }
    }

    pub fn precedence(&self) -> RegionPrecedence {
        self.precedence
    }

    pub fn normalize(identifier: &str) -> String {
        identifier.trim().to_lowercase()
    }

    pub fn zones_containing(&self, name: &str) -> Vec<Zone> {
        let name = Self::normalize(name);
        self.zones
            .iter()
            .enumerate()
            .filter(|(_, set)| set.iter().any(|n| *n == name))
            .filter_map(|(i, _)| zone_at(i))
            .collect()
    }

    /// 出现在多个分区里的地区名
    pub fn ambiguous_names(&self) -> Vec<(&'static str, Vec<Zone>)> {
        let mut seen: Vec<&'static str> = Vec::new();
        let mut out = Vec::new();
        for name in self.zones.iter().flat_map(|set| set.iter().copied()) {
            if seen.contains(&name) {
                continue;
            }
            seen.push(name);
            let zones = self.zones_containing(name);
            if zones.len() > 1 {
                out.push((name, zones));
            }
        }
        out
    }
}

impl ZoneResolver for RegionNameResolver {
    fn resolve(&self, identifier: &str) -> Option<Zone> {
        let candidates = self.zones_containing(identifier);
        let picked = match self.precedence {
            RegionPrecedence::LowestZone => candidates.iter().min().copied(),
            RegionPrecedence::HighestZone => candidates.iter().max().copied(),
        };

        if candidates.len() > 1 {
            tracing::debug!(
                "Region '{}' listed in zones {:?}, using {:?} ({:?})",
                identifier.trim(),
                candidates,
                picked,
                self.precedence
            );
        }
        picked
    }

    fn zone_count(&self) -> u8 {
        u8::try_from(self.zones.len()).unwrap_or(u8::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: RegionNameResolver = RegionNameResolver::new(
        &[&["dublin", "meath"], &["kildare", "meath"], &["cork"]],
        RegionPrecedence::LowestZone,
    );

    #[test]
    fn test_normalized_lookup() {
        assert_eq!(SAMPLE.resolve("  Dublin "), Zone::new(1));
        assert_eq!(SAMPLE.resolve("CORK"), Zone::new(3));
        assert_eq!(SAMPLE.resolve("unknown-county"), None);
    }

    #[test]
    fn test_overlap_follows_precedence() {
        assert_eq!(SAMPLE.resolve("Meath"), Zone::new(1));
        let highest = SAMPLE.with_precedence(RegionPrecedence::HighestZone);
        assert_eq!(highest.resolve("Meath"), Zone::new(2));
    }

    #[test]
    fn test_ambiguous_names_are_reported() {
        let ambiguous = SAMPLE.ambiguous_names();
        assert_eq!(ambiguous, vec![("meath", vec![Zone::new(1).unwrap(), Zone::new(2).unwrap()])]);
    }
}
