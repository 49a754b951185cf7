use super::{zone_at, ZoneResolver};
use crate::models::Zone;

/// 字母邮编解析 (英国): 取邮编开头的字母区号, 最多两个字母
#[derive(Debug, Clone, Copy)]
pub struct LetterPrefixResolver {
    zones: &'static [&'static [&'static str]],
}

impl LetterPrefixResolver {
    pub const MAX_LETTERS: usize = 2;

    pub const fn new(zones: &'static [&'static [&'static str]]) -> Self {
        Self { zones }
    }

    /// "sw1a 1aa" -> "SW", "E1 6AN" -> "E"
    pub fn area(identifier: &str) -> String {
        identifier
            .trim()
            .chars()
            .take_while(|c| c.is_ascii_alphabetic())
            .take(Self::MAX_LETTERS)
            .map(|c| c.to_ascii_uppercase())
            .collect()
    }

    pub fn zones_containing(&self, area: &str) -> Vec<Zone> {
        self.zones
            .iter()
            .enumerate()
            .filter(|(_, set)| set.iter().any(|a| *a == area))
            .filter_map(|(i, _)| zone_at(i))
            .collect()
    }

    pub fn areas(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.zones.iter().flat_map(|set| set.iter().copied())
    }
}

impl ZoneResolver for LetterPrefixResolver {
    fn resolve(&self, identifier: &str) -> Option<Zone> {
        let area = Self::area(identifier);
        if area.is_empty() {
            return None;
        }
        let index = self.zones.iter().position(|set| set.iter().any(|a| *a == area))?;
        zone_at(index)
    }

    fn zone_count(&self) -> u8 {
        u8::try_from(self.zones.len()).unwrap_or(u8::MAX)
    }
}
