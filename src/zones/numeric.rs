use super::{zone_at, ZoneResolver};
use crate::models::Zone;

/// 邮编取多少位参与比较
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixWidth {
    /// 取前 N 个字符
    Digits(usize),
    /// 整个邮编作为一个整数
    Whole,
}

/// 单个分区包含的数值
#[derive(Debug, Clone, Copy)]
pub enum Membership {
    Set(&'static [u32]),
    /// 闭区间
    Ranges(&'static [(u32, u32)]),
}

impl Membership {
    pub fn contains(&self, value: u32) -> bool {
        match self {
            Membership::Set(values) => values.contains(&value),
            Membership::Ranges(ranges) => ranges.iter().any(|&(lo, hi)| lo <= value && value <= hi),
        }
    }
}

/// 数字邮编解析: 取前缀转整数, 逐个分区查成员
#[derive(Debug, Clone, Copy)]
pub struct NumericPrefixResolver {
    width: PrefixWidth,
    zones: &'static [Membership],
}

impl NumericPrefixResolver {
    pub const fn two_digits(zones: &'static [Membership]) -> Self {
        Self {
            width: PrefixWidth::Digits(2),
            zones,
        }
    }

    pub const fn whole_number(zones: &'static [Membership]) -> Self {
        Self {
            width: PrefixWidth::Whole,
            zones,
        }
    }

    /// 邮编 -> 比较用的整数; 非数字返回 None
    pub fn key(&self, identifier: &str) -> Option<u32> {
        let trimmed = identifier.trim();
        let prefix = match self.width {
            PrefixWidth::Whole => trimmed,
            PrefixWidth::Digits(n) => match trimmed.char_indices().nth(n) {
                Some((end, _)) => &trimmed[..end],
                None => trimmed,
            }
            .trim_end(),
        };

        if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        prefix.parse().ok()
    }

    /// 包含该数值的全部分区 (数据正确时最多一个)
    pub fn zones_containing(&self, key: u32) -> Vec<Zone> {
        self.zones
            .iter()
            .enumerate()
            .filter(|(_, m)| m.contains(key))
            .filter_map(|(i, _)| zone_at(i))
            .collect()
    }
}

impl ZoneResolver for NumericPrefixResolver {
    fn resolve(&self, identifier: &str) -> Option<Zone> {
        let key = self.key(identifier)?;
        let index = self.zones.iter().position(|m| m.contains(key))?;
        zone_at(index)
    }

    fn zone_count(&self) -> u8 {
        u8::try_from(self.zones.len()).unwrap_or(u8::MAX)
    }
}
