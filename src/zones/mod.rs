//! 各国分区解析
//!
//! 每个国家一种解析策略: 邮编数字前缀、整段邮编数值、字母前缀或地区名。
//! 找不到分区时返回 `None`, 由上层折叠为 "无法计价"。

pub mod letters;
pub mod numeric;
pub mod region;
pub mod tables;

pub use letters::LetterPrefixResolver;
pub use numeric::{Membership, NumericPrefixResolver, PrefixWidth};
pub use region::{RegionNameResolver, RegionPrecedence};

use crate::models::Zone;

/// 分区解析策略
pub trait ZoneResolver: Send + Sync {
    /// 邮编/地区名 -> 分区; 无法识别时返回 None (不报错)
    fn resolve(&self, identifier: &str) -> Option<Zone>;

    /// 该国最大分区号
    fn zone_count(&self) -> u8;
}

/// 下标 (从 0 开始) -> 分区
pub(crate) fn zone_at(index: usize) -> Option<Zone> {
    u8::try_from(index + 1).ok().and_then(Zone::new)
}

fn boxed<R: ZoneResolver + 'static>(resolver: R) -> Box<dyn ZoneResolver> {
    Box::new(resolver)
}

/// 内置的国家 -> 分区解析器 (波兰为单一费率, 不需要解析器)
pub fn builtin_resolvers() -> Vec<(&'static str, Box<dyn ZoneResolver>)> {
    vec![
        ("AT", boxed(tables::AUSTRIA)),
        ("BE", boxed(tables::BELGIUM)),
        ("CH", boxed(tables::SWITZERLAND)),
        ("CZ", boxed(tables::CZECHIA)),
        ("DE", boxed(tables::GERMANY)),
        ("DK", boxed(tables::DENMARK)),
        ("EE", boxed(tables::ESTONIA)),
        ("FI", boxed(tables::FINLAND)),
        ("FR", boxed(tables::FRANCE)),
        ("GB", boxed(tables::UNITED_KINGDOM)),
        ("HR", boxed(tables::CROATIA)),
        ("IE", boxed(tables::IRELAND)),
        ("NL", boxed(tables::NETHERLANDS)),
    ]
}
