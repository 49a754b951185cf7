pub mod rate_card;
pub mod result;
pub mod shipment;
pub mod tier;
pub mod zone;

pub use rate_card::{CountryRates, DistributorTable, PriceEntry, RateCard, RateMatrix};
pub use result::{PriceBasis, PriceOutcome, PriceResult, UnpricedReason};
pub use shipment::Shipment;
pub use tier::WeightTier;
pub use zone::{Zone, ZoneLabel};
