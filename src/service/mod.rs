pub mod calculator;
pub mod distributor;
pub mod pricer;

pub use calculator::RateCalculator;
pub use distributor::DistributorOverride;
pub use pricer::{CountryProfile, CountryRegistry, PricingStats, ShipmentPricer};
