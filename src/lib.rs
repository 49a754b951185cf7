pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod service;
pub mod zones;

pub use config::AppConfig;
pub use error::{Error, Result};
pub use models::{PriceOutcome, PriceResult, RateCard, Shipment, WeightTier, Zone};
pub use service::ShipmentPricer;
