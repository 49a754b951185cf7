pub mod handlers;

pub use handlers::{comparison_report, health_check, price_batch, AppState};
