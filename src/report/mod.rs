pub mod export;
pub mod spend;

pub use export::{comparison_csv, format_currency, ComparisonRow, RATES_NOT_AVAILABLE};
pub use spend::{load_spend_report, select, Selection, SelectionOutcome, SpendRow, REQUIRED_COLUMNS};
