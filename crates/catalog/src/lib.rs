//! `imprint-catalog` — ISBN pool tracking and consumption forecasting.

pub mod burn;
pub mod isbn;

pub use burn::{IsbnBurnReport, PoolSummary, burn_report, pool_summary};
pub use isbn::{Isbn, IsbnId, IsbnStatus};
