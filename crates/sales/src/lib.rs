//! `imprint-sales` — sale records and revenue grouping.

pub mod report;
pub mod sale;

pub use report::{
    DEFAULT_PAGE_SIZE, SalesGroupBy, SalesGroupRow, SalesReport, SalesReportParams, SalesTotals,
    sales_report,
};
pub use sale::{Sale, SaleFormat, SaleId, SalesChannel};
