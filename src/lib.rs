//! DART Corporate Registry & Financial Statement Parser
//!
//! Parses the bulk DART corporate code registry into searchable company
//! records and classifies the single-company account feed into
//! balance-sheet / income-statement / cash-flow buckets with headline
//! metrics and derived ratios.

mod error;
mod types;
pub mod registry;
pub mod index;
pub mod statement;
pub mod metrics;
pub mod ratios;
pub mod report;
pub mod snapshot;

pub use error::{DartError, Result};
pub use types::{
    ClassifiedStatement, CompanyRecord, FormattedRatios, LineItem, Metrics, Ratios,
    RawLineItem, ReportType, StatementDivision, StatementSummary,
};
pub use registry::{parse_registry, parse_registry_file};
pub use index::{CompanyIndex, IndexStats, SharedIndex, MAX_SEARCH_RESULTS};
pub use statement::{classify, parse_amount};
pub use metrics::{extract_metrics, MatchPolicy};
pub use ratios::calculate_ratios;
pub use report::{build_report, filter_by_report, FinancialReport};
pub use snapshot::{load_snapshot, save_snapshot};
