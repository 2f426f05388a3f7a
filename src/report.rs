//! Full statement pipeline
//!
//! One invocation per statement request: classify, extract metrics,
//! derive ratios. Re-entrant, no shared state.

use crate::metrics::extract_metrics;
use crate::ratios::calculate_ratios;
use crate::statement::classify;
use crate::types::{
    FormattedRatios, LineItem, Metrics, RawLineItem, ReportType, StatementSummary,
};
use serde::{Deserialize, Serialize};

/// The complete pipeline output re-exposed by the serving layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FinancialReport {
    pub summary: StatementSummary,
    pub balance_sheet: Vec<LineItem>,
    pub income_statement: Vec<LineItem>,
    pub cash_flow: Vec<LineItem>,
    pub metrics: Metrics,
    pub ratios: FormattedRatios,
}

/// Keep only rows belonging to the given periodic report.
///
/// Rows without a report code pass through; a feed fetched for a single
/// report carries none or all of them.
pub fn filter_by_report(items: &[RawLineItem], report: ReportType) -> Vec<RawLineItem> {
    items
        .iter()
        .filter(|i| i.reprt_code.is_empty() || i.reprt_code == report.code())
        .cloned()
        .collect()
}

/// Run the full pipeline over a raw account feed.
pub fn build_report(items: &[RawLineItem]) -> FinancialReport {
    let classified = classify(items);
    let metrics = extract_metrics(&classified);
    let ratios = calculate_ratios(&metrics);

    FinancialReport {
        summary: classified.summary,
        balance_sheet: classified.balance_sheet,
        income_statement: classified.income_statement,
        cash_flow: classified.cash_flow,
        metrics,
        ratios: ratios.formatted(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(account: &str, div: &str, amount: &str) -> RawLineItem {
        RawLineItem {
            rcept_no: "20240312000123".into(),
            bsns_year: "2023".into(),
            account_nm: account.into(),
            sj_div: div.into(),
            thstrm_amount: amount.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_build_report() {
        let items = vec![
            raw("자산총계", "BS", "1,000"),
            raw("부채총계", "BS", "400"),
            raw("자본총계", "BS", "600"),
            raw("매출액", "IS", "200"),
            raw("당기순이익", "IS", "20"),
            raw("영업활동현금흐름", "CF", "55"),
        ];
        let report = build_report(&items);

        assert_eq!(report.summary.total_items, 6);
        assert_eq!(report.summary.bsns_year, "2023");
        assert_eq!(report.balance_sheet.len(), 3);
        assert_eq!(report.income_statement.len(), 2);
        assert_eq!(report.cash_flow.len(), 1);
        assert_eq!(report.metrics.total_assets, 1000.0);
        assert_eq!(report.ratios.debt_ratio, "40.00");
        assert_eq!(report.ratios.net_profit_margin, "10.00");
    }

    #[test]
    fn test_empty_feed_report() {
        let report = build_report(&[]);
        assert_eq!(report.summary.total_items, 0);
        assert_eq!(report.metrics, Metrics::default());
        assert_eq!(report.ratios.roe, "0.00");
    }

    #[test]
    fn test_filter_by_report() {
        let mut annual = raw("자산총계", "BS", "100");
        annual.reprt_code = "11011".into();
        let mut half = raw("자산총계", "BS", "200");
        half.reprt_code = "11012".into();
        let untagged = raw("매출액", "IS", "50");

        let items = vec![annual, half, untagged];

        let kept = filter_by_report(&items, ReportType::resolve("사업보고서"));
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].reprt_code, "11011");
        assert_eq!(kept[1].reprt_code, "");

        let kept = filter_by_report(&items, ReportType::HalfYear);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].reprt_code, "11012");

        let report = build_report(&filter_by_report(&items, ReportType::Annual));
        assert_eq!(report.metrics.total_assets, 100.0);
    }

    #[test]
    fn test_report_serializes() {
        let report = build_report(&[raw("자산총계", "BS", "100")]);
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"balance_sheet\""));
        assert!(json.contains("\"ratios\""));
    }
}
