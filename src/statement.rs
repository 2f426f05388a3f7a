//! Financial statement classification
//!
//! Takes the raw single-company account feed and buckets rows by statement
//! division while normalizing every amount field to a finite number.

use crate::types::{
    ClassifiedStatement, LineItem, RawLineItem, StatementDivision, StatementSummary,
};
use log::debug;

/// Normalize a locale-formatted amount string.
///
/// Grouping commas are stripped before the parse. Empty or unparsable
/// input maps to exactly 0.0 so downstream sums and comparisons never
/// null-check.
pub fn parse_amount(raw: &str) -> f64 {
    let cleaned = raw.trim().replace(',', "");
    if cleaned.is_empty() {
        return 0.0;
    }
    match cleaned.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

fn normalize(raw: &RawLineItem, division: StatementDivision) -> LineItem {
    LineItem {
        account_nm: raw.account_nm.clone(),
        division,
        sj_nm: raw.sj_nm.clone(),
        fs_div: raw.fs_div.clone(),
        fs_nm: raw.fs_nm.clone(),
        thstrm_nm: raw.thstrm_nm.clone(),
        thstrm_dt: raw.thstrm_dt.clone(),
        thstrm_amount: parse_amount(&raw.thstrm_amount),
        frmtrm_nm: raw.frmtrm_nm.clone(),
        frmtrm_dt: raw.frmtrm_dt.clone(),
        frmtrm_amount: parse_amount(&raw.frmtrm_amount),
        bfefrmtrm_nm: raw.bfefrmtrm_nm.clone(),
        bfefrmtrm_dt: raw.bfefrmtrm_dt.clone(),
        bfefrmtrm_amount: parse_amount(&raw.bfefrmtrm_amount),
        ord: raw.ord.clone(),
        currency: raw.currency.clone(),
    }
}

/// Classify a raw account feed into the three statement buckets.
///
/// Rows keep their relative order within each bucket. A row whose
/// `sj_div` is not one of BS/IS/CF is dropped silently; this is the
/// documented behavior, not a defect. The summary header comes from the
/// first row and defaults to empty fields on an empty feed.
pub fn classify(items: &[RawLineItem]) -> ClassifiedStatement {
    let summary = match items.first() {
        Some(first) => StatementSummary {
            total_items: items.len(),
            rcept_no: first.rcept_no.clone(),
            bsns_year: first.bsns_year.clone(),
            stock_code: first.stock_code.clone(),
            reprt_code: first.reprt_code.clone(),
        },
        None => StatementSummary::default(),
    };

    let mut out = ClassifiedStatement {
        summary,
        ..Default::default()
    };

    for raw in items {
        match StatementDivision::from_code(&raw.sj_div) {
            Some(StatementDivision::Bs) => {
                out.balance_sheet.push(normalize(raw, StatementDivision::Bs))
            }
            Some(StatementDivision::Is) => {
                out.income_statement.push(normalize(raw, StatementDivision::Is))
            }
            Some(StatementDivision::Cf) => {
                out.cash_flow.push(normalize(raw, StatementDivision::Cf))
            }
            None => debug!("dropping row with unknown sj_div {:?}", raw.sj_div),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(account: &str, div: &str, amount: &str) -> RawLineItem {
        RawLineItem {
            rcept_no: "20240312000123".into(),
            bsns_year: "2023".into(),
            stock_code: "005930".into(),
            reprt_code: "11011".into(),
            account_nm: account.into(),
            sj_div: div.into(),
            thstrm_amount: amount.into(),
            currency: "KRW".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1,234,567"), 1234567.0);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("-500"), -500.0);
        assert_eq!(parse_amount("  7,000 "), 7000.0);
        assert_eq!(parse_amount("1234.56"), 1234.56);
    }

    #[test]
    fn test_bucket_assignment() {
        let items = vec![
            raw("자산총계", "BS", "100"),
            raw("매출액", "IS", "50"),
            raw("영업활동현금흐름", "CF", "30"),
            raw("유동자산", "BS", "60"),
        ];
        let classified = classify(&items);
        assert_eq!(classified.balance_sheet.len(), 2);
        assert_eq!(classified.income_statement.len(), 1);
        assert_eq!(classified.cash_flow.len(), 1);
        // Order inside a bucket follows feed order.
        assert_eq!(classified.balance_sheet[0].account_nm, "자산총계");
        assert_eq!(classified.balance_sheet[1].account_nm, "유동자산");
    }

    #[test]
    fn test_unknown_division_dropped_silently() {
        let items = vec![
            raw("자산총계", "BS", "100"),
            raw("알수없음", "XX", "999"),
            raw("매출액", "IS", "50"),
        ];
        let classified = classify(&items);
        assert_eq!(classified.balance_sheet.len(), 1);
        assert_eq!(classified.income_statement.len(), 1);
        assert!(classified.cash_flow.is_empty());
        // The dropped row still counts toward the feed total.
        assert_eq!(classified.summary.total_items, 3);
    }

    #[test]
    fn test_summary_from_first_item() {
        let items = vec![raw("자산총계", "BS", "100")];
        let classified = classify(&items);
        assert_eq!(classified.summary.rcept_no, "20240312000123");
        assert_eq!(classified.summary.bsns_year, "2023");
        assert_eq!(classified.summary.stock_code, "005930");
        assert_eq!(classified.summary.reprt_code, "11011");
    }

    #[test]
    fn test_empty_feed_defaults() {
        let classified = classify(&[]);
        assert_eq!(classified.summary.total_items, 0);
        assert_eq!(classified.summary.rcept_no, "");
        assert!(classified.balance_sheet.is_empty());
        assert!(classified.income_statement.is_empty());
        assert!(classified.cash_flow.is_empty());
    }

    #[test]
    fn test_classification_is_idempotent() {
        let items = vec![
            raw("자산총계", "BS", "1,000"),
            raw("매출액", "IS", "2,000"),
            raw("영업활동현금흐름", "CF", "300"),
        ];
        let first = classify(&items);

        // Feed the classified buckets back through, division-tagged.
        let refed: Vec<RawLineItem> = first
            .balance_sheet
            .iter()
            .chain(&first.income_statement)
            .chain(&first.cash_flow)
            .map(|item| RawLineItem {
                account_nm: item.account_nm.clone(),
                sj_div: item.division.as_code().into(),
                thstrm_amount: item.thstrm_amount.to_string(),
                ..Default::default()
            })
            .collect();
        let second = classify(&refed);

        assert_eq!(second.balance_sheet.len(), first.balance_sheet.len());
        assert_eq!(second.income_statement.len(), first.income_statement.len());
        assert_eq!(second.cash_flow.len(), first.cash_flow.len());
        assert_eq!(second.balance_sheet[0].thstrm_amount, 1000.0);
    }
}
