//! Type definitions for registry records and financial statement data

use serde::{Deserialize, Serialize};

/// One company entry from the bulk DART corporate code registry.
///
/// Field names serialize to the registry's wire names, so snapshots written
/// by this crate deserialize rows exactly as the upstream XML tags them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRecord {
    /// Unique 8-digit DART corporate code (primary key).
    #[serde(rename = "corp_code", default)]
    pub corp_code: String,

    /// Registered company name.
    #[serde(rename = "corp_name", default)]
    pub corp_name: String,

    /// English name; empty when the registry omits it.
    #[serde(rename = "corp_eng_name", default)]
    pub corp_eng_name: String,

    /// KRX ticker; blank for unlisted companies.
    #[serde(rename = "stock_code", default)]
    pub stock_code: String,

    /// Last modification date of the registry entry (YYYYMMDD).
    #[serde(rename = "modify_date", default)]
    pub modify_date: String,
}

impl CompanyRecord {
    /// A company is listed iff its stock code is non-blank.
    pub fn is_listed(&self) -> bool {
        !self.stock_code.trim().is_empty()
    }
}

/// Statement division tag carried by every financial line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatementDivision {
    /// Balance sheet (재무상태표)
    Bs,
    /// Income statement (손익계산서)
    Is,
    /// Cash flow statement (현금흐름표)
    Cf,
}

impl StatementDivision {
    /// Map an upstream `sj_div` code; unknown codes yield `None` and the
    /// carrying item is dropped by the classifier.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "BS" => Some(StatementDivision::Bs),
            "IS" => Some(StatementDivision::Is),
            "CF" => Some(StatementDivision::Cf),
            _ => None,
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            StatementDivision::Bs => "BS",
            StatementDivision::Is => "IS",
            StatementDivision::Cf => "CF",
        }
    }
}

/// The four periodic DART report types and their fixed report codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportType {
    FirstQuarter,
    HalfYear,
    ThirdQuarter,
    #[default]
    Annual,
}

impl ReportType {
    /// Fixed `reprt_code` string understood by the upstream data source.
    pub fn code(&self) -> &'static str {
        match self {
            ReportType::FirstQuarter => "11013",
            ReportType::HalfYear => "11012",
            ReportType::ThirdQuarter => "11014",
            ReportType::Annual => "11011",
        }
    }

    /// Resolve a report code or Korean report name. Anything unrecognized
    /// falls back to the annual report, matching the upstream default.
    pub fn resolve(input: &str) -> Self {
        match input {
            "11013" | "1분기보고서" => ReportType::FirstQuarter,
            "11012" | "반기보고서" => ReportType::HalfYear,
            "11014" | "3분기보고서" => ReportType::ThirdQuarter,
            "11011" | "사업보고서" => ReportType::Annual,
            _ => ReportType::Annual,
        }
    }
}

/// One raw row of the upstream single-company account feed, amounts still in
/// their locale-formatted string form. Field names match the wire payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawLineItem {
    #[serde(default)]
    pub rcept_no: String,
    #[serde(default)]
    pub bsns_year: String,
    #[serde(default)]
    pub stock_code: String,
    #[serde(default)]
    pub reprt_code: String,
    #[serde(default)]
    pub account_nm: String,
    #[serde(default)]
    pub fs_div: String,
    #[serde(default)]
    pub fs_nm: String,
    #[serde(default)]
    pub sj_div: String,
    #[serde(default)]
    pub sj_nm: String,
    #[serde(default)]
    pub thstrm_nm: String,
    #[serde(default)]
    pub thstrm_dt: String,
    #[serde(default)]
    pub thstrm_amount: String,
    #[serde(default)]
    pub frmtrm_nm: String,
    #[serde(default)]
    pub frmtrm_dt: String,
    #[serde(default)]
    pub frmtrm_amount: String,
    #[serde(default)]
    pub bfefrmtrm_nm: String,
    #[serde(default)]
    pub bfefrmtrm_dt: String,
    #[serde(default)]
    pub bfefrmtrm_amount: String,
    #[serde(default)]
    pub ord: String,
    #[serde(default)]
    pub currency: String,
}

/// A normalized financial line item. Amount fields are always finite
/// numbers; unparsable source strings normalize to zero so downstream
/// arithmetic never null-checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    pub account_nm: String,
    pub division: StatementDivision,
    pub sj_nm: String,
    pub fs_div: String,
    pub fs_nm: String,
    pub thstrm_nm: String,
    pub thstrm_dt: String,
    pub thstrm_amount: f64,
    pub frmtrm_nm: String,
    pub frmtrm_dt: String,
    pub frmtrm_amount: f64,
    pub bfefrmtrm_nm: String,
    pub bfefrmtrm_dt: String,
    pub bfefrmtrm_amount: f64,
    pub ord: String,
    pub currency: String,
}

/// Summary header of a classified statement, taken from the first row of
/// the feed. All fields are empty when the feed is empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatementSummary {
    pub total_items: usize,
    pub rcept_no: String,
    pub bsns_year: String,
    pub stock_code: String,
    pub reprt_code: String,
}

/// Line items bucketed by statement division, in feed order per bucket.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassifiedStatement {
    pub summary: StatementSummary,
    pub balance_sheet: Vec<LineItem>,
    pub income_statement: Vec<LineItem>,
    pub cash_flow: Vec<LineItem>,
}

/// Headline account figures pulled from a classified statement.
/// Every field defaults to zero when no account matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub total_assets: f64,
    pub total_liabilities: f64,
    pub total_equity: f64,
    pub revenue: f64,
    pub operating_income: f64,
    pub net_income: f64,
    pub current_assets: f64,
    pub non_current_assets: f64,
    pub current_liabilities: f64,
    pub non_current_liabilities: f64,
}

/// Derived financial ratios, full floating-point precision.
/// Use [`Ratios::formatted`] for the external two-decimal representation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Ratios {
    pub debt_ratio: f64,
    pub equity_ratio: f64,
    pub net_profit_margin: f64,
    pub operating_profit_margin: f64,
    pub roe: f64,
}

/// Externally visible ratio representation: percentages rendered to two
/// decimal places.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedRatios {
    pub debt_ratio: String,
    pub equity_ratio: String,
    pub net_profit_margin: String,
    pub operating_profit_margin: String,
    pub roe: String,
}

impl Ratios {
    pub fn formatted(&self) -> FormattedRatios {
        FormattedRatios {
            debt_ratio: format!("{:.2}", self.debt_ratio),
            equity_ratio: format!("{:.2}", self.equity_ratio),
            net_profit_margin: format!("{:.2}", self.net_profit_margin),
            operating_profit_margin: format!("{:.2}", self.operating_profit_margin),
            roe: format!("{:.2}", self.roe),
        }
    }
}
