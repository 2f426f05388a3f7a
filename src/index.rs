//! In-memory company index
//!
//! Holds one immutable registry snapshot. Queries never mutate; a reload
//! builds a whole new index and swaps it in via [`SharedIndex`], so
//! concurrent readers never observe a half-built record set.

use crate::types::CompanyRecord;
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Search results are capped so interactive callers get a bounded
/// response; refine the query for more.
pub const MAX_SEARCH_RESULTS: usize = 20;

/// Aggregate counts over the indexed snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    pub total: usize,
    pub listed: usize,
    pub unlisted: usize,
    /// `modify_date` of the first record in insertion order. This mirrors
    /// the upstream registry policy; it is not the maximum date.
    pub last_update: String,
}

/// Immutable index over one parsed registry snapshot.
#[derive(Debug, Default)]
pub struct CompanyIndex {
    records: Vec<CompanyRecord>,
    by_code: HashMap<String, usize>,
}

impl CompanyIndex {
    /// Build the index from a parsed snapshot. On duplicate corp codes the
    /// first occurrence wins, matching linear-scan lookup semantics.
    pub fn new(records: Vec<CompanyRecord>) -> Self {
        let mut by_code = HashMap::with_capacity(records.len());
        for (i, rec) in records.iter().enumerate() {
            by_code.entry(rec.corp_code.clone()).or_insert(i);
        }
        info!("indexed {} company records", records.len());
        CompanyIndex { records, by_code }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Case-insensitive substring search over company names.
    ///
    /// A blank term returns nothing. Listed companies come first; within
    /// each class, insertion order is preserved. At most
    /// [`MAX_SEARCH_RESULTS`] entries are returned, cut after ordering.
    pub fn search_by_name(&self, term: &str) -> Vec<&CompanyRecord> {
        let term = term.trim();
        if term.is_empty() {
            return Vec::new();
        }
        let needle = term.to_lowercase();

        let mut hits = Vec::new();
        let mut unlisted = Vec::new();
        for rec in &self.records {
            if rec.corp_name.to_lowercase().contains(&needle) {
                if rec.is_listed() {
                    hits.push(rec);
                } else {
                    unlisted.push(rec);
                }
            }
        }

        // Cap after ordering, so listed matches are never crowded out.
        hits.extend(unlisted);
        hits.truncate(MAX_SEARCH_RESULTS);
        hits
    }

    /// Exact corp-code lookup.
    pub fn get_by_code(&self, code: &str) -> Option<&CompanyRecord> {
        self.by_code.get(code).map(|&i| &self.records[i])
    }

    /// All listed companies, insertion order preserved.
    pub fn listed_companies(&self) -> Vec<&CompanyRecord> {
        self.records.iter().filter(|r| r.is_listed()).collect()
    }

    pub fn stats(&self) -> IndexStats {
        let listed = self.records.iter().filter(|r| r.is_listed()).count();
        IndexStats {
            total: self.records.len(),
            listed,
            unlisted: self.records.len() - listed,
            last_update: self
                .records
                .first()
                .map(|r| r.modify_date.clone())
                .unwrap_or_default(),
        }
    }
}

/// Shared handle over the current index snapshot.
///
/// Readers clone the `Arc` and query it without holding the lock; a
/// reload builds the replacement index completely before `replace`
/// publishes it, so no torn view is ever visible.
#[derive(Debug)]
pub struct SharedIndex {
    inner: RwLock<Arc<CompanyIndex>>,
}

impl SharedIndex {
    pub fn new(index: CompanyIndex) -> Self {
        SharedIndex {
            inner: RwLock::new(Arc::new(index)),
        }
    }

    /// Current snapshot; the returned handle stays valid across swaps.
    pub fn load(&self) -> Arc<CompanyIndex> {
        self.inner.read().expect("index lock poisoned").clone()
    }

    /// Publish a fully built replacement snapshot.
    pub fn replace(&self, index: CompanyIndex) {
        let mut guard = self.inner.write().expect("index lock poisoned");
        *guard = Arc::new(index);
    }
}
