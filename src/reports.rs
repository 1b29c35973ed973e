use std::collections::HashMap;

use crate::categorizer::{Classifier, FALLBACK_CATEGORY};
use crate::models::CanonicalTransaction;
use crate::sink::StoredTransaction;

// ---------------------------------------------------------------------------
// Unclassified merchants
// ---------------------------------------------------------------------------

pub struct MerchantCount {
    pub merchant: String,
    pub count: usize,
}

/// Merchant texts the classifier sends to the fallback category, most
/// frequent first. Rows carrying a user category are not considered.
pub fn unclassified_merchants(
    transactions: &[CanonicalTransaction],
    classifier: &Classifier,
    limit: usize,
) -> Vec<MerchantCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for t in transactions {
        if t.category == FALLBACK_CATEGORY && classifier.classify(&t.merchant_text) == FALLBACK_CATEGORY {
            *counts.entry(t.merchant_text.as_str()).or_default() += 1;
        }
    }
    let mut out: Vec<MerchantCount> = counts
        .into_iter()
        .map(|(merchant, count)| MerchantCount {
            merchant: merchant.to_string(),
            count,
        })
        .collect();
    out.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.merchant.cmp(&b.merchant)));
    out.truncate(limit);
    out
}

// ---------------------------------------------------------------------------
// Duplicates in the store
// ---------------------------------------------------------------------------

pub struct DuplicateGroup {
    pub date: String,
    pub amount: f64,
    pub merchant_text: String,
    /// Category of the first row in the group.
    pub category: String,
    pub ids: Vec<String>,
}

pub struct DuplicateReport {
    pub total_rows: usize,
    pub groups: Vec<DuplicateGroup>,
}

impl DuplicateReport {
    /// Rows beyond the first of each group.
    pub fn surplus(&self) -> usize {
        self.groups.iter().map(|g| g.ids.len() - 1).sum()
    }
}

/// Group stored rows sharing date, amount and merchant text. Groups come
/// back in order of first appearance.
pub fn find_duplicates(rows: &[StoredTransaction]) -> DuplicateReport {
    let mut order: Vec<(String, String, String)> = Vec::new();
    let mut groups: HashMap<(String, String, String), DuplicateGroup> = HashMap::new();

    for row in rows {
        let date = row.date.clone().unwrap_or_default();
        let amount = row.amount.unwrap_or(0.0);
        let merchant = row.merchant_text.clone().unwrap_or_default();
        // f64 is not hashable; its canonical text is.
        let key = (date.clone(), amount.to_string(), merchant.clone());
        let group = groups.entry(key.clone()).or_insert_with(|| {
            order.push(key);
            DuplicateGroup {
                date,
                amount,
                merchant_text: merchant,
                category: row.category.clone().unwrap_or_default(),
                ids: Vec::new(),
            }
        });
        group.ids.push(row.id_text());
    }

    let groups = order
        .into_iter()
        .filter_map(|key| groups.remove(&key))
        .filter(|g| g.ids.len() > 1)
        .collect();
    DuplicateReport {
        total_rows: rows.len(),
        groups,
    }
}
