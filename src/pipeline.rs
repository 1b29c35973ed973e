use std::collections::BTreeMap;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::categorizer::Classifier;
use crate::error::{FinanzasError, Result};
use crate::importer::SourceAdapter;
use crate::models::{AdaptOutcome, CanonicalTransaction};

// ---------------------------------------------------------------------------
// Running the adapters
// ---------------------------------------------------------------------------

/// Run every adapter in order. A source that cannot be read contributes an
/// empty outcome with `unavailable` set instead of failing the run.
pub fn collect(sources: &[&dyn SourceAdapter], classifier: &Classifier) -> Vec<AdaptOutcome> {
    sources
        .iter()
        .map(|source| match source.adapt(classifier) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!(source = source.name(), error = %e, "source skipped");
                AdaptOutcome {
                    unavailable: Some(e.to_string()),
                    ..AdaptOutcome::empty(source.name())
                }
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

pub struct CategoryShare {
    pub category: String,
    pub count: usize,
    pub pct: f64,
}

/// Record count per observed category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryStats {
    counts: BTreeMap<String, usize>,
    total: usize,
}

impl CategoryStats {
    pub fn from_transactions(transactions: &[CanonicalTransaction]) -> Self {
        let mut stats = Self::default();
        for t in transactions {
            *stats.counts.entry(t.category.clone()).or_default() += 1;
            stats.total += 1;
        }
        stats
    }

    pub fn counts(&self) -> &BTreeMap<String, usize> {
        &self.counts
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Share of the total per category, in percent. Empty when there are no records.
    pub fn percentages(&self) -> BTreeMap<String, f64> {
        if self.total == 0 {
            return BTreeMap::new();
        }
        self.counts
            .iter()
            .map(|(cat, count)| (cat.clone(), *count as f64 / self.total as f64 * 100.0))
            .collect()
    }

    /// Categories by descending count, ties by name.
    pub fn distribution(&self) -> Vec<CategoryShare> {
        let pcts = self.percentages();
        let mut shares: Vec<CategoryShare> = self
            .counts
            .iter()
            .map(|(cat, count)| CategoryShare {
                category: cat.clone(),
                count: *count,
                pct: pcts.get(cat).copied().unwrap_or(0.0),
            })
            .collect();
        shares.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.category.cmp(&b.category)));
        shares
    }
}

// ---------------------------------------------------------------------------
// Merge
// ---------------------------------------------------------------------------

pub struct SourceSummary {
    pub source: String,
    pub records: usize,
    pub dropped: usize,
    pub unavailable: Option<String>,
}

pub struct MergeResult {
    pub transactions: Vec<CanonicalTransaction>,
    pub stats: CategoryStats,
    pub sources: Vec<SourceSummary>,
}

impl MergeResult {
    pub fn dropped(&self) -> usize {
        self.sources.iter().map(|s| s.dropped).sum()
    }
}

/// Concatenate outcomes in the order given, keeping each source's row order.
pub fn merge(outputs: Vec<AdaptOutcome>) -> MergeResult {
    let mut transactions = Vec::with_capacity(outputs.iter().map(|o| o.transactions.len()).sum());
    let mut sources = Vec::with_capacity(outputs.len());
    for outcome in outputs {
        sources.push(SourceSummary {
            source: outcome.source,
            records: outcome.transactions.len(),
            dropped: outcome.dropped.len(),
            unavailable: outcome.unavailable,
        });
        transactions.extend(outcome.transactions);
    }
    if transactions.is_empty() {
        tracing::warn!("no transactions from any source");
    }
    let stats = CategoryStats::from_transactions(&transactions);
    MergeResult {
        transactions,
        stats,
        sources,
    }
}

// ---------------------------------------------------------------------------
// Output artifact
// ---------------------------------------------------------------------------

pub fn render_output(transactions: &[CanonicalTransaction]) -> Result<String> {
    Ok(serde_json::to_string_pretty(transactions)?)
}

pub fn write_output(path: &Path, transactions: &[CanonicalTransaction]) -> Result<String> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let json = render_output(transactions)?;
    std::fs::write(path, &json)?;
    Ok(checksum(json.as_bytes()))
}

pub fn read_output(path: &Path) -> Result<Vec<CanonicalTransaction>> {
    if !path.exists() {
        return Err(FinanzasError::Other(format!("{} not found", path.display())));
    }
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

pub fn checksum(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::importer::{DelimitedSource, SpreadsheetSource};
    use crate::models::DroppedRow;
    use crate::settings::{DelimitedConfig, SpreadsheetConfig};

    fn txn(category: &str, detail: &str) -> CanonicalTransaction {
        CanonicalTransaction {
            source_institution: "Nu".to_string(),
            transaction_kind: "Compra".to_string(),
            amount: 10.0,
            date: "2026-01-01".to_string(),
            instrument_label: String::new(),
            instrument_id: String::new(),
            merchant_text: detail.to_string(),
            category: category.to_string(),
        }
    }

    fn outcome(source: &str, txns: Vec<CanonicalTransaction>) -> AdaptOutcome {
        AdaptOutcome {
            transactions: txns,
            ..AdaptOutcome::empty(source)
        }
    }

    struct Failing;

    impl SourceAdapter for Failing {
        fn name(&self) -> &str {
            "broken"
        }
        fn adapt(&self, _: &Classifier) -> Result<AdaptOutcome> {
            Err(FinanzasError::SourceUnavailable("file not found: x".to_string()))
        }
    }

    struct Fixed(Vec<CanonicalTransaction>);

    impl SourceAdapter for Fixed {
        fn name(&self) -> &str {
            "fixed"
        }
        fn adapt(&self, _: &Classifier) -> Result<AdaptOutcome> {
            Ok(outcome("fixed", self.0.clone()))
        }
    }

    #[test]
    fn test_stats_counts_and_percentages() {
        let result = merge(vec![outcome("a", vec![txn("A", "1"), txn("B", "2"), txn("A", "3")])]);
        let counts = result.stats.counts();
        assert_eq!(counts.len(), 2);
        assert_eq!(counts["A"], 2);
        assert_eq!(counts["B"], 1);
        let pct = result.stats.percentages();
        assert!((pct["A"] - 66.7).abs() < 0.05);
        assert!((pct["B"] - 33.3).abs() < 0.05);
    }

    #[test]
    fn test_empty_merge_has_empty_distribution() {
        let result = merge(vec![AdaptOutcome::empty("csv"), AdaptOutcome::empty("xlsx")]);
        assert!(result.transactions.is_empty());
        assert_eq!(result.stats.total(), 0);
        assert!(result.stats.percentages().is_empty());
        assert!(result.stats.distribution().is_empty());
    }

    #[test]
    fn test_merge_preserves_source_then_row_order() {
        let result = merge(vec![
            outcome("csv", vec![txn("A", "a1"), txn("B", "a2")]),
            outcome("xlsx", vec![txn("A", "b1")]),
        ]);
        let details: Vec<&str> = result.transactions.iter().map(|t| t.merchant_text.as_str()).collect();
        assert_eq!(details, vec!["a1", "a2", "b1"]);
        assert_eq!(result.sources[0].records, 2);
        assert_eq!(result.sources[1].records, 1);
    }

    #[test]
    fn test_distribution_sorted_by_count_then_name() {
        let stats = CategoryStats::from_transactions(&[
            txn("Zeta", "1"),
            txn("Beta", "2"),
            txn("Alfa", "3"),
            txn("Zeta", "4"),
        ]);
        let distribution = stats.distribution();
        let order: Vec<&str> = distribution.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(order, vec!["Zeta", "Alfa", "Beta"]);
    }

    #[test]
    fn test_dropped_rows_summed() {
        let mut a = outcome("csv", vec![txn("A", "1")]);
        a.dropped.push(DroppedRow { row: 4, reason: "bad".to_string() });
        let mut b = outcome("xlsx", vec![]);
        b.dropped.push(DroppedRow { row: 1, reason: "bad".to_string() });
        assert_eq!(merge(vec![a, b]).dropped(), 2);
    }

    #[test]
    fn test_collect_skips_unavailable_source() {
        let fixed = Fixed(vec![txn("A", "1")]);
        let sources: [&dyn SourceAdapter; 2] = [&Failing, &fixed];
        let outputs = collect(&sources, &Classifier::builtin());
        assert_eq!(outputs.len(), 2);
        assert!(outputs[0].transactions.is_empty());
        assert!(outputs[0].unavailable.as_deref().unwrap().contains("file not found"));
        assert_eq!(outputs[1].transactions.len(), 1);
        assert!(outputs[1].unavailable.is_none());
    }

    fn write_fixtures(dir: &Path) -> (std::path::PathBuf, std::path::PathBuf) {
        let csv = dir.join("movimientos.csv");
        std::fs::write(
            &csv,
            "Banco,Tipo de transacción,Valor,Día de la transacción,Producto,Número producto,Detalle,Categoria \n\
             Bancolombia,Compra,\"$1.800,00\",2025-03-14 10:22:01,Tarjeta Crédito,*7729,CREPES Y WAFFLES WTC,\n\
             Nu,Compra,\"25,00\",2025-03-15,N/A,N/A,UBER TRIP,Otros\n\
             Nu,Pago,\"9,00\",2025-03-16,Cuenta,*1111,KIOSCO,Hogar\n",
        )
        .unwrap();

        let xlsx = dir.join("bancos.xlsx");
        let mut workbook = rust_xlsxwriter::Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name("Consolidado").unwrap();
        for (c, h) in ["Fecha", "Banco", "Tipo", "Valor", "Detalle"].iter().enumerate() {
            sheet.write_string(0, c as u16, *h).unwrap();
        }
        for (r, (bank, amount, detail)) in [("Itau", -35000.0, "JUAN VALDEZ"), ("Nu", 12.5, "SPOTIFY")]
            .iter()
            .enumerate()
        {
            let r = r as u32 + 1;
            sheet.write_string(r, 0, "2026-01-20").unwrap();
            sheet.write_string(r, 1, *bank).unwrap();
            sheet.write_string(r, 2, "Compra").unwrap();
            sheet.write_number(r, 3, *amount).unwrap();
            sheet.write_string(r, 4, *detail).unwrap();
        }
        workbook.save(&xlsx).unwrap();
        (csv, xlsx)
    }

    #[test]
    fn test_rerun_on_unchanged_sources_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let (csv_path, xlsx_path) = write_fixtures(dir.path());
        let classifier = Classifier::builtin();

        let run = |out: &str| {
            let csv = DelimitedSource::new(&csv_path, DelimitedConfig::default());
            let xlsx = SpreadsheetSource::new(&xlsx_path, SpreadsheetConfig::default());
            let sources: [&dyn SourceAdapter; 2] = [&csv, &xlsx];
            let result = merge(collect(&sources, &classifier));
            let checksum = write_output(&dir.path().join(out), &result.transactions).unwrap();
            (result, checksum)
        };
        let (first, c1) = run("one.json");
        let (second, c2) = run("two.json");

        assert_eq!(first.transactions.len(), 5);
        assert_eq!(first.dropped(), 0);
        assert_eq!(c1, c2);
        assert_eq!(first.stats, second.stats);
        assert_eq!(first.transactions, second.transactions);
        assert_eq!(first.stats.counts()["Hogar"], 1);
        assert_eq!(first.stats.counts()["Transporte"], 1);
    }

    #[test]
    fn test_output_field_names_and_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("movimientos.json");
        let txns = vec![txn("Alimentación", "CREPES Y WAFFLES")];
        write_output(&path, &txns).unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let obj = value[0].as_object().unwrap();
        let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        keys.sort();
        assert_eq!(
            keys,
            vec!["banco", "categoria", "detalle", "fecha", "numero_producto", "producto", "tipo", "valor"]
        );
        // non-ASCII is written as-is
        assert!(raw.contains("Alimentación"));
        assert_eq!(read_output(&path).unwrap(), txns);
    }

    #[test]
    fn test_read_output_missing_file() {
        assert!(read_output(Path::new("/nonexistent/movimientos.json")).is_err());
    }
}
