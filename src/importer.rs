use std::io::Read;
use std::path::PathBuf;
use std::sync::OnceLock;

use calamine::{Data, Reader};
use regex::Regex;

use crate::categorizer::{Classifier, FALLBACK_CATEGORY};
use crate::error::{FinanzasError, Result};
use crate::models::{AdaptOutcome, CanonicalTransaction, DroppedRow};
use crate::settings::{DelimitedConfig, InstitutionRule, SpreadsheetConfig};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn grouped_thousands() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+\.\d{3}").expect("static regex"))
}

/// Parse an amount written with either `.` or `,` as the decimal mark.
///
/// `1.800,00` is read as European grouping, a trailing `,00` as a decimal
/// comma, and any other comma as a thousands separator. Anything that still
/// fails to parse is `0.0`.
pub fn parse_amount(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|c| *c != '$' && !c.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return 0.0;
    }

    let normalized = if grouped_thousands().is_match(&cleaned) && cleaned.contains(',') {
        cleaned.replace('.', "").replace(',', ".")
    } else if cleaned.ends_with(",00") {
        cleaned.replace(',', ".")
    } else {
        cleaned.replace(',', "")
    };

    match normalized.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Date-only prefix of a timestamp: text before any time component, capped
/// at 10 characters.
pub fn date_prefix(raw: &str) -> String {
    let raw = raw.trim();
    let date = raw.split_whitespace().next().unwrap_or("");
    date.chars().take(10).collect()
}

pub fn excel_serial_to_date(serial: f64) -> Option<String> {
    if !serial.is_finite() {
        return None;
    }
    // Excel epoch is 1899-12-30 (accounting for the 1900 leap year bug)
    let base = chrono::NaiveDate::from_ymd_opt(1899, 12, 30)?;
    let offset = chrono::Duration::try_days(serial.floor() as i64)?;
    let date = base.checked_add_signed(offset)?;
    Some(date.format("%Y-%m-%d").to_string())
}

/// A user-entered category wins unless it is blank, `nan`, or the fallback label.
pub fn is_category_override(value: &str) -> bool {
    let v = value.trim();
    !v.is_empty() && !v.eq_ignore_ascii_case("nan") && v != FALLBACK_CATEGORY
}

fn resolve_category(user_value: Option<&str>, merchant_text: &str, classifier: &Classifier) -> String {
    match user_value {
        Some(v) if is_category_override(v) => v.trim().to_string(),
        _ => classifier.classify(merchant_text),
    }
}

fn is_placeholder(value: &str) -> bool {
    let v = value.trim();
    v.is_empty() || v == "N/A"
}

/// Index of the first alias present in `headers`.
fn find_column(headers: &[String], aliases: &[String]) -> Option<usize> {
    aliases
        .iter()
        .find_map(|alias| headers.iter().position(|h| h == alias))
}

fn require_column(headers: &[String], aliases: &[String], source: &str) -> Result<usize> {
    find_column(headers, aliases).ok_or_else(|| FinanzasError::MissingColumn {
        source_name: source.to_string(),
        column: aliases.first().cloned().unwrap_or_default(),
    })
}

// ---------------------------------------------------------------------------
// Source adapters
// ---------------------------------------------------------------------------

/// A source of raw bank rows that can be normalized into canonical records.
///
/// `adapt` returns an error only when the source as a whole cannot be read;
/// bad rows are reported in [`AdaptOutcome::dropped`].
pub trait SourceAdapter {
    fn name(&self) -> &str;
    fn adapt(&self, classifier: &Classifier) -> Result<AdaptOutcome>;
}

fn finish(outcome: AdaptOutcome) -> AdaptOutcome {
    for d in &outcome.dropped {
        tracing::warn!(source = %outcome.source, row = d.row, reason = %d.reason, "dropped row");
    }
    tracing::info!(
        source = %outcome.source,
        records = outcome.transactions.len(),
        dropped = outcome.dropped.len(),
        "source adapted"
    );
    outcome
}

// ---------------------------------------------------------------------------
// Delimited (CSV) export
// ---------------------------------------------------------------------------

pub struct DelimitedSource {
    pub path: PathBuf,
    pub config: DelimitedConfig,
}

struct DelimitedIndices {
    bank: usize,
    kind: usize,
    amount: usize,
    timestamp: usize,
    product: usize,
    merchant: usize,
    product_number: Option<usize>,
    category: Option<usize>,
}

impl DelimitedSource {
    pub const NAME: &'static str = "csv";

    pub fn new(path: impl Into<PathBuf>, config: DelimitedConfig) -> Self {
        Self {
            path: path.into(),
            config,
        }
    }

    pub fn adapt_reader<R: Read>(&self, reader: R, classifier: &Classifier) -> Result<AdaptOutcome> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);
        let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.to_string()).collect();
        let cols = &self.config.columns;
        let idx = DelimitedIndices {
            bank: require_column(&headers, &cols.bank, Self::NAME)?,
            kind: require_column(&headers, &cols.kind, Self::NAME)?,
            amount: require_column(&headers, &cols.amount, Self::NAME)?,
            timestamp: require_column(&headers, &cols.timestamp, Self::NAME)?,
            product: require_column(&headers, &cols.product, Self::NAME)?,
            merchant: require_column(&headers, &cols.merchant, Self::NAME)?,
            product_number: find_column(&headers, &cols.product_number),
            category: find_column(&headers, &cols.category),
        };

        let mut outcome = AdaptOutcome::empty(Self::NAME);
        for (i, result) in rdr.records().enumerate() {
            let row = i + 1;
            let record = match result {
                Ok(r) => r,
                Err(e) => {
                    outcome.dropped.push(DroppedRow { row, reason: e.to_string() });
                    continue;
                }
            };
            match self.adapt_record(&record, &idx, classifier) {
                Ok(txn) => outcome.transactions.push(txn),
                Err(reason) => outcome.dropped.push(DroppedRow { row, reason }),
            }
        }
        Ok(finish(outcome))
    }

    fn adapt_record(
        &self,
        record: &csv::StringRecord,
        idx: &DelimitedIndices,
        classifier: &Classifier,
    ) -> std::result::Result<CanonicalTransaction, String> {
        let cols = &self.config.columns;
        let field = |i: usize, name: &[String]| {
            record.get(i).ok_or_else(|| {
                format!("missing field '{}'", name.first().map(String::as_str).unwrap_or(""))
            })
        };

        let bank = field(idx.bank, &cols.bank)?;
        if bank.trim().is_empty() {
            return Err("empty bank name".to_string());
        }
        let kind = field(idx.kind, &cols.kind)?;
        let amount = parse_amount(field(idx.amount, &cols.amount)?).abs();
        let date = date_prefix(field(idx.timestamp, &cols.timestamp)?);
        let merchant_text = field(idx.merchant, &cols.merchant)?;

        let mut product = field(idx.product, &cols.product)?.to_string();
        let mut product_number = idx
            .product_number
            .and_then(|i| record.get(i))
            .unwrap_or("")
            .trim()
            .to_string();
        if is_placeholder(&product_number) {
            product_number = self.config.default_product_number.clone();
            if is_placeholder(&product) {
                product = self.config.default_product_label.clone();
            }
        }

        let user_category = idx.category.and_then(|i| record.get(i));
        Ok(CanonicalTransaction {
            source_institution: bank.to_string(),
            transaction_kind: kind.to_string(),
            amount,
            date,
            instrument_label: product,
            instrument_id: product_number,
            merchant_text: merchant_text.to_string(),
            category: resolve_category(user_category, merchant_text, classifier),
        })
    }
}

impl SourceAdapter for DelimitedSource {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn adapt(&self, classifier: &Classifier) -> Result<AdaptOutcome> {
        if !self.path.exists() {
            return Err(FinanzasError::SourceUnavailable(format!(
                "file not found: {}",
                self.path.display()
            )));
        }
        tracing::info!(path = %self.path.display(), "reading delimited export");
        let file = std::fs::File::open(&self.path)?;
        self.adapt_reader(std::io::BufReader::new(file), classifier)
    }
}

// ---------------------------------------------------------------------------
// Spreadsheet (XLSX) export
// ---------------------------------------------------------------------------

pub struct SpreadsheetSource {
    pub path: PathBuf,
    pub config: SpreadsheetConfig,
}

struct SpreadsheetIndices {
    date: usize,
    bank: usize,
    kind: usize,
    amount: usize,
    merchant: usize,
    category: Option<usize>,
    product: Option<usize>,
    product_number: Option<usize>,
}

pub fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.as_f64().to_string(),
        Data::Error(e) => format!("#{e:?}"),
    }
}

fn cell_date(cell: &Data) -> std::result::Result<String, String> {
    match cell {
        Data::DateTime(dt) => excel_serial_to_date(dt.as_f64()).ok_or_else(|| "date out of range".to_string()),
        Data::Float(f) => excel_serial_to_date(*f).ok_or_else(|| "date out of range".to_string()),
        Data::Int(i) => excel_serial_to_date(*i as f64).ok_or_else(|| "date out of range".to_string()),
        Data::String(s) | Data::DateTimeIso(s) if !s.trim().is_empty() => Ok(date_prefix(s)),
        _ => Err("missing date".to_string()),
    }
}

fn cell_amount(cell: &Data) -> std::result::Result<f64, String> {
    let value = match cell {
        Data::Float(f) => *f,
        Data::Int(i) => *i as f64,
        Data::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| format!("non-numeric amount '{s}'"))?,
        Data::Empty => return Err("missing amount".to_string()),
        other => return Err(format!("non-numeric amount '{}'", cell_text(other))),
    };
    if value.is_finite() {
        Ok(value.abs())
    } else {
        Err("non-finite amount".to_string())
    }
}

fn institution_instrument<'a>(rules: &'a [InstitutionRule], bank: &str) -> Option<&'a InstitutionRule> {
    rules
        .iter()
        .find(|rule| rule.matches.iter().any(|m| bank.contains(m.as_str())))
}

impl SpreadsheetSource {
    pub const NAME: &'static str = "xlsx";

    pub fn new(path: impl Into<PathBuf>, config: SpreadsheetConfig) -> Self {
        Self {
            path: path.into(),
            config,
        }
    }

    /// Normalize sheet rows; the first row is the header.
    pub fn adapt_rows<'a, I>(&self, mut rows: I, classifier: &Classifier) -> Result<AdaptOutcome>
    where
        I: Iterator<Item = &'a [Data]>,
    {
        let headers: Vec<String> = rows
            .next()
            .map(|h| h.iter().map(cell_text).collect())
            .unwrap_or_default();
        let cols = &self.config.columns;
        let idx = SpreadsheetIndices {
            date: require_column(&headers, &cols.date, Self::NAME)?,
            bank: require_column(&headers, &cols.bank, Self::NAME)?,
            kind: require_column(&headers, &cols.kind, Self::NAME)?,
            amount: require_column(&headers, &cols.amount, Self::NAME)?,
            merchant: require_column(&headers, &cols.merchant, Self::NAME)?,
            category: find_column(&headers, &cols.category),
            product: find_column(&headers, &cols.product),
            product_number: find_column(&headers, &cols.product_number),
        };
        match idx.category.map(|i| headers[i].as_str()) {
            Some(col) => tracing::info!(column = %col, "using user category column"),
            None => tracing::info!("no user category column, classifying every row"),
        }

        let mut outcome = AdaptOutcome::empty(Self::NAME);
        for (i, row) in rows.enumerate() {
            match self.adapt_row(row, &idx, classifier) {
                Ok(txn) => outcome.transactions.push(txn),
                Err(reason) => outcome.dropped.push(DroppedRow { row: i + 1, reason }),
            }
        }
        Ok(finish(outcome))
    }

    fn adapt_row(
        &self,
        row: &[Data],
        idx: &SpreadsheetIndices,
        classifier: &Classifier,
    ) -> std::result::Result<CanonicalTransaction, String> {
        let empty = Data::Empty;
        let cell = |i: usize| row.get(i).unwrap_or(&empty);
        let opt_text = |i: Option<usize>| i.map(|i| cell_text(cell(i))).unwrap_or_default();

        let bank = cell_text(cell(idx.bank));
        if bank.trim().is_empty() {
            return Err("empty bank name".to_string());
        }
        let date = cell_date(cell(idx.date))?;
        let amount = cell_amount(cell(idx.amount))?;
        let merchant_text = cell_text(cell(idx.merchant));

        let (product, product_number) = match institution_instrument(&self.config.institutions, &bank) {
            Some(rule) => (rule.product.clone(), rule.product_number.clone()),
            None => (opt_text(idx.product), opt_text(idx.product_number)),
        };

        let user_category = idx.category.map(|i| cell_text(cell(i)));
        let category = resolve_category(user_category.as_deref(), &merchant_text, classifier);

        Ok(CanonicalTransaction {
            source_institution: bank,
            transaction_kind: cell_text(cell(idx.kind)),
            amount,
            date,
            instrument_label: product,
            instrument_id: product_number,
            merchant_text,
            category,
        })
    }
}

impl SourceAdapter for SpreadsheetSource {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn adapt(&self, classifier: &Classifier) -> Result<AdaptOutcome> {
        if !self.path.exists() {
            return Err(FinanzasError::SourceUnavailable(format!(
                "file not found: {}",
                self.path.display()
            )));
        }
        tracing::info!(path = %self.path.display(), sheet = %self.config.sheet, "reading spreadsheet export");
        let mut workbook = calamine::open_workbook_auto(&self.path)?;
        let range = workbook.worksheet_range(&self.config.sheet).map_err(|_| {
            FinanzasError::SourceUnavailable(format!(
                "sheet '{}' not found in {}",
                self.config.sheet,
                self.path.display()
            ))
        })?;
        self.adapt_rows(range.rows(), classifier)
    }
}

pub fn source_path(raw: &str) -> PathBuf {
    PathBuf::from(crate::settings::shellexpand_path(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categorizer::CategoryEntry;

    const CSV_HEADER: &str =
        "Banco,Tipo de transacción,Valor,Día de la transacción,Producto,Número producto,Detalle\n";

    fn csv_source() -> DelimitedSource {
        DelimitedSource::new("unused.csv", DelimitedConfig::default())
    }

    fn xlsx_source() -> SpreadsheetSource {
        SpreadsheetSource::new("unused.xlsx", SpreadsheetConfig::default())
    }

    fn s(v: &str) -> Data {
        Data::String(v.to_string())
    }

    fn sheet_header(with_category: bool) -> Vec<Data> {
        let mut h = vec![s("Fecha"), s("Banco"), s("Tipo"), s("Valor"), s("Detalle")];
        if with_category {
            h.push(s("Categoria "));
        }
        h
    }

    fn adapt_sheet(rows: &[Vec<Data>]) -> AdaptOutcome {
        xlsx_source()
            .adapt_rows(rows.iter().map(|r| r.as_slice()), &Classifier::builtin())
            .unwrap()
    }

    #[test]
    fn test_parse_amount_formats() {
        assert_eq!(parse_amount("1.800,00"), 1800.00);
        assert_eq!(parse_amount("45,00"), 45.00);
        assert_eq!(parse_amount("1,800"), 1800.0);
        assert_eq!(parse_amount("N/A"), 0.0);
        assert_eq!(parse_amount(""), 0.0);
    }

    #[test]
    fn test_parse_amount_symbols_and_spaces() {
        assert_eq!(parse_amount("$ 1.234.567,89"), 1234567.89);
        assert_eq!(parse_amount("$45.900"), 45.9);
        assert_eq!(parse_amount(" -12.000,50 "), -12000.5);
        assert_eq!(parse_amount("$1,234.56"), 1234.56);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("$"), 0.0);
        assert_eq!(parse_amount("inf"), 0.0);
    }

    #[test]
    fn test_date_prefix() {
        assert_eq!(date_prefix("2025-03-14 10:22:01"), "2025-03-14");
        assert_eq!(date_prefix("2025-03-14"), "2025-03-14");
        assert_eq!(date_prefix("2025-03-14T10:22:01"), "2025-03-14");
        assert_eq!(date_prefix(""), "");
    }

    #[test]
    fn test_excel_serial_to_date() {
        assert_eq!(excel_serial_to_date(45667.0).as_deref(), Some("2025-01-10"));
        assert_eq!(excel_serial_to_date(45667.75).as_deref(), Some("2025-01-10"));
        assert_eq!(excel_serial_to_date(1e15), None);
        assert_eq!(excel_serial_to_date(f64::NAN), None);
        assert_eq!(excel_serial_to_date(f64::INFINITY), None);
    }

    #[test]
    fn test_is_category_override() {
        assert!(is_category_override("Mercado"));
        assert!(!is_category_override(""));
        assert!(!is_category_override("  "));
        assert!(!is_category_override("nan"));
        assert!(!is_category_override("NaN"));
        assert!(!is_category_override("Otros"));
    }

    #[test]
    fn test_csv_basic_row() {
        let data = format!(
            "{CSV_HEADER}Bancolombia,Compra,\"$1.800,00\",2025-03-14 10:22:01,Tarjeta Crédito,*7729,CREPES Y WAFFLES WTC\n"
        );
        let out = csv_source().adapt_reader(data.as_bytes(), &Classifier::builtin()).unwrap();
        assert_eq!(out.transactions.len(), 1);
        let t = &out.transactions[0];
        assert_eq!(t.source_institution, "Bancolombia");
        assert_eq!(t.transaction_kind, "Compra");
        assert_eq!(t.amount, 1800.0);
        assert_eq!(t.date, "2025-03-14");
        assert_eq!(t.instrument_label, "Tarjeta Crédito");
        assert_eq!(t.instrument_id, "*7729");
        assert_eq!(t.category, "Alimentación");
    }

    #[test]
    fn test_csv_amount_is_absolute() {
        let data = format!("{CSV_HEADER}Nu,Retiro,\"-45,00\",2025-01-02,Cuenta,*1111,UBER TRIP\n");
        let out = csv_source().adapt_reader(data.as_bytes(), &Classifier::builtin()).unwrap();
        assert_eq!(out.transactions[0].amount, 45.0);
    }

    #[test]
    fn test_csv_defaults_missing_instrument() {
        let data = format!(
            "{CSV_HEADER}Bancolombia,Compra,100,2025-01-02,N/A,N/A,SPOTIFY\n\
             Bancolombia,Compra,100,2025-01-03,Cuenta Ahorros,,SPOTIFY\n"
        );
        let out = csv_source().adapt_reader(data.as_bytes(), &Classifier::builtin()).unwrap();
        assert_eq!(out.transactions[0].instrument_id, "*2186");
        assert_eq!(out.transactions[0].instrument_label, "Tarjeta Débito");
        assert_eq!(out.transactions[1].instrument_id, "*2186");
        assert_eq!(out.transactions[1].instrument_label, "Cuenta Ahorros");
    }

    #[test]
    fn test_csv_without_product_number_column() {
        let data = "Banco,Tipo de transacción,Valor,Día de la transacción,Producto,Detalle\n\
                    Bancolombia,Compra,100,2025-01-02,,SPOTIFY\n";
        let out = csv_source().adapt_reader(data.as_bytes(), &Classifier::builtin()).unwrap();
        assert_eq!(out.transactions[0].instrument_id, "*2186");
        assert_eq!(out.transactions[0].instrument_label, "Tarjeta Débito");
    }

    #[test]
    fn test_csv_merchant_text_kept_raw() {
        let data = format!("{CSV_HEADER}Nu,Compra,10,2025-01-02,Cuenta,*1,\"  SPOTIFY  \"\n");
        let out = csv_source().adapt_reader(data.as_bytes(), &Classifier::builtin()).unwrap();
        assert_eq!(out.transactions[0].merchant_text, "  SPOTIFY  ");
        assert_eq!(out.transactions[0].category, "Suscripciones");
    }

    #[test]
    fn test_csv_short_row_dropped_not_fatal() {
        let data = format!(
            "{CSV_HEADER}Nu,Compra,10,2025-01-02,Cuenta,*1,SPOTIFY\n\
             Nu,Compra,10\n\
             ,Compra,10,2025-01-02,Cuenta,*1,SPOTIFY\n\
             Nu,Compra,20,2025-01-04,Cuenta,*1,UBER TRIP\n"
        );
        let out = csv_source().adapt_reader(data.as_bytes(), &Classifier::builtin()).unwrap();
        assert_eq!(out.transactions.len(), 2);
        assert_eq!(out.dropped.len(), 2);
        assert_eq!(out.dropped[0].row, 2);
        assert_eq!(out.dropped[1].row, 3);
        assert_eq!(out.dropped[1].reason, "empty bank name");
    }

    #[test]
    fn test_csv_missing_required_column() {
        let data = "Banco,Valor\nNu,10\n";
        let err = csv_source()
            .adapt_reader(data.as_bytes(), &Classifier::builtin())
            .unwrap_err();
        assert!(matches!(err, FinanzasError::MissingColumn { .. }));
    }

    #[test]
    fn test_csv_user_category_override() {
        let data = "Banco,Tipo de transacción,Valor,Día de la transacción,Producto,Detalle,Categoria\n\
                    Nu,Compra,10,2025-01-02,Cuenta,SPOTIFY,Hogar\n\
                    Nu,Compra,10,2025-01-02,Cuenta,SPOTIFY,nan\n";
        let out = csv_source().adapt_reader(data.as_bytes(), &Classifier::builtin()).unwrap();
        assert_eq!(out.transactions[0].category, "Hogar");
        assert_eq!(out.transactions[1].category, "Suscripciones");
    }

    #[test]
    fn test_csv_missing_file_is_unavailable() {
        let src = DelimitedSource::new("/nonexistent/movimientos.csv", DelimitedConfig::default());
        let err = src.adapt(&Classifier::builtin()).unwrap_err();
        assert!(matches!(err, FinanzasError::SourceUnavailable(_)));
    }

    #[test]
    fn test_sheet_basic_rows_and_institutions() {
        let rows = vec![
            sheet_header(false),
            vec![s("2026-01-15 00:00:00"), s("Bancolombia"), s("Compra"), Data::Float(-52000.0), s("UBER TRIP")],
            vec![s("2026-01-16"), s("Itaú"), s("Compra"), Data::Int(12000), s("SPOTIFY")],
            vec![Data::Float(45667.0), s("Davivienda"), s("Abono"), Data::Float(10.5), s("ZZZ")],
        ];
        let out = adapt_sheet(&rows);
        assert_eq!(out.transactions.len(), 3);
        let t0 = &out.transactions[0];
        assert_eq!(t0.date, "2026-01-15");
        assert_eq!(t0.amount, 52000.0);
        assert_eq!(t0.instrument_label, "Cuenta Bancolombia");
        assert_eq!(t0.instrument_id, "");
        assert_eq!(t0.category, "Transporte");
        let t1 = &out.transactions[1];
        assert_eq!(t1.instrument_label, "Tarjeta Crédito");
        assert_eq!(t1.instrument_id, "*7729");
        let t2 = &out.transactions[2];
        assert_eq!(t2.date, "2025-01-10");
        assert_eq!(t2.instrument_label, "");
        assert_eq!(t2.category, FALLBACK_CATEGORY);
    }

    #[test]
    fn test_sheet_optional_product_columns_used_without_rule() {
        let mut header = sheet_header(false);
        header.push(s("Producto"));
        header.push(s("Numero"));
        let rows = vec![
            header,
            vec![s("2026-02-01"), s("Nu"), s("Compra"), Data::Float(1.0), s("X"), s("Tarjeta Nu"), Data::Float(4321.0)],
        ];
        let out = adapt_sheet(&rows);
        assert_eq!(out.transactions[0].instrument_label, "Tarjeta Nu");
        assert_eq!(out.transactions[0].instrument_id, "4321");
    }

    #[test]
    fn test_sheet_user_category_precedence() {
        let rows = vec![
            sheet_header(true),
            vec![s("2026-01-15"), s("Nu"), s("Compra"), Data::Float(1.0), s("UBER TRIP"), s("Viajes")],
            vec![s("2026-01-15"), s("Nu"), s("Compra"), Data::Float(1.0), s("UBER TRIP"), s("Otros")],
            vec![s("2026-01-15"), s("Nu"), s("Compra"), Data::Float(1.0), s("UBER TRIP"), Data::Empty],
            vec![s("2026-01-15"), s("Nu"), s("Compra"), Data::Float(1.0), s("UBER TRIP"), s(" Salud ")],
        ];
        let cats: Vec<String> = adapt_sheet(&rows).transactions.into_iter().map(|t| t.category).collect();
        assert_eq!(cats, vec!["Viajes", "Transporte", "Transporte", "Salud"]);
    }

    #[test]
    fn test_sheet_category_column_without_trailing_space() {
        let mut header = sheet_header(false);
        header.push(s("Categoria"));
        let rows = vec![
            header,
            vec![s("2026-01-15"), s("Nu"), s("Compra"), Data::Float(1.0), s("UBER TRIP"), s("Viajes")],
        ];
        assert_eq!(adapt_sheet(&rows).transactions[0].category, "Viajes");
    }

    #[test]
    fn test_sheet_one_bad_amount_in_ten_rows() {
        let mut rows = vec![sheet_header(false)];
        for i in 0..10 {
            let amount = if i == 2 { s("doce mil") } else { Data::Float(1000.0 * i as f64) };
            rows.push(vec![s("2026-01-15"), s("Nu"), s("Compra"), amount, s("SPOTIFY")]);
        }
        let out = adapt_sheet(&rows);
        assert_eq!(out.transactions.len(), 9);
        assert_eq!(out.dropped.len(), 1);
        assert_eq!(out.dropped[0].row, 3);
        assert!(out.dropped[0].reason.contains("non-numeric"));
    }

    #[test]
    fn test_sheet_out_of_range_date_drops_only_that_row() {
        let rows = vec![
            sheet_header(false),
            vec![Data::Float(1e15), s("Nu"), s("Compra"), Data::Float(10.0), s("SPOTIFY")],
            vec![Data::Float(46037.0), s("Nu"), s("Compra"), Data::Float(20.0), s("SPOTIFY")],
        ];
        let out = adapt_sheet(&rows);
        assert_eq!(out.transactions.len(), 1);
        assert_eq!(out.transactions[0].date, "2026-01-15");
        assert_eq!(out.dropped.len(), 1);
        assert_eq!(out.dropped[0].row, 1);
        assert_eq!(out.dropped[0].reason, "date out of range");
    }

    #[test]
    fn test_sheet_numeric_string_amount_accepted() {
        let rows = vec![
            sheet_header(false),
            vec![s("2026-01-15"), s("Nu"), s("Compra"), s(" -250.5 "), s("SPOTIFY")],
        ];
        assert_eq!(adapt_sheet(&rows).transactions[0].amount, 250.5);
    }

    #[test]
    fn test_sheet_missing_required_column() {
        let rows = vec![vec![s("Fecha"), s("Banco")]];
        let err = xlsx_source()
            .adapt_rows(rows.iter().map(|r| r.as_slice()), &Classifier::builtin())
            .unwrap_err();
        assert!(matches!(err, FinanzasError::MissingColumn { .. }));
    }

    #[test]
    fn test_sheet_with_custom_catalog() {
        let classifier = Classifier::from_entries(
            vec![CategoryEntry { name: "Casa".to_string(), aliases: vec!["ARRIENDO".to_string()] }],
            vec![],
        )
        .unwrap();
        let rows = vec![
            sheet_header(false),
            vec![s("2026-03-01"), s("Nu"), s("Pago"), Data::Float(900.0), s("PAGO ARRIENDO MARZO")],
        ];
        let out = xlsx_source()
            .adapt_rows(rows.iter().map(|r| r.as_slice()), &classifier)
            .unwrap();
        assert_eq!(out.transactions[0].category, "Casa");
    }

    #[test]
    fn test_sheet_file_and_missing_sheet() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bancos.xlsx");
        let mut workbook = rust_xlsxwriter::Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name("Consolidado").unwrap();
        for (c, h) in ["Fecha", "Banco", "Tipo", "Valor", "Detalle"].iter().enumerate() {
            sheet.write_string(0, c as u16, *h).unwrap();
        }
        sheet.write_string(1, 0, "2026-01-20").unwrap();
        sheet.write_string(1, 1, "Itau").unwrap();
        sheet.write_string(1, 2, "Compra").unwrap();
        sheet.write_number(1, 3, -35000.0).unwrap();
        sheet.write_string(1, 4, "JUAN VALDEZ").unwrap();
        workbook.save(&path).unwrap();

        let out = SpreadsheetSource::new(&path, SpreadsheetConfig::default())
            .adapt(&Classifier::builtin())
            .unwrap();
        assert_eq!(out.transactions.len(), 1);
        assert_eq!(out.transactions[0].amount, 35000.0);
        assert_eq!(out.transactions[0].instrument_id, "*7729");
        assert_eq!(out.transactions[0].category, "Alimentación");

        let mut config = SpreadsheetConfig::default();
        config.sheet = "2027".to_string();
        let err = SpreadsheetSource::new(&path, config)
            .adapt(&Classifier::builtin())
            .unwrap_err();
        assert!(matches!(err, FinanzasError::SourceUnavailable(_)));
    }
}
