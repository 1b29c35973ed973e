use serde::{Deserialize, Serialize};

/// One normalized bank movement. Field names on the wire follow the
/// columns of the remote `movimientos` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalTransaction {
    #[serde(rename = "banco")]
    pub source_institution: String,
    #[serde(rename = "tipo")]
    pub transaction_kind: String,
    #[serde(rename = "valor")]
    pub amount: f64,
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(rename = "producto")]
    pub instrument_label: String,
    #[serde(rename = "numero_producto")]
    pub instrument_id: String,
    #[serde(rename = "detalle")]
    pub merchant_text: String,
    #[serde(rename = "categoria")]
    pub category: String,
}

/// A source row that could not be coerced into a transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct DroppedRow {
    /// 1-based data row number, header excluded.
    pub row: usize,
    pub reason: String,
}

/// Everything one source adapter produced.
#[derive(Debug, Clone, Default)]
pub struct AdaptOutcome {
    pub source: String,
    pub transactions: Vec<CanonicalTransaction>,
    pub dropped: Vec<DroppedRow>,
    /// Set when the whole source was skipped (missing file, sheet or column).
    pub unavailable: Option<String>,
}

impl AdaptOutcome {
    pub fn empty(source: &str) -> Self {
        Self {
            source: source.to_string(),
            ..Self::default()
        }
    }
}
