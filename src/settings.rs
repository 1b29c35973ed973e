use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{FinanzasError, Result};

fn aliases(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

/// Header names recognized for each field of the delimited export.
/// Each list is tried in order; the first header present wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DelimitedColumns {
    pub bank: Vec<String>,
    pub kind: Vec<String>,
    pub amount: Vec<String>,
    pub timestamp: Vec<String>,
    pub product: Vec<String>,
    pub product_number: Vec<String>,
    pub merchant: Vec<String>,
    pub category: Vec<String>,
}

impl Default for DelimitedColumns {
    fn default() -> Self {
        Self {
            bank: aliases(&["Banco"]),
            kind: aliases(&["Tipo de transacción"]),
            amount: aliases(&["Valor"]),
            timestamp: aliases(&["Día de la transacción"]),
            product: aliases(&["Producto"]),
            product_number: aliases(&["Número producto"]),
            merchant: aliases(&["Detalle"]),
            category: aliases(&["Categoria ", "Categoria"]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DelimitedConfig {
    pub path: String,
    pub columns: DelimitedColumns,
    /// Substituted when the product number is missing or `N/A`.
    pub default_product_number: String,
    /// Substituted alongside the default number when the product name is missing too.
    pub default_product_label: String,
}

impl Default for DelimitedConfig {
    fn default() -> Self {
        Self {
            path: default_data_dir().join("movimientos.csv").to_string_lossy().to_string(),
            columns: DelimitedColumns::default(),
            default_product_number: "*2186".to_string(),
            default_product_label: "Tarjeta Débito".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpreadsheetColumns {
    pub date: Vec<String>,
    pub bank: Vec<String>,
    pub kind: Vec<String>,
    pub amount: Vec<String>,
    pub merchant: Vec<String>,
    pub category: Vec<String>,
    pub product: Vec<String>,
    pub product_number: Vec<String>,
}

impl Default for SpreadsheetColumns {
    fn default() -> Self {
        Self {
            date: aliases(&["Fecha"]),
            bank: aliases(&["Banco"]),
            kind: aliases(&["Tipo"]),
            amount: aliases(&["Valor"]),
            merchant: aliases(&["Detalle"]),
            category: aliases(&["Categoria ", "Categoria"]),
            product: aliases(&["Producto"]),
            product_number: aliases(&["Numero"]),
        }
    }
}

/// Instrument inferred for every row of an institution whose name contains
/// one of `matches`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstitutionRule {
    pub matches: Vec<String>,
    pub product: String,
    pub product_number: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpreadsheetConfig {
    pub path: String,
    pub sheet: String,
    pub columns: SpreadsheetColumns,
    pub institutions: Vec<InstitutionRule>,
}

impl Default for SpreadsheetConfig {
    fn default() -> Self {
        Self {
            path: default_data_dir().join("movimientos.xlsx").to_string_lossy().to_string(),
            sheet: "Consolidado".to_string(),
            columns: SpreadsheetColumns::default(),
            institutions: vec![
                InstitutionRule {
                    matches: aliases(&["Bancolombia"]),
                    product: "Cuenta Bancolombia".to_string(),
                    product_number: String::new(),
                },
                InstitutionRule {
                    matches: aliases(&["Itaú", "Itau"]),
                    product: "Tarjeta Crédito".to_string(),
                    product_number: "*7729".to_string(),
                },
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SinkConfig {
    /// Base URL of the REST store, e.g. `https://<project>.supabase.co`.
    pub url: String,
    pub table: String,
    pub batch_size: usize,
    /// Name of the environment variable holding the API key.
    pub key_env: String,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            table: "movimientos".to_string(),
            batch_size: 100,
            key_env: "FINANZAS_SINK_KEY".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub data_dir: String,
    pub output_path: String,
    pub catalog_path: Option<String>,
    pub delimited: DelimitedConfig,
    pub spreadsheet: SpreadsheetConfig,
    pub sink: SinkConfig,
}

impl Default for Settings {
    fn default() -> Self {
        let data_dir = default_data_dir();
        Self {
            output_path: data_dir.join("movimientos.json").to_string_lossy().to_string(),
            data_dir: data_dir.to_string_lossy().to_string(),
            catalog_path: None,
            delimited: DelimitedConfig::default(),
            spreadsheet: SpreadsheetConfig::default(),
            sink: SinkConfig::default(),
        }
    }
}

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("finanzas")
}

pub fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Documents")
        .join("finanzas")
}

pub fn load_settings() -> Settings {
    let path = settings_path();
    if !path.exists() {
        return Settings::default();
    }
    match std::fs::read_to_string(&path).map(|c| serde_json::from_str(&c)) {
        Ok(Ok(settings)) => settings,
        Ok(Err(e)) => {
            tracing::warn!(path = %path.display(), error = %e, "invalid settings file, using defaults");
            Settings::default()
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "unreadable settings file, using defaults");
            Settings::default()
        }
    }
}

pub fn save_settings(settings: &Settings) -> Result<()> {
    let dir = config_dir();
    std::fs::create_dir_all(&dir)?;
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| FinanzasError::Settings(e.to_string()))?;
    std::fs::write(settings_path(), format!("{json}\n"))?;
    Ok(())
}

pub fn settings_file_exists() -> bool {
    settings_path().exists()
}

pub fn shellexpand_path(path: &str) -> String {
    if path.starts_with('~') {
        if let Some(home) = dirs::home_dir() {
            return path.replacen('~', &home.to_string_lossy(), 1);
        }
    }
    path.to_string()
}
