//! Client for the remote `movimientos` table.
//!
//! Blocking reqwest client against a PostgREST-style endpoint
//! (`{url}/rest/v1/{table}`). Uploads are chunked into fixed-size batches;
//! a failed batch is reported and never retried here.

use std::time::Duration;

use serde::Deserialize;

use crate::error::{FinanzasError, Result};
use crate::models::CanonicalTransaction;
use crate::settings::SinkConfig;

/// A row as read back from the store. Only the columns the duplicate and
/// purge commands need; the store may return more.
#[derive(Debug, Clone, Deserialize)]
pub struct StoredTransaction {
    pub id: serde_json::Value,
    #[serde(rename = "fecha", default)]
    pub date: Option<String>,
    #[serde(rename = "valor", default)]
    pub amount: Option<f64>,
    #[serde(rename = "detalle", default)]
    pub merchant_text: Option<String>,
    #[serde(rename = "categoria", default)]
    pub category: Option<String>,
}

impl StoredTransaction {
    /// The opaque store id as it appears in a filter (`id=eq.<id>`).
    pub fn id_text(&self) -> String {
        match &self.id {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BatchStatus {
    Uploaded,
    Failed { status: Option<u16>, message: String },
    /// Not attempted because an earlier batch hit an unrecoverable error.
    Skipped,
}

#[derive(Debug, Clone)]
pub struct BatchOutcome {
    /// 1-based batch number.
    pub index: usize,
    /// 0-based offset of the batch's first record in the upload.
    pub offset: usize,
    pub rows: usize,
    pub status: BatchStatus,
}

#[derive(Debug, Clone, Default)]
pub struct UploadReport {
    pub total: usize,
    pub batches: Vec<BatchOutcome>,
}

impl UploadReport {
    pub fn uploaded(&self) -> usize {
        self.batches
            .iter()
            .filter(|b| b.status == BatchStatus::Uploaded)
            .map(|b| b.rows)
            .sum()
    }

    pub fn unsuccessful(&self) -> impl Iterator<Item = &BatchOutcome> {
        self.batches.iter().filter(|b| b.status != BatchStatus::Uploaded)
    }

    pub fn is_complete(&self) -> bool {
        self.uploaded() == self.total
    }
}

pub struct PurgeReport {
    pub found: usize,
    pub deleted: usize,
}

pub struct SinkClient {
    http: reqwest::blocking::Client,
    endpoint: String,
    key: String,
}

/// Statuses after which every following batch would fail the same way.
fn is_fatal_status(status: u16) -> bool {
    matches!(status, 401 | 403 | 404)
}

impl SinkClient {
    pub fn new(base_url: &str, table: &str, key: &str) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(format!("finanzas/{}", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(60))
            .build()?;
        Ok(Self {
            http,
            endpoint: format!("{}/rest/v1/{}", base_url.trim_end_matches('/'), table),
            key: key.to_string(),
        })
    }

    /// Build a client from settings, reading the API key from the environment.
    pub fn from_config(config: &SinkConfig) -> Result<Self> {
        if config.url.trim().is_empty() {
            return Err(FinanzasError::Settings(
                "sink.url is not set; run `finanzas init` and edit the settings file".to_string(),
            ));
        }
        let key = std::env::var(&config.key_env).map_err(|_| {
            FinanzasError::Settings(format!("environment variable {} is not set", config.key_env))
        })?;
        Self::new(&config.url, &config.table, &key)
    }

    fn request(&self, method: reqwest::Method, url: &str) -> reqwest::blocking::RequestBuilder {
        self.http
            .request(method, url)
            .header("apikey", &self.key)
            .header("Authorization", format!("Bearer {}", self.key))
    }

    fn check(resp: reqwest::blocking::Response) -> Result<reqwest::blocking::Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let message = resp.text().unwrap_or_default();
        Err(FinanzasError::Sink {
            status: status.as_u16(),
            message,
        })
    }

    pub fn insert_batch(&self, batch: &[CanonicalTransaction]) -> Result<()> {
        let resp = self
            .request(reqwest::Method::POST, &self.endpoint)
            .header("Prefer", "return=minimal")
            .json(batch)
            .send()?;
        Self::check(resp)?;
        Ok(())
    }

    /// Upload `records` in chunks of `batch_size`. Failed batches are
    /// recorded and the upload moves on, except after an auth or
    /// missing-table response, where the rest are marked skipped.
    pub fn insert_batches(&self, records: &[CanonicalTransaction], batch_size: usize) -> UploadReport {
        let batch_size = batch_size.max(1);
        let mut report = UploadReport {
            total: records.len(),
            batches: Vec::new(),
        };
        let mut abort = false;

        for (i, batch) in records.chunks(batch_size).enumerate() {
            let index = i + 1;
            let offset = i * batch_size;
            if abort {
                report.batches.push(BatchOutcome {
                    index,
                    offset,
                    rows: batch.len(),
                    status: BatchStatus::Skipped,
                });
                continue;
            }
            let status = match self.insert_batch(batch) {
                Ok(()) => {
                    tracing::info!(batch = index, rows = batch.len(), "batch uploaded");
                    BatchStatus::Uploaded
                }
                Err(FinanzasError::Sink { status, message }) => {
                    tracing::warn!(batch = index, rows = batch.len(), status, %message, "batch rejected");
                    abort = is_fatal_status(status);
                    BatchStatus::Failed {
                        status: Some(status),
                        message,
                    }
                }
                Err(e) => {
                    tracing::warn!(batch = index, rows = batch.len(), error = %e, "batch failed");
                    BatchStatus::Failed {
                        status: None,
                        message: e.to_string(),
                    }
                }
            };
            report.batches.push(BatchOutcome {
                index,
                offset,
                rows: batch.len(),
                status,
            });
        }
        report
    }

    pub fn fetch_all(&self) -> Result<Vec<StoredTransaction>> {
        let url = format!("{}?select=*", self.endpoint);
        let resp = Self::check(self.request(reqwest::Method::GET, &url).send()?)?;
        Ok(resp.json()?)
    }

    pub fn delete(&self, id: &str) -> Result<()> {
        let resp = self
            .request(reqwest::Method::DELETE, &self.endpoint)
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=minimal")
            .send()?;
        Self::check(resp)?;
        Ok(())
    }

    /// Delete every stored row, one id at a time.
    pub fn purge(&self) -> Result<PurgeReport> {
        let rows = self.fetch_all()?;
        let mut deleted = 0;
        for row in &rows {
            let id = row.id_text();
            match self.delete(&id) {
                Ok(()) => deleted += 1,
                Err(e) => tracing::warn!(id = %id, error = %e, "delete failed"),
            }
        }
        Ok(PurgeReport {
            found: rows.len(),
            deleted,
        })
    }
}
