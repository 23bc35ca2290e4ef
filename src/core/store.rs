//! Wallet Score Store
//!
//! Loads the precomputed score table once and serves it read-only. The
//! store is built before the server binds and then shared behind an `Arc`;
//! nothing mutates it afterwards, so request handlers read it without
//! locking.

use csv::{ReaderBuilder, StringRecord, Trim};
use serde_json::{Map, Number, Value};
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::models::errors::{AppError, AppResult, ErrorCode};
use crate::models::types::WalletRecord;
use crate::utils::constants::{
    COLUMN_ILLICIT_RATIO, COLUMN_MAX_SCORE, COLUMN_RISK_LEVEL, COLUMN_WALLET_SCORE,
    REQUIRED_COLUMNS,
};

/// Immutable in-memory score table
#[derive(Debug, Clone, Default)]
pub struct WalletStore {
    /// Header names in source order
    columns: Vec<String>,
    /// Rows in source order
    records: Vec<WalletRecord>,
    /// wallet_id -> row index of its first occurrence
    index: HashMap<String, usize>,
}

impl WalletStore {
    /// Load the score table from a CSV file
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            AppError::with_source(
                ErrorCode::DataSourceMissing,
                format!("Cannot open score table {}", path.display()),
                e,
            )
        })?;

        let store = Self::from_reader(file)?;

        info!(
            path = %path.display(),
            wallets = store.len(),
            columns = store.columns.len(),
            "📊 Score table loaded"
        );

        Ok(store)
    }

    /// Parse a score table from any CSV byte source
    pub fn from_reader<R: Read>(reader: R) -> AppResult<Self> {
        let mut rdr = ReaderBuilder::new().trim(Trim::Headers).from_reader(reader);

        let columns: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
        let layout = ColumnLayout::resolve(&columns)?;

        let mut records = Vec::new();
        for row in rdr.records() {
            records.push(layout.parse_row(&row?)?);
        }

        Ok(Self::build(columns, records))
    }

    /// Build a store from already-typed rows.
    ///
    /// Columns are the required ones followed by every extra column in the
    /// order it is first seen.
    pub fn from_records(records: Vec<WalletRecord>) -> Self {
        let mut columns: Vec<String> = REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect();
        for record in &records {
            for key in record.extra.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }

        Self::build(columns, records)
    }

    fn build(columns: Vec<String>, records: Vec<WalletRecord>) -> Self {
        let mut index = HashMap::with_capacity(records.len());
        let mut duplicates = 0usize;

        for (row, record) in records.iter().enumerate() {
            if index.contains_key(&record.wallet_id) {
                duplicates += 1;
                debug!(wallet_id = %record.wallet_id, row, "Duplicate wallet_id ignored by index");
            } else {
                index.insert(record.wallet_id.clone(), row);
            }
        }

        if duplicates > 0 {
            warn!(
                duplicates,
                "⚠️ Score table has duplicate wallet_id rows; lookups resolve to the first"
            );
        }

        Self {
            columns,
            records,
            index,
        }
    }

    /// All rows, source order
    pub fn records(&self) -> &[WalletRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Header names, source order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// The `wallet_score` column
    pub fn wallet_scores(&self) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().map(|r| r.wallet_score)
    }

    /// Row index of the first record with this exact wallet_id
    pub fn position(&self, wallet_id: &str) -> Option<usize> {
        self.index.get(wallet_id).copied()
    }

    pub fn get(&self, row: usize) -> Option<&WalletRecord> {
        self.records.get(row)
    }
}

/// Header positions resolved once per load
struct ColumnLayout {
    wallet_id: usize,
    wallet_score: usize,
    illicit_ratio: usize,
    max_score: usize,
    extras: Vec<(usize, String)>,
}

impl ColumnLayout {
    fn resolve(columns: &[String]) -> AppResult<Self> {
        let mut seen = HashSet::with_capacity(columns.len());
        for name in columns {
            if !seen.insert(name.as_str()) {
                return Err(AppError::malformed(format!(
                    "duplicate column {:?} in header",
                    name
                )));
            }
        }
        if seen.contains(COLUMN_RISK_LEVEL) {
            return Err(AppError::malformed(format!(
                "column {:?} is reserved for the computed risk level",
                COLUMN_RISK_LEVEL
            )));
        }

        let positions = REQUIRED_COLUMNS.map(|name| columns.iter().position(|c| c == name));
        let [Some(wallet_id), Some(wallet_score), Some(illicit_ratio), Some(max_score)] =
            positions
        else {
            let missing: Vec<&str> = REQUIRED_COLUMNS
                .iter()
                .zip(positions)
                .filter(|(_, pos)| pos.is_none())
                .map(|(name, _)| *name)
                .collect();
            return Err(AppError::missing_columns(&missing));
        };

        let fixed = [wallet_id, wallet_score, illicit_ratio, max_score];
        let extras = columns
            .iter()
            .enumerate()
            .filter(|(i, _)| !fixed.contains(i))
            .map(|(i, name)| (i, name.clone()))
            .collect();

        Ok(Self {
            wallet_id,
            wallet_score,
            illicit_ratio,
            max_score,
            extras,
        })
    }

    fn parse_row(&self, row: &StringRecord) -> AppResult<WalletRecord> {
        let line = row.position().map(|p| p.line()).unwrap_or_default();
        let field = |idx: usize| row.get(idx).unwrap_or_default();

        let number = |idx: usize, column: &str| -> AppResult<f64> {
            let raw = field(idx).trim();
            match raw.parse::<f64>() {
                Ok(value) if value.is_finite() => Ok(value),
                _ => Err(AppError::malformed(format!(
                    "line {}: column {} is not a finite number ({:?})",
                    line, column, raw
                ))),
            }
        };

        let mut extra = Map::new();
        for (idx, name) in &self.extras {
            extra.insert(name.clone(), infer_value(field(*idx)));
        }

        Ok(WalletRecord {
            wallet_id: field(self.wallet_id).to_string(),
            wallet_score: number(self.wallet_score, COLUMN_WALLET_SCORE)?,
            illicit_ratio: number(self.illicit_ratio, COLUMN_ILLICIT_RATIO)?,
            max_score: number(self.max_score, COLUMN_MAX_SCORE)?,
            extra,
        })
    }
}

/// Type a pass-through cell: empty -> null, then integer, float, bool, string
fn infer_value(raw: &str) -> Value {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Value::Null;
    }
    if let Ok(int) = trimmed.parse::<i64>() {
        return Value::from(int);
    }
    if let Some(num) = trimmed.parse::<f64>().ok().and_then(Number::from_f64) {
        return Value::Number(num);
    }
    if trimmed.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if trimmed.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }
    Value::String(raw.to_string())
}
