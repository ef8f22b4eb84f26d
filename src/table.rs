use crate::error::{GaugeError, GaugeResult};
use serde::Deserialize;
use std::fs::File;
use std::path::Path;
use tracing::{debug, warn};

/// One cell of the input table, after trimming.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Number(f64),
    Text(String),
}

impl CellValue {
    /// Classifies a raw string cell. Anything that parses as a finite real
    /// number becomes `Number`; blank cells become `Empty`.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return CellValue::Empty;
        }
        match trimmed.parse::<f64>() {
            Ok(n) if n.is_finite() => CellValue::Number(n),
            _ => CellValue::Text(trimmed.to_string()),
        }
    }
}

/// Raw tabular input: a header row plus data rows aligned to it.
/// Rows are padded or truncated to the header width at load time.
#[derive(Debug, Clone)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

#[derive(Debug, Deserialize)]
struct JsonTable {
    columns: Vec<String>,
    rows: Vec<Vec<serde_json::Value>>,
}

impl Table {
    /// Loads a table from disk, dispatching on the file extension.
    ///
    /// `.csv` and `.json` are supported. Spreadsheet formats raise
    /// `Dependency` (convert the file, don't fix it); everything else is
    /// an unsupported format.
    pub fn load(path: &Path) -> GaugeResult<Table> {
        if !path.exists() {
            return Err(GaugeError::FileMissing(path.display().to_string()));
        }

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("csv") => Table::load_csv(path),
            Some("json") => Table::load_json(path),
            Some("xlsx") | Some("xls") | Some("ods") => Err(GaugeError::Dependency(format!(
                "spreadsheet reading is not built in; export '{}' as CSV (first sheet) and retry",
                path.display()
            ))),
            other => Err(GaugeError::Validation(format!(
                "unsupported table format '{}' for '{}'; expected .csv or .json",
                other.unwrap_or("<none>"),
                path.display()
            ))),
        }
    }

    pub fn load_csv(path: &Path) -> GaugeResult<Table> {
        let file = File::open(path)?;

        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .has_headers(true)
            .from_reader(file);

        let columns: Vec<String> = rdr
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        let mut skipped_count = 0;
        let mut row_idx = 0;

        for result in rdr.records() {
            row_idx += 1;
            match result {
                Ok(rec) => {
                    let mut row: Vec<CellValue> =
                        rec.iter().take(columns.len()).map(CellValue::parse).collect();
                    row.resize(columns.len(), CellValue::Empty);
                    rows.push(row);
                }
                Err(e) => {
                    skipped_count += 1;
                    warn!("[Row {}] CSV Parse Error: {}", row_idx, e);
                }
            }
        }

        if skipped_count > 0 {
            warn!("Skipped {} unreadable rows in '{}'.", skipped_count, path.display());
        }
        debug!("Loaded {} rows x {} columns from '{}'.", rows.len(), columns.len(), path.display());

        Ok(Table { columns, rows })
    }

    /// JSON tables carry an explicit `columns` array so column order
    /// survives the round trip: `{"columns": [...], "rows": [[...], ...]}`.
    pub fn load_json(path: &Path) -> GaugeResult<Table> {
        let file = File::open(path)?;
        let raw: JsonTable = serde_json::from_reader(file)?;

        let columns: Vec<String> = raw.columns.iter().map(|c| c.trim().to_string()).collect();

        let mut rows = Vec::new();
        for values in raw.rows {
            let mut row: Vec<CellValue> = values
                .into_iter()
                .take(columns.len())
                .map(json_value_to_cell)
                .collect();
            row.resize(columns.len(), CellValue::Empty);
            rows.push(row);
        }

        debug!("Loaded {} rows x {} columns from '{}'.", rows.len(), columns.len(), path.display());

        Ok(Table { columns, rows })
    }
}

fn json_value_to_cell(value: serde_json::Value) -> CellValue {
    match value {
        serde_json::Value::Null => CellValue::Empty,
        serde_json::Value::Number(n) => match n.as_f64() {
            Some(f) if f.is_finite() => CellValue::Number(f),
            _ => CellValue::Text(n.to_string()),
        },
        serde_json::Value::String(s) => CellValue::parse(&s),
        serde_json::Value::Bool(b) => CellValue::Text(b.to_string()),
        other => CellValue::Text(other.to_string()),
    }
}
