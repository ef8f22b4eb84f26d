use crate::consts::RESERVED_COLUMNS;
use crate::error::DatasetError;
use crate::table::{CellValue, Table};
use std::collections::{HashMap, HashSet};
use strum_macros::{Display, EnumString};

/// Explicit role tag for each input column. The reserved-name match below
/// decides `Ignored`; everything after the identifier column that survives
/// it is a differentiator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum ColumnRole {
    Identifier,
    Differentiator,
    Ignored,
}

/// Trimmed, case-folded match against the reserved result-column names.
pub fn is_reserved_column(name: &str) -> bool {
    let folded = name.trim().to_lowercase();
    RESERVED_COLUMNS.iter().any(|r| folded == *r)
}

pub fn classify_column(index: usize, name: &str) -> ColumnRole {
    if index == 0 {
        ColumnRole::Identifier
    } else if is_reserved_column(name) {
        ColumnRole::Ignored
    } else {
        ColumnRole::Differentiator
    }
}

/// Outcome of a single seed-cell lookup during default derivation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeedCell<'a> {
    ColumnMissing,
    OpportunityMissing,
    Value(&'a CellValue),
}

/// A validated table: classified columns, the ordered opportunity list,
/// and a first-occurrence-wins row lookup for seed values.
#[derive(Debug, Clone)]
pub struct Dataset {
    identifier_column: String,
    differentiators: Vec<String>,
    ignored_columns: Vec<String>,
    opportunities: Vec<String>,
    col_index: HashMap<String, usize>,
    row_lookup: HashMap<String, usize>,
    table: Table,
}

impl Dataset {
    /// Validates the raw table and classifies its columns.
    ///
    /// Rejection order: too few columns, no data rows, no differentiators
    /// left after the reserved-name filter, no opportunity names in the
    /// first column. Duplicate opportunity identifiers keep their first
    /// row; later rows with the same name are never consulted.
    pub fn from_table(mut table: Table) -> Result<Dataset, DatasetError> {
        if table.columns.len() < 2 {
            return Err(DatasetError::TooFewColumns(table.columns.len()));
        }
        if table.rows.is_empty() {
            return Err(DatasetError::NoRows);
        }

        // Loaders already align rows to the header; re-align here so
        // hand-built tables uphold the same invariant.
        let width = table.columns.len();
        for row in &mut table.rows {
            row.truncate(width);
            row.resize(width, CellValue::Empty);
        }

        let identifier_column = table.columns[0].clone();

        let mut differentiators = Vec::new();
        let mut ignored_columns = Vec::new();
        let mut col_index = HashMap::new();

        for (idx, name) in table.columns.iter().enumerate() {
            col_index.entry(name.clone()).or_insert(idx);
            match classify_column(idx, name) {
                ColumnRole::Identifier => {}
                ColumnRole::Differentiator => differentiators.push(name.clone()),
                ColumnRole::Ignored => ignored_columns.push(name.clone()),
            }
        }

        if differentiators.is_empty() {
            return Err(DatasetError::NoDifferentiators);
        }

        let mut opportunities = Vec::new();
        let mut row_lookup = HashMap::new();
        let mut seen = HashSet::new();

        for (row_idx, row) in table.rows.iter().enumerate() {
            let Some(name) = identifier_of(&row[0]) else {
                continue;
            };
            if seen.insert(name.clone()) {
                opportunities.push(name.clone());
                row_lookup.insert(name, row_idx);
            }
        }

        if opportunities.is_empty() {
            return Err(DatasetError::NoOpportunities(identifier_column));
        }

        Ok(Dataset {
            identifier_column,
            differentiators,
            ignored_columns,
            opportunities,
            col_index,
            row_lookup,
            table,
        })
    }

    pub fn identifier_column(&self) -> &str {
        &self.identifier_column
    }

    /// All input columns, header order, before any filtering.
    pub fn columns(&self) -> &[String] {
        &self.table.columns
    }

    /// Candidate columns minus the reserved ones, input order.
    pub fn differentiators(&self) -> &[String] {
        &self.differentiators
    }

    /// Columns dropped by the reserved-name filter, input order.
    pub fn ignored_columns(&self) -> &[String] {
        &self.ignored_columns
    }

    /// Distinct first-column values, first-appearance order.
    pub fn opportunities(&self) -> &[String] {
        &self.opportunities
    }

    /// Seed value for one (opportunity, differentiator) pair.
    pub fn seed_cell(&self, opportunity: &str, differentiator: &str) -> SeedCell<'_> {
        let Some(&col) = self.col_index.get(differentiator) else {
            return SeedCell::ColumnMissing;
        };
        let Some(&row) = self.row_lookup.get(opportunity) else {
            return SeedCell::OpportunityMissing;
        };
        SeedCell::Value(&self.table.rows[row][col])
    }
}

/// Formats a numeric cell the way it reads in the file: no trailing ".0"
/// on whole numbers.
pub fn format_seed(n: f64) -> String {
    if n == n.trunc() && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

fn identifier_of(cell: &CellValue) -> Option<String> {
    match cell {
        CellValue::Empty => None,
        CellValue::Text(s) => Some(s.clone()),
        CellValue::Number(n) => Some(format_seed(*n)),
    }
}
