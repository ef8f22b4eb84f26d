use oppgauge::dataset::{classify_column, is_reserved_column, ColumnRole, Dataset, SeedCell};
use oppgauge::error::DatasetError;
use oppgauge::table::{CellValue, Table};
use rstest::rstest;

fn make_table(columns: &[&str], rows: &[&[&str]]) -> Table {
    Table {
        columns: columns.iter().map(|c| c.to_string()).collect(),
        rows: rows
            .iter()
            .map(|row| row.iter().map(|c| CellValue::parse(c)).collect())
            .collect(),
    }
}

// --- VALIDATION FAILURES ---

#[test]
fn test_dataset_rejects_single_column() {
    let table = make_table(&["Opportunity"], &[&["Alpha"]]);
    let err = Dataset::from_table(table).unwrap_err();
    assert_eq!(err, DatasetError::TooFewColumns(1));
}

#[test]
fn test_dataset_rejects_empty_rows() {
    let table = make_table(&["Opportunity", "Speed"], &[]);
    let err = Dataset::from_table(table).unwrap_err();
    assert_eq!(err, DatasetError::NoRows);
}

#[test]
fn test_dataset_rejects_all_reserved_differentiators() {
    let table = make_table(
        &["Opportunity", "Score", "Total Score"],
        &[&["Alpha", "4", "9"]],
    );
    let err = Dataset::from_table(table).unwrap_err();
    assert_eq!(err, DatasetError::NoDifferentiators);
}

#[test]
fn test_dataset_rejects_blank_identifier_column() {
    let table = make_table(&["Opportunity", "Speed"], &[&["", "4"], &["  ", "5"]]);
    let err = Dataset::from_table(table).unwrap_err();
    assert_eq!(err, DatasetError::NoOpportunities("Opportunity".to_string()));
}

// --- RESERVED NAME FILTER ---

#[rstest]
#[case("Score", true)]
#[case("score", true)]
#[case("  SCORE ", true)]
#[case("Total Score", true)]
#[case("total score", true)]
#[case("  Total SCORE  ", true)]
#[case("Scores", false)]
#[case("score total", false)]
#[case("Speed", false)]
fn test_reserved_column_names(#[case] name: &str, #[case] expected: bool) {
    assert_eq!(
        is_reserved_column(name),
        expected,
        "reserved check failed for '{}'",
        name
    );
}

#[test]
fn test_column_role_round_trips_as_string() {
    use std::str::FromStr;
    assert_eq!(ColumnRole::Ignored.to_string(), "ignored");
    assert_eq!(
        ColumnRole::from_str("differentiator").unwrap(),
        ColumnRole::Differentiator
    );
}

#[test]
fn test_classify_column_roles() {
    // First column is the identifier even if it is literally named "Score".
    assert_eq!(classify_column(0, "Score"), ColumnRole::Identifier);
    assert_eq!(classify_column(1, "Speed"), ColumnRole::Differentiator);
    assert_eq!(classify_column(2, "Total Score"), ColumnRole::Ignored);
}

#[test]
fn test_reserved_columns_never_become_differentiators() {
    let table = make_table(
        &["Opportunity", "Speed", "Score", "Cost", "TOTAL SCORE"],
        &[&["Alpha", "4", "9", "2", "15"]],
    );
    let dataset = Dataset::from_table(table).unwrap();

    assert_eq!(dataset.differentiators(), &["Speed", "Cost"]);
    assert_eq!(dataset.ignored_columns(), &["Score", "TOTAL SCORE"]);
}

// --- OPPORTUNITY LIST & ROW LOOKUP ---

#[test]
fn test_opportunities_deduplicated_in_order() {
    let table = make_table(
        &["Opportunity", "Speed"],
        &[&["Beta", "1"], &["Alpha", "2"], &["Beta", "3"], &["", "4"]],
    );
    let dataset = Dataset::from_table(table).unwrap();
    assert_eq!(dataset.opportunities(), &["Beta", "Alpha"]);
}

#[test]
fn test_duplicate_identifier_first_row_wins() {
    let table = make_table(
        &["Opportunity", "Speed"],
        &[&["Beta", "1"], &["Beta", "5"]],
    );
    let dataset = Dataset::from_table(table).unwrap();

    match dataset.seed_cell("Beta", "Speed") {
        SeedCell::Value(CellValue::Number(n)) => assert_eq!(*n, 1.0),
        other => panic!("unexpected seed cell: {:?}", other),
    }
}

#[test]
fn test_numeric_identifiers_are_usable() {
    let table = make_table(&["Id", "Speed"], &[&["12", "4"], &["3.5", "2"]]);
    let dataset = Dataset::from_table(table).unwrap();
    assert_eq!(dataset.opportunities(), &["12", "3.5"]);
}

#[test]
fn test_seed_cell_misses() {
    let table = make_table(&["Opportunity", "Speed"], &[&["Alpha", "4"]]);
    let dataset = Dataset::from_table(table).unwrap();

    assert_eq!(dataset.seed_cell("Alpha", "Nope"), SeedCell::ColumnMissing);
    assert_eq!(
        dataset.seed_cell("Ghost", "Speed"),
        SeedCell::OpportunityMissing
    );
}
