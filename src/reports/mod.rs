// ===== oppgauge/src/reports/mod.rs =====
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use oppgauge::consts::{RATING_MAX, RATING_MIN};
use oppgauge::dataset::{classify_column, Dataset};
use oppgauge::session::RatingSession;

const BAR_WIDTH: usize = 40;

pub fn print_dataset_summary(dataset: &Dataset) {
    let mut roles = Table::new();
    roles
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    roles.add_row(vec![
        Cell::new("Column").add_attribute(Attribute::Bold),
        Cell::new("Role").add_attribute(Attribute::Bold),
    ]);
    for (idx, name) in dataset.columns().iter().enumerate() {
        let role = classify_column(idx, name);
        roles.add_row(vec![Cell::new(name), Cell::new(role.to_string())]);
    }
    println!("\n{}", roles);

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Identifier Column").add_attribute(Attribute::Bold),
        Cell::new(dataset.identifier_column()),
    ]);
    table.add_row(vec![
        Cell::new("Opportunities").add_attribute(Attribute::Bold),
        Cell::new(dataset.opportunities().join(", ")),
    ]);
    table.add_row(vec![
        Cell::new("Differentiators").add_attribute(Attribute::Bold),
        Cell::new(dataset.differentiators().join(", ")),
    ]);
    if !dataset.ignored_columns().is_empty() {
        table.add_row(vec![
            Cell::new("Excluded (reserved)").fg(Color::Yellow),
            Cell::new(dataset.ignored_columns().join(", ")).fg(Color::Yellow),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_notes(notes: &[String]) {
    if notes.is_empty() {
        println!("\nNo diagnostics: every seed value was usable as-is.");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.add_row(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new(format!("Diagnostics ({})", notes.len())).add_attribute(Attribute::Bold),
    ]);
    for (i, note) in notes.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1).set_alignment(CellAlignment::Right),
            Cell::new(note).fg(Color::Yellow),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_ranking(ranked: &[(String, i64)], differentiator_count: usize) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let max_possible = RATING_MAX * differentiator_count as i64;
    table.add_row(vec![
        Cell::new("Rank").add_attribute(Attribute::Bold),
        Cell::new("Business Opportunity").add_attribute(Attribute::Bold),
        Cell::new(format!("Total (max {})", max_possible)).fg(Color::Cyan),
    ]);

    for i in 1..=2 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Left);
        }
    }
    if let Some(col) = table.column_mut(2) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    for (idx, (name, total)) in ranked.iter().enumerate() {
        let name_cell = if idx == 0 {
            Cell::new(name).fg(Color::Green).add_attribute(Attribute::Bold)
        } else {
            Cell::new(name).add_attribute(Attribute::Bold)
        };
        table.add_row(vec![
            Cell::new(idx + 1).set_alignment(CellAlignment::Right),
            name_cell,
            Cell::new(total).fg(Color::Cyan),
        ]);
    }
    println!("\n{}", table);
}

/// Horizontal text bars, widest = highest total.
pub fn print_bar_chart(ranked: &[(String, i64)]) {
    let Some(max_total) = ranked.iter().map(|(_, t)| *t).max() else {
        println!("\nNo results to chart.");
        return;
    };
    if max_total <= 0 {
        println!("\nNo results to chart.");
        return;
    }

    let label_width = ranked.iter().map(|(n, _)| n.len()).max().unwrap_or(0);

    println!("\nScore Comparison:");
    for (name, total) in ranked {
        let len = ((*total as f64 / max_total as f64) * BAR_WIDTH as f64).round() as usize;
        println!("  {:label_width$} | {} {}", name, "█".repeat(len), total);
    }
}

/// Opportunities as rows, differentiators as columns, one derived rating
/// per cell. Boundary values are tinted so clamps stand out.
pub fn print_rating_grid(session: &RatingSession) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![Cell::new("Opportunity").add_attribute(Attribute::Bold)];
    for differentiator in session.differentiators() {
        header.push(Cell::new(differentiator).add_attribute(Attribute::Bold));
    }
    table.add_row(header);

    for i in 1..=session.differentiators().len() {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for opportunity in session.opportunities() {
        let mut row = vec![Cell::new(opportunity).add_attribute(Attribute::Bold)];
        for differentiator in session.differentiators() {
            let cell = match session.rating(opportunity, differentiator) {
                Some(r) if r == RATING_MAX => Cell::new(r).fg(Color::Green),
                Some(r) if r == RATING_MIN => Cell::new(r).fg(Color::Red),
                Some(r) => Cell::new(r),
                None => Cell::new("-"),
            };
            row.push(cell);
        }
        table.add_row(row);
    }
    println!("\n{}", table);
}
