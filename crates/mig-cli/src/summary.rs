use std::path::Path;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use mig_model::{OriginAggregate, RankedCounty};
use mig_report::{ColumnTotal, WrittenReport};

use mig_cli::pipeline::{LoadSummary, PipelineOutcome};

pub fn print_load_summary(load: &LoadSummary, states_path: &Path) {
    println!("Loaded data: {} rows, {} counties", load.rows, load.counties);
    println!(
        "Loaded {} US states/territories from {}",
        load.states,
        states_path.display()
    );
    if load.excluded_rows > 0 {
        println!("Excluded {} destination rows", load.excluded_rows);
    }
    if load.skipped_counts > 0 {
        println!("Read {} unparsable counts as zero", load.skipped_counts);
    }
}

/// Completion lines and top-N tables for every written report.
pub fn print_analysis_summary(outcome: &PipelineOutcome, rows: usize) {
    let outputs = &outcome.outputs;

    println!();
    print_completion("overall migration data", &outputs.overall);
    println!("Top {rows} origin states/regions:");
    println!("{}", origins_table(&outcome.analysis.origins, rows));

    println!();
    print_completion("county migration data", &outputs.county_summary);
    println!("Top {rows} counties by total migration:");
    println!("{}", counties_table(&outcome.analysis.counties, rows));

    println!();
    if let Some(first) = outputs.details.first()
        && let Some(dir) = first.path.parent()
    {
        println!("Saved detailed county files to {}", dir.display());
    }
    println!("Generated {} county-specific CSV files", outputs.details.len());

    for cross_tab in &outputs.cross_tabs {
        println!(
            "Saved top {} origins for top {} counties to {} ({} rows)",
            cross_tab.spec.origins,
            cross_tab.spec.counties,
            cross_tab.report.path.display(),
            cross_tab.report.rows
        );
    }
    print_completion("top county totals", &outputs.county_totals);

    println!();
    println!(
        "Analysis complete! Reports written under {}",
        outputs
            .overall
            .path
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .display()
    );
}

pub fn print_verify_summary(total: &ColumnTotal) {
    println!("File: {}", total.path.display());
    println!("Rows processed: {}", total.rows);
    println!("Skipped rows (non-numeric): {}", total.skipped);
    println!("Total {}: {}", total.column, total.total);
}

fn print_completion(label: &str, report: &WrittenReport) {
    println!(
        "Saved {label} to {} ({} rows)",
        report.path.display(),
        report.rows
    );
}

fn origins_table(origins: &[OriginAggregate], rows: usize) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Origin"), header_cell("Inbound")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for origin in origins.iter().take(rows) {
        table.add_row(vec![
            Cell::new(&origin.origin_state),
            Cell::new(origin.inbound_from_state),
        ]);
    }
    table
}

fn counties_table(counties: &[RankedCounty], rows: usize) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rank"),
        header_cell("County"),
        header_cell("Total"),
        header_cell("Internal"),
        header_cell("External"),
        header_cell("% Internal"),
        header_cell("% External"),
    ]);
    apply_table_style(&mut table);
    for index in [0, 2, 3, 4, 5, 6] {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for ranked in counties.iter().take(rows) {
        let summary = &ranked.summary;
        table.add_row(vec![
            Cell::new(ranked.rank).fg(Color::DarkGrey),
            Cell::new(&summary.county),
            Cell::new(summary.total_migration).add_attribute(Attribute::Bold),
            Cell::new(summary.total_internal_migration),
            Cell::new(summary.total_external_migration),
            Cell::new(format!("{:.2}", summary.pct_internal)),
            Cell::new(format!("{:.2}", summary.pct_external)),
        ]);
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
