//! Terminal rendering of comparison reports and the guideline table.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use wq_model::{ComparisonReport, ComplianceStatus, Limit};
use wq_standards::GuidelineRegistry;

pub fn print_report(report: &ComparisonReport) {
    if report.is_empty() {
        println!("No readings provided; nothing to compare.");
        return;
    }
    println!("{}", report_table(report));
    let exceedances = report.exceedance_count();
    if exceedances > 0 {
        println!(
            "{exceedances} of {} parameter(s) exceed at least one guideline.",
            report.rows.len()
        );
    } else {
        println!("All {} parameter(s) within both guidelines.", report.rows.len());
    }
}

/// Build the comparison table: one row per parameter with data.
pub fn report_table(report: &ComparisonReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Parameter"),
        header_cell("Avg Value"),
        header_cell("WHO Limit"),
        header_cell("WHO Status"),
        header_cell("ECR Limit"),
        header_cell("ECR Status"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Center);
    for row in &report.rows {
        table.add_row(vec![
            Cell::new(&row.parameter),
            Cell::new(format_number(row.mean)),
            Cell::new(row.who_limit),
            status_cell(row.who_status),
            Cell::new(row.ecr_limit),
            status_cell(row.ecr_status),
        ]);
    }
    table
}

pub fn print_parameters(registry: &GuidelineRegistry) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Parameter"),
        header_cell("WHO Limit"),
        header_cell("ECR Limit"),
        header_cell("Kind"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for entry in registry.iter() {
        let kind = match entry.who {
            Limit::Scalar { .. } => "upper bound",
            Limit::Range { .. } => "range",
        };
        table.add_row(vec![
            Cell::new(entry.name),
            Cell::new(entry.who),
            Cell::new(entry.ecr),
            Cell::new(kind),
        ]);
    }
    println!("{table}");
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

fn status_cell(status: ComplianceStatus) -> Cell {
    match status {
        ComplianceStatus::Ok => Cell::new("OK").fg(Color::Green),
        ComplianceStatus::Exceeds => Cell::new("Exceeds")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
    }
}

/// Compact mean formatting: up to three decimals, trailing zeros trimmed.
pub fn format_number(value: f64) -> String {
    let mut text = format!("{value:.3}");
    if text.contains('.') {
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use wq_model::ComparisonRow;

    #[test]
    fn numbers_render_without_trailing_zeros() {
        assert_eq!(format_number(6.0), "6");
        assert_eq!(format_number(3.5), "3.5");
        assert_eq!(format_number(6.1000000001), "6.1");
        assert_eq!(format_number(0.05), "0.05");
    }

    #[test]
    fn report_table_has_one_line_per_row() {
        let limit = Limit::scalar(5.0);
        let report = ComparisonReport {
            rows: vec![ComparisonRow {
                parameter: "Turbidity (NTU)".to_string(),
                mean: 3.5,
                who_limit: limit,
                who_status: limit.check(3.5),
                ecr_limit: Limit::scalar(10.0),
                ecr_status: ComplianceStatus::Ok,
            }],
        };
        let rendered = report_table(&report).to_string();
        assert!(rendered.contains("Turbidity (NTU)"));
        assert!(rendered.contains("3.5"));
        assert!(rendered.contains("OK"));
    }
}
