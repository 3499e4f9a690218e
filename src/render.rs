use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use ctenroll::compute::{DerivedSummary, EnrollmentTableView, TableEntry, TargetStatus};

pub fn print_summary(summary: &DerivedSummary) {
    println!("Enrollment rate: {:.2}", summary.enrollment_rate);
    println!("Activation rate: {:.0}", summary.activation_rate);
    match summary.target_status {
        TargetStatus::Reached => {
            println!(
                "Enrollment duration: {} months",
                summary.enrollment_duration_months
            );
        }
        TargetStatus::ScreeningExhausted { shortfall } => {
            println!(
                "Enrollment duration: {} months (screening exhausted, {shortfall:.0} short of target)",
                summary.enrollment_duration_months
            );
        }
    }
    println!("Last subject dosed: {}", summary.last_subject_dosed_label);
    println!("Total screened: {:.0}", summary.total_screened_required);
}

pub fn print_projection_table(view: &EnrollmentTableView<'_>, target: i64) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            header_cell("Month"),
            header_cell("Date"),
            header_cell("Sites Activated"),
            header_cell("Active Sites"),
            header_cell("Screened"),
            header_cell("Screened (Cum.)"),
            header_cell("Enrolled"),
            header_cell("Enrolled (Cum.)"),
        ]);
    for index in [0, 2, 3, 4, 5, 6, 7] {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }

    for entry in &view.entries {
        match entry {
            TableEntry::Row { row, highlighted } => {
                let cells = vec![
                    Cell::new(row.month),
                    Cell::new(&row.label),
                    Cell::new(row.site_activation_this_month),
                    Cell::new(row.activation_cumulative),
                    Cell::new(row.screening_this_month),
                    Cell::new(row.screening_cumulative),
                    Cell::new(row.enrollment_this_month),
                    Cell::new(row.enrollment_cumulative),
                ];
                if *highlighted {
                    table.add_row(cells.into_iter().map(|cell| cell.fg(Color::Cyan)));
                } else {
                    table.add_row(cells);
                }
            }
            TableEntry::Gap { hidden_months } => {
                table.add_row(vec![
                    Cell::new("..."),
                    Cell::new(format!("{hidden_months} months hidden"))
                        .add_attribute(Attribute::Dim),
                ]);
            }
        }
    }

    let shown = view
        .entries
        .iter()
        .filter(|entry| matches!(entry, TableEntry::Row { .. }))
        .count();
    println!(
        "Projected {} months to reach {target} enrolled subjects{}",
        shown + view.hidden_months,
        if view.is_collapsed() {
            " (showing first 10 and last 5 months)"
        } else {
            ""
        }
    );
    println!("{table}");
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}
