use crate::enrollment::types::EnrollmentMonthRow;

/// Collapsed tables keep this many leading months
pub const LEADING_MONTHS: usize = 10;
/// Collapsed tables keep this many trailing months, which are also highlighted
pub const TRAILING_MONTHS: usize = 5;
/// Tables up to this length are never collapsed
pub const COLLAPSE_THRESHOLD: usize = LEADING_MONTHS + TRAILING_MONTHS;

#[derive(Debug, Clone, PartialEq)]
pub enum TableEntry<'a> {
    Row {
        row: &'a EnrollmentMonthRow,
        highlighted: bool,
    },
    /// Placeholder for months left out of a collapsed table
    Gap { hidden_months: usize },
}

/// Rows to display for a projection table. Long projections collapse to
/// their first and last months unless expanded.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrollmentTableView<'a> {
    pub entries: Vec<TableEntry<'a>>,
    pub hidden_months: usize,
}

impl<'a> EnrollmentTableView<'a> {
    pub fn new(rows: &'a [EnrollmentMonthRow], expanded: bool) -> Self {
        let n_rows = rows.len();
        let highlight_from = n_rows.saturating_sub(TRAILING_MONTHS);
        let entry = move |(i, row): (usize, &'a EnrollmentMonthRow)| TableEntry::Row {
            row,
            highlighted: i >= highlight_from,
        };

        if expanded || n_rows <= COLLAPSE_THRESHOLD {
            return EnrollmentTableView {
                entries: rows.iter().enumerate().map(entry).collect(),
                hidden_months: 0,
            };
        }

        let hidden_months = n_rows - COLLAPSE_THRESHOLD;
        let mut entries: Vec<TableEntry<'a>> = rows
            .iter()
            .enumerate()
            .take(LEADING_MONTHS)
            .map(entry)
            .collect();
        entries.push(TableEntry::Gap { hidden_months });
        entries.extend(rows.iter().enumerate().skip(highlight_from).map(entry));

        EnrollmentTableView {
            entries,
            hidden_months,
        }
    }

    pub fn is_collapsed(&self) -> bool {
        self.hidden_months > 0
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::util::calendar::{add_months, month_label};
    use chrono::NaiveDate;

    fn rows(n: u32) -> Vec<EnrollmentMonthRow> {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid test date");
        (1..=n)
            .map(|month| {
                let date = add_months(start, month - 1).expect("valid row date");
                EnrollmentMonthRow {
                    month,
                    date,
                    label: month_label(date),
                    site_activation_this_month: 0.,
                    activation_cumulative: 0.,
                    screening_this_month: 0.,
                    screening_cumulative: 0.,
                    enrollment_this_month: 0.,
                    enrollment_cumulative: month as f64,
                }
            })
            .collect()
    }

    fn months(view: &EnrollmentTableView) -> Vec<Option<u32>> {
        view.entries
            .iter()
            .map(|entry| match entry {
                TableEntry::Row { row, .. } => Some(row.month),
                TableEntry::Gap { .. } => None,
            })
            .collect()
    }

    #[test]
    fn short_table_not_collapsed() {
        let rows = rows(15);
        let view = EnrollmentTableView::new(&rows, false);
        assert!(!view.is_collapsed());
        assert_eq!(view.entries.len(), 15);
    }

    #[test]
    fn long_table_collapsed() {
        let rows = rows(20);
        let view = EnrollmentTableView::new(&rows, false);
        assert!(view.is_collapsed());
        assert_eq!(view.hidden_months, 5);

        let mut expected: Vec<Option<u32>> = (1..=10).map(Some).collect();
        expected.push(None);
        expected.extend((16..=20).map(Some));
        assert_eq!(months(&view), expected);
        assert_eq!(view.entries[10], TableEntry::Gap { hidden_months: 5 });
    }

    #[test]
    fn expanded_table_shows_everything() {
        let rows = rows(20);
        let view = EnrollmentTableView::new(&rows, true);
        assert_eq!(view.entries.len(), 20);
        assert_eq!(view.hidden_months, 0);
    }

    #[test]
    fn last_months_highlighted() {
        let rows = rows(8);
        let view = EnrollmentTableView::new(&rows, false);
        let highlighted: Vec<bool> = view
            .entries
            .iter()
            .map(|entry| matches!(entry, TableEntry::Row { highlighted: true, .. }))
            .collect();
        assert_eq!(
            highlighted,
            vec![false, false, false, true, true, true, true, true]
        );
    }
}
