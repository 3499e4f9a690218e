use serde::Serialize;

use crate::enrollment::types::EnrollmentMonthRow;

/// Chart-ready series keyed by month label: a flat target line plus
/// cumulative screening and enrollment
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentChart {
    pub labels: Vec<String>,
    pub target: Vec<f64>,
    pub screening_cumulative: Vec<f64>,
    pub enrollment_cumulative: Vec<f64>,
}

impl EnrollmentChart {
    pub fn from_rows(rows: &[EnrollmentMonthRow], total_enrollment_target: u32) -> Self {
        EnrollmentChart {
            labels: rows.iter().map(|row| row.label.clone()).collect(),
            target: vec![total_enrollment_target as f64; rows.len()],
            screening_cumulative: rows.iter().map(|row| row.screening_cumulative).collect(),
            enrollment_cumulative: rows.iter().map(|row| row.enrollment_cumulative).collect(),
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn series_follow_rows() {
        let rows: Vec<EnrollmentMonthRow> = (1..=3)
            .map(|month| EnrollmentMonthRow {
                month,
                date: NaiveDate::from_ymd_opt(2025, month, 1).expect("valid test date"),
                label: format!("M{month}"),
                site_activation_this_month: 0.,
                activation_cumulative: 0.,
                screening_this_month: 0.,
                screening_cumulative: 10. * month as f64,
                enrollment_this_month: 0.,
                enrollment_cumulative: 5. * month as f64,
            })
            .collect();
        let chart = EnrollmentChart::from_rows(&rows, 20);
        assert_eq!(chart.labels, vec!["M1", "M2", "M3"]);
        assert_eq!(chart.target, vec![20., 20., 20.]);
        assert_eq!(chart.screening_cumulative, vec![10., 20., 30.]);
        assert_eq!(chart.enrollment_cumulative, vec![5., 10., 15.]);
    }

    #[test]
    fn empty_rows_empty_chart() {
        let chart = EnrollmentChart::from_rows(&[], 20);
        assert!(chart.labels.is_empty());
        assert!(chart.target.is_empty());
    }
}
