use crate::models::{display_value, ReportRow, StudentRecord};

pub fn average_score(scores: &[f64]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    let mean = scores.iter().sum::<f64>() / scores.len() as f64;
    round_to_cents(mean)
}

/// Halves go to the even cent, so `90.125` becomes `90.12`.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

pub fn score_students(students: &[StudentRecord]) -> Vec<ReportRow> {
    students
        .iter()
        .map(|student| ReportRow {
            id: display_value(&student.id),
            name: display_value(&student.name),
            average: average_score(&student.numeric_scores()),
        })
        .collect()
}

/// Highest average first; equal averages keep their input order.
pub fn rank_by_average(rows: &mut [ReportRow]) {
    rows.sort_by(|a, b| {
        b.average
            .partial_cmp(&a.average)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}
