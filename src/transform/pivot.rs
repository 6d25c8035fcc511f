use crate::model::{Observation, Row};
use compact_str::CompactString;
use std::collections::{BTreeMap, HashSet};

/// Distinct series labels in order of first appearance in `points`.
///
/// This order governs legend entries, stacking, and color assignment, and
/// must be computed over the same sequence that feeds the pivot.
#[must_use]
pub fn display_order(points: &[Observation]) -> Vec<CompactString> {
    let mut seen: HashSet<&CompactString> = HashSet::with_capacity(points.len().min(64));
    let mut order = Vec::new();
    for point in points {
        if seen.insert(&point.series) {
            order.push(point.series.clone());
        }
    }
    order
}

/// Pivot a flat observation list into one row per distinct date, with one
/// value per (date, series) pair present in the input.
///
/// Rows are emitted sorted by date ascending. Chronological order is part of
/// the rendering contract: an area renderer fed unsorted rows draws
/// non-monotonic connecting lines. Observations sharing a (date, series)
/// pair are summed — upstream densification guarantees at most one per pair,
/// but the tie-break stays deterministic if that guarantee is ever violated.
#[must_use]
pub fn pivot_by_date(points: &[Observation]) -> Vec<Row> {
    let mut rows: BTreeMap<i64, Row> = BTreeMap::new();
    for point in points {
        let row = rows.entry(point.date).or_insert_with(|| Row::new(point.date));
        *row.values.entry(point.series.clone()).or_insert(0.0) += point.count;
    }

    rows.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_row_per_date() {
        let points = vec![
            Observation::new(1, "1", 10.0),
            Observation::new(1, "2", 5.0),
            Observation::new(2, "1", 8.0),
        ];

        let rows = pivot_by_date(&points);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].date, 1);
        assert_eq!(rows[0].values.len(), 2);
        assert!((rows[0].values["1"] - 10.0).abs() < f64::EPSILON);
        assert!((rows[0].values["2"] - 5.0).abs() < f64::EPSILON);
        assert_eq!(rows[1].date, 2);
        assert_eq!(rows[1].values.len(), 1);
    }

    #[test]
    fn test_rows_are_chronological() {
        let points = vec![
            Observation::new(500, "a", 1.0),
            Observation::new(100, "a", 2.0),
            Observation::new(300, "a", 3.0),
            Observation::new(200, "a", 4.0),
        ];

        let rows = pivot_by_date(&points);
        let dates: Vec<i64> = rows.iter().map(|r| r.date).collect();

        assert_eq!(dates, vec![100, 200, 300, 500]);
    }

    #[test]
    fn test_duplicate_pairs_are_summed() {
        let points = vec![Observation::new(1, "a", 2.0), Observation::new(1, "a", 3.0)];

        let rows = pivot_by_date(&points);

        assert_eq!(rows.len(), 1);
        assert!((rows[0].values["a"] - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_pivot_is_idempotent() {
        let points = vec![
            Observation::new(2, "b", 4.0),
            Observation::new(1, "a", 1.0),
            Observation::new(1, "b", 2.0),
            Observation::new(2, "a", 3.0),
        ];

        let rows = pivot_by_date(&points);

        // Re-flatten the pivoted rows and pivot again.
        let flattened: Vec<Observation> = rows
            .iter()
            .flat_map(|row| {
                row.values
                    .iter()
                    .map(|(series, &count)| Observation::new(row.date, series.clone(), count))
            })
            .collect();

        assert_eq!(pivot_by_date(&flattened), rows);
    }

    #[test]
    fn test_empty_input() {
        assert!(pivot_by_date(&[]).is_empty());
    }

    #[test]
    fn test_display_order_is_first_discovery() {
        let points = vec![
            Observation::new(5, "c", 1.0),
            Observation::new(1, "a", 1.0),
            Observation::new(3, "b", 1.0),
            Observation::new(2, "a", 1.0),
            Observation::new(4, "c", 1.0),
        ];

        let order = display_order(&points);

        assert_eq!(order, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_display_order_empty() {
        assert!(display_order(&[]).is_empty());
    }
}
