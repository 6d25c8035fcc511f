use crate::model::Observation;
use std::collections::HashMap;

/// Rescale every count to its share of the total across all series sharing
/// the same date in `points`.
///
/// Totals are computed over the input list itself — post-selection and
/// post-densification, zero-filled entries included — so shares reflect only
/// what is being displayed, never series that were filtered out upstream.
///
/// A date whose displayed series sum to zero yields not-a-number shares
/// rather than a silently substituted zero; the rendering layer decides how
/// to present such points.
#[must_use]
pub fn to_percentage(points: &[Observation]) -> Vec<Observation> {
    let mut totals: HashMap<i64, f64> = HashMap::with_capacity(points.len());
    for point in points {
        *totals.entry(point.date).or_insert(0.0) += point.count;
    }

    points
        .iter()
        .map(|point| {
            let total = totals.get(&point.date).copied().unwrap_or_default();
            Observation::new(point.date, point.series.clone(), point.count / total)
        })
        .collect()
}
