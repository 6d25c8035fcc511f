use crate::model::Observation;
use compact_str::CompactString;
use core::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Milliseconds in one day.
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Restrict `points` to the `n` series with the greatest aggregate count over
/// the trailing `window_days`, densified so that every selected series has a
/// value on every date present in the result.
///
/// The window trails back from the latest observed date, so a window longer
/// than the observed range simply ranks over the whole dataset. Ranking uses
/// a stable sort: series with equal totals keep their relative order of first
/// appearance within the window.
///
/// The output lists dates ascending and, within each date, series in display
/// order — the order each selected series first appears in the raw input,
/// regardless of its rank. Missing (date, series) combinations are filled
/// with a zero count; duplicate combinations are summed.
#[must_use]
pub fn select_top_n(points: &[Observation], n: usize, window_days: u32) -> Vec<Observation> {
    let latest_date = points.iter().map(|p| p.date).max().unwrap_or(0);
    let window_start = latest_date - i64::from(window_days) * MILLIS_PER_DAY;

    // Accumulate in-window totals per series. Insertion order is preserved so
    // the stable ranking below breaks ties by first in-window appearance.
    let mut totals: Vec<(CompactString, f64)> = Vec::new();
    let mut total_index: HashMap<CompactString, usize> = HashMap::new();
    for point in points {
        if point.date >= window_start {
            match total_index.entry(point.series.clone()) {
                Entry::Occupied(entry) => totals[*entry.get()].1 += point.count,
                Entry::Vacant(entry) => {
                    let _ = entry.insert(totals.len());
                    totals.push((point.series.clone(), point.count));
                }
            }
        }
    }

    // Rank ascending by total; the selected series are the top n from the
    // high end. Counts are non-negative by precondition, so the comparison
    // never sees NaN.
    totals.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));
    let selected: HashSet<&CompactString> = totals.iter().rev().take(n).map(|(series, _)| series).collect();

    // Display order is first appearance in the unfiltered input, not rank.
    // Legends and stacking downstream rely on this order.
    let mut display_order: Vec<CompactString> = Vec::with_capacity(selected.len());
    for point in points {
        if selected.contains(&point.series) && !display_order.contains(&point.series) {
            display_order.push(point.series.clone());
        }
    }

    // Group the retained points by date, summing duplicate (date, series)
    // pairs rather than dropping them.
    let mut by_date: BTreeMap<i64, HashMap<CompactString, f64>> = BTreeMap::new();
    for point in points {
        if selected.contains(&point.series) {
            *by_date
                .entry(point.date)
                .or_default()
                .entry(point.series.clone())
                .or_insert(0.0) += point.count;
        }
    }

    let mut result = Vec::with_capacity(by_date.len() * display_order.len());
    for (&date, counts) in &by_date {
        for series in &display_order {
            let count = counts.get(series).copied().unwrap_or(0.0);
            result.push(Observation::new(date, series.clone(), count));
        }
    }

    result
}
