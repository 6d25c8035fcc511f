//! Render-boundary assembly.
//!
//! # Implementation Model
//!
//! [`build_chart`] runs the whole preparation for one package: pull the
//! observation list for the configured granularity, apply the windowed top-N
//! selector when a series limit is set, optionally normalize counts to
//! per-date shares, pivot into chronological rows, and assign one color per
//! series in display order.
//!
//! The output contract toward the presentation layer is [`ChartData`]: either
//! an explicit empty state, or a [`ChartModel`] carrying rows ascending by
//! date plus the ordered series list with per-label colors. The presentation
//! layer must not re-sort or re-filter either list.
//!
//! Preparation is a pure function of (observations, options) aside from
//! debug logging: no I/O, no awaits, and identical inputs always produce
//! identical output.

mod colors;
mod options;

pub use colors::{AvoidToken, Color, assign_colors, default_assigner};
pub use options::ChartOptions;

use crate::history::HistorySource;
use crate::model::{Measure, Row};
use crate::transform::{display_order, pivot_by_date, select_top_n, to_percentage};
use compact_str::CompactString;
use serde::{Deserialize, Serialize};

const LOG_TARGET: &str = "     chart";

/// One displayed series: its label and assigned color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Version bucket label, as shown in the legend.
    pub label: CompactString,

    /// Color assigned to this series.
    pub color: Color,
}

/// Render-ready chart content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartModel {
    /// One row per date, ascending by date.
    pub rows: Vec<Row>,

    /// Displayed series in display order — the order of first appearance in
    /// the raw input, which governs legend, stacking, and color assignment.
    pub series: Vec<ChartSeries>,
}

/// Outcome of chart preparation.
///
/// A package with zero surviving observations yields [`ChartData::Empty`], so
/// the presentation layer can show a neutral empty state instead of an empty
/// chart frame. This is distinct from "not yet loaded" or "error", neither of
/// which this crate produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChartData {
    /// No observations survived filtering; nothing to draw.
    Empty,

    /// A populated chart.
    Ready(ChartModel),
}

impl ChartData {
    /// Whether there is nothing to draw.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Prepare render-ready chart data for one package, assigning series colors
/// with the default assigner.
#[must_use]
pub fn build_chart(source: &dyn HistorySource, options: &ChartOptions) -> ChartData {
    build_chart_with(source, options, default_assigner)
}

/// Prepare render-ready chart data with a caller-supplied color assigner.
///
/// The assigner is invoked once per distinct series label, strictly in
/// display order, with the avoid token threaded from each call to the next.
pub fn build_chart_with<F>(source: &dyn HistorySource, options: &ChartOptions, assigner: F) -> ChartData
where
    F: FnMut(&str, Option<&AvoidToken>) -> (Color, AvoidToken),
{
    let raw = source.date_points(options.granularity);

    let selected = match options.max_versions_shown {
        Some(n) => select_top_n(raw, n, options.window_days),
        None => raw.to_vec(),
    };

    let measured = match options.measure {
        Measure::Percentage => to_percentage(&selected),
        Measure::TotalDownloads => selected,
    };

    let labels = display_order(&measured);
    let rows = pivot_by_date(&measured);

    if rows.is_empty() {
        log::debug!(target: LOG_TARGET, "No observations survived filtering for {} granularity", options.granularity);
        return ChartData::Empty;
    }

    log::debug!(
        target: LOG_TARGET,
        "Prepared {} rows across {} series at {} granularity",
        rows.len(),
        labels.len(),
        options.granularity
    );

    let colors = assign_colors(&labels, assigner);
    let series = labels
        .into_iter()
        .zip(colors)
        .map(|(label, color)| ChartSeries { label, color })
        .collect();

    ChartData::Ready(ChartModel { rows, series })
}
