//! Read-only summaries over a filtered [`RowView`]: the chipset ranking, the
//! screen-size histogram and the two KPIs.

use std::collections::{BTreeMap, HashMap};

use super::filter::RowView;
use super::model::columns;
use super::transform::round_to;
use crate::error::Result;

/// Number of chipsets shown in the ranking.
pub const TOP_CHIPSETS: usize = 15;

/// Points the density overlay is evaluated on.
const DENSITY_POINTS: usize = 200;

// ---------------------------------------------------------------------------
// Chipset ranking
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct ChipsetCount {
    pub chipset: String,
    pub count: usize,
}

/// Rows per chipset, descending, at most `top_n` entries.
/// Ties keep first-seen order. Rows with no chipset are not grouped.
pub fn chipset_ranking(view: &RowView<'_>, top_n: usize) -> Result<Vec<ChipsetCount>> {
    view.table.require_column(columns::CHIPSET)?;

    let mut slot: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<ChipsetCount> = Vec::new();
    for chipset in view.phones().filter_map(|p| p.category(columns::CHIPSET)) {
        match slot.get(&chipset) {
            Some(&i) => counts[i].count += 1,
            None => {
                slot.insert(chipset.clone(), counts.len());
                counts.push(ChipsetCount { chipset, count: 1 });
            }
        }
    }

    // `sort_by` is stable.
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(top_n);
    Ok(counts)
}

// ---------------------------------------------------------------------------
// Screen-size histogram
// ---------------------------------------------------------------------------

/// One brand's share of each bin.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramLayer {
    pub brand: String,
    pub counts: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScreenSizeHistogram {
    /// `bins + 1` ascending edges.
    pub edges: Vec<f64>,
    /// Per-brand counts; stacking them gives `totals`.
    pub layers: Vec<HistogramLayer>,
    pub totals: Vec<usize>,
    /// `[x, y]` points of the KDE, in count units.
    pub density: Vec<[f64; 2]>,
}

impl ScreenSizeHistogram {
    pub fn bin_count(&self) -> usize {
        self.edges.len().saturating_sub(1)
    }

    pub fn bin_width(&self) -> f64 {
        match self.edges.as_slice() {
            [first, second, ..] => second - first,
            _ => 0.0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.totals.iter().all(|&c| c == 0)
    }
}

/// Histogram of `Screen Size`, stacked by brand, with a KDE overlay.
pub fn screen_size_histogram(view: &RowView<'_>) -> Result<ScreenSizeHistogram> {
    view.table.require_column(columns::SCREEN_SIZE)?;

    let samples: Vec<(String, f64)> = view
        .phones()
        .filter_map(|p| {
            let size = p.number(columns::SCREEN_SIZE).filter(|v| v.is_finite())?;
            let brand = p.category(columns::BRAND).unwrap_or_default();
            Some((brand, size))
        })
        .collect();

    let mut values: Vec<f64> = samples.iter().map(|(_, v)| *v).collect();
    values.sort_by(f64::total_cmp);

    let edges = bin_edges(&values);
    let bins = edges.len().saturating_sub(1);

    let mut by_brand: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    let mut totals = vec![0usize; bins];
    for (brand, value) in &samples {
        if let Some(bin) = bin_index(&edges, *value) {
            by_brand.entry(brand.clone()).or_insert_with(|| vec![0; bins])[bin] += 1;
            totals[bin] += 1;
        }
    }
    let layers = by_brand
        .into_iter()
        .map(|(brand, counts)| HistogramLayer { brand, counts })
        .collect();

    let bin_width = match edges.as_slice() {
        [first, second, ..] => second - first,
        _ => 0.0,
    };
    let density = kde_curve(&values, bin_width);

    Ok(ScreenSizeHistogram {
        edges,
        layers,
        totals,
        density,
    })
}

/// Equal-width edges using the smaller of the Sturges and Freedman–Diaconis
/// widths. `values` must be sorted.
fn bin_edges(values: &[f64]) -> Vec<f64> {
    let (Some(&lo), Some(&hi)) = (values.first(), values.last()) else {
        return Vec::new();
    };
    if hi - lo <= 0.0 {
        return vec![lo - 0.5, hi + 0.5];
    }

    let n = values.len() as f64;
    let range = hi - lo;
    let sturges = range / (n.log2() + 1.0);
    let iqr = percentile(values, 75.0) - percentile(values, 25.0);
    let fd = 2.0 * iqr * n.powf(-1.0 / 3.0);
    let width = if fd > 0.0 { fd.min(sturges) } else { sturges };

    let bins = ((range / width).ceil() as usize).max(1);
    (0..=bins)
        .map(|i| {
            if i == bins {
                hi
            } else {
                lo + range * i as f64 / bins as f64
            }
        })
        .collect()
}

/// Linear-interpolated percentile of sorted data.
fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let rank = p / 100.0 * (sorted.len() - 1) as f64;
    let below = rank.floor() as usize;
    let above = rank.ceil() as usize;
    let frac = rank - below as f64;
    sorted[below] + (sorted[above] - sorted[below]) * frac
}

/// Bin for `value`; the last bin is closed on the right.
fn bin_index(edges: &[f64], value: f64) -> Option<usize> {
    let bins = edges.len().checked_sub(1).filter(|&b| b > 0)?;
    if value < edges[0] || value > edges[bins] {
        return None;
    }
    let i = edges.partition_point(|&e| e <= value).saturating_sub(1);
    Some(i.min(bins - 1))
}

/// Gaussian KDE with Scott's bandwidth, scaled to histogram counts.
fn kde_curve(sorted: &[f64], bin_width: f64) -> Vec<[f64; 2]> {
    let n = sorted.len();
    if n < 2 || bin_width <= 0.0 {
        return Vec::new();
    }
    let nf = n as f64;
    let mean = sorted.iter().sum::<f64>() / nf;
    let var = sorted.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (nf - 1.0);
    let bandwidth = var.sqrt() * nf.powf(-0.2);
    if bandwidth <= 0.0 {
        return Vec::new();
    }

    let (lo, hi) = (sorted[0], sorted[n - 1]);
    let norm = 1.0 / (nf * bandwidth * (2.0 * std::f64::consts::PI).sqrt());
    let scale = nf * bin_width;

    (0..DENSITY_POINTS)
        .map(|i| {
            let x = lo + (hi - lo) * i as f64 / (DENSITY_POINTS - 1) as f64;
            let density: f64 = sorted
                .iter()
                .map(|v| (-0.5 * ((x - v) / bandwidth).powi(2)).exp())
                .sum::<f64>()
                * norm;
            [x, density * scale]
        })
        .collect()
}

// ---------------------------------------------------------------------------
// KPIs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Kpis {
    pub total_count: usize,
    /// Mean rating to 1 decimal; `0.0` when no row has a rating.
    /// Fails only when the `Rating` column is absent.
    pub average_rating: Result<f64>,
}

pub fn kpis(view: &RowView<'_>) -> Kpis {
    Kpis {
        total_count: view.len(),
        average_rating: average_rating(view),
    }
}

fn average_rating(view: &RowView<'_>) -> Result<f64> {
    view.table.require_column(columns::RATING)?;

    let (sum, n) = view
        .phones()
        .filter_map(|p| p.number(columns::RATING))
        .fold((0.0, 0usize), |(s, n), r| (s + r, n + 1));

    if n == 0 {
        return Ok(0.0);
    }
    Ok(round_to(sum / n as f64, 1))
}
