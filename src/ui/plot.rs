use eframe::egui::{Align2, Ui};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoint, PlotPoints, Text};

use crate::color::{BrandColors, CHIPSET_BAR, DENSITY_LINE};
use crate::data::aggregate::{ChipsetCount, ScreenSizeHistogram};

// ---------------------------------------------------------------------------
// Chipset ranking (bar chart)
// ---------------------------------------------------------------------------

/// Ranked bar chart with the count printed on each bar.
pub fn chipset_chart(ui: &mut Ui, ranking: &[ChipsetCount]) {
    ui.strong("Chipset Distribution as per the brands");
    if ranking.is_empty() {
        ui.label("No chipsets in the current selection.");
        return;
    }

    let bars: Vec<Bar> = ranking
        .iter()
        .enumerate()
        .map(|(i, c)| {
            Bar::new(i as f64, c.count as f64)
                .name(&c.chipset)
                .width(0.7)
        })
        .collect();

    let labels: Vec<String> = ranking.iter().map(|c| c.chipset.clone()).collect();

    Plot::new("chipset_ranking")
        .height(320.0)
        .x_axis_label("Chipset")
        .y_axis_label("No. of brands")
        .x_axis_formatter(move |mark, _range| {
            let i = mark.value.round();
            if (mark.value - i).abs() > 1e-6 || i < 0.0 {
                return String::new();
            }
            labels.get(i as usize).cloned().unwrap_or_default()
        })
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).color(CHIPSET_BAR).name("Chipset"));
            for (i, c) in ranking.iter().enumerate() {
                plot_ui.text(
                    Text::new(PlotPoint::new(i as f64, c.count as f64), c.count.to_string())
                        .anchor(Align2::CENTER_BOTTOM),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Screen-size distribution (stacked histogram + KDE)
// ---------------------------------------------------------------------------

pub fn screen_size_chart(ui: &mut Ui, histogram: &ScreenSizeHistogram, colors: &BrandColors) {
    ui.strong("Distribution of Screen Sizes by Brand");
    if histogram.is_empty() {
        ui.label("No screen sizes in the current selection.");
        return;
    }

    let width = histogram.bin_width();
    let centers: Vec<f64> = histogram
        .edges
        .windows(2)
        .map(|w| (w[0] + w[1]) / 2.0)
        .collect();

    // Each brand's bars sit on top of every layer before it.
    let mut charts: Vec<BarChart> = Vec::with_capacity(histogram.layers.len());
    for layer in &histogram.layers {
        let bars: Vec<Bar> = centers
            .iter()
            .zip(&layer.counts)
            .map(|(&x, &n)| Bar::new(x, n as f64).width(width))
            .collect();
        let name = if layer.brand.is_empty() {
            "(no brand)"
        } else {
            layer.brand.as_str()
        };
        let below: Vec<&BarChart> = charts.iter().collect();
        let chart = BarChart::new(bars)
            .name(name)
            .color(colors.color_for(&layer.brand))
            .stack_on(&below);
        charts.push(chart);
    }

    Plot::new("screen_size_histogram")
        .height(380.0)
        .legend(Legend::default())
        .x_axis_label("Screen Size (inches)")
        .y_axis_label("Frequency")
        .show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
            if !histogram.density.is_empty() {
                let points = PlotPoints::from(histogram.density.clone());
                plot_ui.line(Line::new(points).name("density").color(DENSITY_LINE).width(2.0));
            }
        });
}
