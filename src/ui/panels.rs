use std::collections::BTreeSet;
use std::path::PathBuf;

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::color::BrandColors;
use crate::dashboard::DashboardView;
use crate::state::{AppState, Event, Page};
use crate::ui::{plot, table};

// ---------------------------------------------------------------------------
// Top panel – menu bar and main menu
// ---------------------------------------------------------------------------

/// Render the menu bar and the Stats / Predict buttons.
pub fn main_menu(ui: &mut Ui, state: &AppState, events: &mut Vec<Event>) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                if let Some(path) = pick_dataset() {
                    events.push(Event::OpenDataset(path));
                }
                ui.close_menu();
            }
        });

        ui.separator();
        ui.label(format!("Data: {}", state.data_path.display()));

        if let Some(view) = state.dashboard() {
            ui.separator();
            ui.label(format!("{} mobiles loaded", view.source_rows));
        }
    });

    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading("Main Menu");
    });

    let page = state.session.page;
    ui.columns(2, |cols: &mut [Ui]| {
        if menu_button(&mut cols[0], "Stats", page == Some(Page::Stats)) {
            events.push(Event::OpenStats);
        }
        if menu_button(&mut cols[1], "Predict", page == Some(Page::Predict)) {
            events.push(Event::OpenPredict);
        }
    });
    ui.add_space(4.0);
}

fn menu_button(ui: &mut Ui, label: &str, selected: bool) -> bool {
    let width = ui.available_width();
    ui.add_sized([width, 28.0], egui::Button::new(label).selected(selected))
        .clicked()
}

fn pick_dataset() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Open mobiles dataset")
        .add_filter("Supported files", &["csv", "tsv", "tab", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("TSV", &["tsv", "tab"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file()
}

// ---------------------------------------------------------------------------
// Left side panel – filter widgets and chart toggles
// ---------------------------------------------------------------------------

/// Render the filter panel of the Stats page.
pub fn side_panel(ui: &mut Ui, state: &AppState, events: &mut Vec<Event>) {
    ui.heading("Please Filter Here:");
    ui.separator();

    let Some(view) = state.dashboard() else {
        ui.label("No dataset loaded.");
        return;
    };
    let selection = &state.session.selection;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            match &view.brand_options {
                Ok(brands) => multi_select(
                    ui,
                    "Select the Brand:",
                    brands,
                    &selection.brands,
                    |b| b.clone(),
                    |b| Event::ToggleBrand(b.clone()),
                    Event::SelectAllBrands(brands.clone()),
                    Event::ClearBrands,
                    events,
                ),
                Err(e) => {
                    ui.label(RichText::new(e.to_string()).color(Color32::RED));
                    // A stale brand selection would otherwise fail every panel.
                    if !selection.brands.is_empty() && ui.button("Clear brands").clicked() {
                        events.push(Event::ClearBrands);
                    }
                }
            }

            multi_select(
                ui,
                "Select the Price Range:",
                &view.price_bucket_options,
                &selection.price_buckets,
                |b| b.label().to_string(),
                |b| Event::TogglePriceBucket(*b),
                Event::SelectAllPriceBuckets(view.price_bucket_options.clone()),
                Event::ClearPriceBuckets,
                events,
            );

            ui.separator();

            chart_toggle(
                ui,
                "Chipset Graph",
                ("Show Chipset Graph", "Hide Chipset Graph"),
                Event::SetChipsetGraph,
                events,
            );
            chart_toggle(
                ui,
                "Screen Size Graph",
                ("Show Screen Size Histogram", "Hide Screen Size Histogram"),
                Event::SetScreenSizeHistogram,
                events,
            );
        });
}

/// Checkbox list; nothing checked means no filter on this dimension.
#[allow(clippy::too_many_arguments)]
fn multi_select<T: Ord>(
    ui: &mut Ui,
    title: &str,
    options: &[T],
    selected: &BTreeSet<T>,
    label: impl Fn(&T) -> String,
    toggle: impl Fn(&T) -> Event,
    select_all: Event,
    clear: Event,
    events: &mut Vec<Event>,
) {
    let n_selected = selected.len();
    let header_text = if n_selected == 0 {
        format!("{title}  (any)")
    } else {
        format!("{title}  ({n_selected}/{})", options.len())
    };

    egui::CollapsingHeader::new(RichText::new(header_text).strong())
        .id_salt(title)
        .default_open(true)
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    events.push(select_all);
                }
                if ui.small_button("Clear").clicked() {
                    events.push(clear);
                }
            });

            for value in options {
                let mut checked = selected.contains(value);
                if ui.checkbox(&mut checked, label(value)).changed() {
                    events.push(toggle(value));
                }
            }
        });
}

fn chart_toggle(
    ui: &mut Ui,
    heading: &str,
    (show, hide): (&str, &str),
    set: fn(bool) -> Event,
    events: &mut Vec<Event>,
) {
    ui.strong(heading);
    ui.columns(2, |cols: &mut [Ui]| {
        if cols[0].button(show).clicked() {
            events.push(set(true));
        }
        if cols[1].button(hide).clicked() {
            events.push(set(false));
        }
    });
    ui.add_space(6.0);
}

// ---------------------------------------------------------------------------
// Central panel
// ---------------------------------------------------------------------------

/// Render the active page, or the fatal error of the last recompute.
pub fn central_panel(ui: &mut Ui, state: &AppState) {
    if let Some(err) = state.fatal_error() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading(RichText::new(format!("Error: {err}")).color(Color32::RED));
        });
        return;
    }

    match state.session.page {
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Choose Stats or Predict from the main menu");
            });
        }
        Some(Page::Predict) => {
            ui.label("Redirecting to the prediction site...");
            ui.hyperlink(&state.config.predict_url);
        }
        Some(Page::Stats) => {
            if let Some(view) = state.dashboard() {
                stats_page(ui, view, state.config.table_height);
            }
        }
    }
}

fn stats_page(ui: &mut Ui, view: &DashboardView, table_height: f32) {
    ScrollArea::vertical()
        .id_salt("stats_page")
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading(RichText::new("Mobiles Dashboard").size(26.0));
            ui.add_space(8.0);

            table::kpi_panels(ui, &view.kpis);
            ui.separator();

            if let Some(ranking) = &view.chipset_ranking {
                match ranking {
                    Ok(ranking) => plot::chipset_chart(ui, ranking),
                    Err(e) => error_label(ui, e),
                }
                ui.separator();
            }

            if let Some(histogram) = &view.screen_sizes {
                match histogram {
                    Ok(histogram) => {
                        let brands = view.brand_options.as_deref().unwrap_or(&[]);
                        let colors = BrandColors::new(brands.iter().map(String::as_str));
                        plot::screen_size_chart(ui, histogram, &colors);
                    }
                    Err(e) => error_label(ui, e),
                }
                ui.separator();
            }

            match &view.listing {
                Ok(listing) => table::listing_table(ui, listing, table_height),
                Err(e) => error_label(ui, e),
            }
            ui.separator();
        });
}

fn error_label(ui: &mut Ui, err: &impl std::fmt::Display) {
    ui.label(RichText::new(err.to_string()).color(Color32::RED));
}
