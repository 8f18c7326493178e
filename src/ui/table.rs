use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::aggregate::Kpis;
use crate::data::listing::Listing;
use crate::error::Result;

/// The two KPI panels side by side. The count stays visible when only the
/// average cannot be computed.
pub fn kpi_panels(ui: &mut Ui, kpis: &Result<Kpis>) {
    ui.columns(2, |cols: &mut [Ui]| match kpis {
        Ok(k) => {
            cols[0].heading("Total count of mobiles:");
            cols[0].heading(k.total_count.to_string());
            cols[1].heading("Average rating:");
            match &k.average_rating {
                Ok(avg) => cols[1].heading(format!("{avg:.1}")),
                Err(e) => cols[1].label(RichText::new(e.to_string()).color(Color32::RED)),
            };
        }
        Err(e) => {
            cols[0].label(RichText::new(e.to_string()).color(Color32::RED));
        }
    });
}

/// Fixed-column listing with a capped visible height.
pub fn listing_table(ui: &mut Ui, listing: &Listing, max_height: f32) {
    ui.push_id("listing", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .columns(Column::auto().at_least(60.0).clip(true), listing.headers.len())
            .min_scrolled_height(0.0)
            .max_scroll_height(max_height)
            .header(20.0, |mut header| {
                for title in listing.headers {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|body| {
                body.rows(18.0, listing.len(), |mut row| {
                    let cells = &listing.rows[row.index()];
                    for cell in cells {
                        row.col(|ui| {
                            ui.label(cell.as_str());
                        });
                    }
                });
            });
    });
}
