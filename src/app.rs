use eframe::egui;

use crate::config::Config;
use crate::state::{AppState, Page, SideEffect};
use crate::ui::panels;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DashboardApp {
    pub state: AppState,
}

impl DashboardApp {
    /// Load the dataset once up front so a missing file shows immediately.
    pub fn new(config: Config) -> Self {
        let mut state = AppState::new(config);
        state.refresh();
        Self { state }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut events = Vec::new();

        // ---- Top panel: main menu ----
        egui::TopBottomPanel::top("main_menu").show(ctx, |ui| {
            panels::main_menu(ui, &self.state, &mut events);
        });

        // ---- Left side panel: filters and chart toggles ----
        if self.state.session.page == Some(Page::Stats) && self.state.fatal_error().is_none() {
            egui::SidePanel::left("filter_panel")
                .default_width(260.0)
                .resizable(true)
                .show(ctx, |ui| {
                    panels::side_panel(ui, &self.state, &mut events);
                });
        }

        // ---- Central panel: KPIs, charts, listing ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::central_panel(ui, &self.state);
        });

        if events.is_empty() {
            return;
        }
        for event in events {
            if let Some(SideEffect::OpenInNewTab(url)) = self.state.dispatch(event) {
                ctx.open_url(egui::OpenUrl::new_tab(url));
            }
        }
        self.state.refresh();
    }
}
