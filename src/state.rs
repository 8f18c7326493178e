use std::path::PathBuf;

use crate::config::Config;
use crate::dashboard::{DashboardView, recompute};
use crate::data::filter::Selection;
use crate::data::model::PriceBucket;
use crate::error::DashboardError;

// ---------------------------------------------------------------------------
// Session context
// ---------------------------------------------------------------------------

/// Top-level navigation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Stats,
    Predict,
}

/// State that survives between recomputes within one session.
/// Only [`SessionContext::apply`] mutates it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionContext {
    /// `None` until one of the main menu buttons is pressed.
    pub page: Option<Page>,
    pub show_chipset_graph: bool,
    pub show_screen_size_histogram: bool,
    pub selection: Selection,
}

/// A user interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    OpenStats,
    OpenPredict,
    SetChipsetGraph(bool),
    SetScreenSizeHistogram(bool),
    ToggleBrand(String),
    TogglePriceBucket(PriceBucket),
    SelectAllBrands(Vec<String>),
    ClearBrands,
    SelectAllPriceBuckets(Vec<PriceBucket>),
    ClearPriceBuckets,
    OpenDataset(PathBuf),
}

/// Work the host must do outside the core after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SideEffect {
    OpenInNewTab(String),
}

fn toggle<T: Ord>(set: &mut std::collections::BTreeSet<T>, value: T) {
    if !set.remove(&value) {
        set.insert(value);
    }
}

impl SessionContext {
    /// Apply one event. `OpenDataset` is handled by [`AppState`].
    pub fn apply(&mut self, event: Event, predict_url: &str) -> Option<SideEffect> {
        match event {
            Event::OpenStats => {
                self.page = Some(Page::Stats);
            }
            Event::OpenPredict => {
                self.page = Some(Page::Predict);
                return Some(SideEffect::OpenInNewTab(predict_url.to_string()));
            }
            Event::SetChipsetGraph(on) => self.show_chipset_graph = on,
            Event::SetScreenSizeHistogram(on) => self.show_screen_size_histogram = on,
            Event::ToggleBrand(brand) => toggle(&mut self.selection.brands, brand),
            Event::TogglePriceBucket(bucket) => toggle(&mut self.selection.price_buckets, bucket),
            Event::SelectAllBrands(all) => self.selection.brands = all.into_iter().collect(),
            Event::ClearBrands => self.selection.brands.clear(),
            Event::SelectAllPriceBuckets(all) => {
                self.selection.price_buckets = all.into_iter().collect()
            }
            Event::ClearPriceBuckets => self.selection.price_buckets.clear(),
            Event::OpenDataset(_) => self.selection = Selection::default(),
        }
        None
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: Config,

    /// File read on every recompute.
    pub data_path: PathBuf,

    pub session: SessionContext,

    /// Result of the most recent recompute (None before the first one).
    pub view: Option<Result<Option<DashboardView>, DashboardError>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            data_path: config.data.clone(),
            config,
            session: SessionContext::default(),
            view: None,
        }
    }

    /// Dispatch one event to the session context.
    pub fn dispatch(&mut self, event: Event) -> Option<SideEffect> {
        log::debug!("event: {event:?}");
        match &event {
            Event::OpenStats => log::info!("page → stats"),
            Event::OpenPredict => log::info!("page → predict"),
            Event::OpenDataset(path) => {
                log::info!("switching dataset to {}", path.display());
                self.data_path = path.clone();
            }
            _ => {}
        }
        self.session.apply(event, &self.config.predict_url)
    }

    /// Re-run the whole pipeline against the current session.
    pub fn refresh(&mut self) {
        self.view = Some(recompute(&self.data_path, &self.session));
    }

    /// The fatal error of the last recompute, if any.
    pub fn fatal_error(&self) -> Option<&DashboardError> {
        match &self.view {
            Some(Err(e)) => Some(e),
            _ => None,
        }
    }

    pub fn dashboard(&self) -> Option<&DashboardView> {
        match &self.view {
            Some(Ok(Some(view))) => Some(view),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://predict.example/";

    #[test]
    fn defaults_are_all_off() {
        let s = SessionContext::default();
        assert_eq!(s.page, None);
        assert!(!s.show_chipset_graph);
        assert!(!s.show_screen_size_histogram);
        assert!(s.selection.is_empty());
    }

    #[test]
    fn predict_asks_for_a_new_tab() {
        let mut s = SessionContext::default();
        assert_eq!(
            s.apply(Event::OpenPredict, URL),
            Some(SideEffect::OpenInNewTab(URL.to_string()))
        );
        assert_eq!(s.page, Some(Page::Predict));
        assert_eq!(s.apply(Event::OpenStats, URL), None);
        assert_eq!(s.page, Some(Page::Stats));
    }

    #[test]
    fn toggles_are_independent_and_persist() {
        let mut s = SessionContext::default();
        s.apply(Event::SetChipsetGraph(true), URL);
        assert!(s.show_chipset_graph);
        assert!(!s.show_screen_size_histogram);

        s.apply(Event::ToggleBrand("A".into()), URL);
        assert!(s.show_chipset_graph);

        s.apply(Event::SetScreenSizeHistogram(true), URL);
        s.apply(Event::SetChipsetGraph(false), URL);
        assert!(!s.show_chipset_graph);
        assert!(s.show_screen_size_histogram);
    }

    #[test]
    fn toggling_a_value_twice_removes_it() {
        let mut s = SessionContext::default();
        s.apply(Event::ToggleBrand("A".into()), URL);
        s.apply(Event::TogglePriceBucket(PriceBucket::UpTo10k), URL);
        assert!(s.selection.brands.contains("A"));
        assert!(s.selection.price_buckets.contains(&PriceBucket::UpTo10k));

        s.apply(Event::ToggleBrand("A".into()), URL);
        assert!(s.selection.brands.is_empty());
    }

    #[test]
    fn select_all_and_clear() {
        let mut s = SessionContext::default();
        s.apply(Event::SelectAllBrands(vec!["A".into(), "B".into()]), URL);
        assert_eq!(s.selection.brands.len(), 2);
        s.apply(Event::ClearBrands, URL);
        assert!(s.selection.brands.is_empty());

        s.apply(Event::SelectAllPriceBuckets(PriceBucket::ALL.to_vec()), URL);
        assert_eq!(s.selection.price_buckets.len(), 11);
        s.apply(Event::ClearPriceBuckets, URL);
        assert!(s.selection.price_buckets.is_empty());
    }

    #[test]
    fn opening_a_dataset_clears_the_selection_only() {
        let mut s = SessionContext::default();
        s.apply(Event::OpenStats, URL);
        s.apply(Event::SetChipsetGraph(true), URL);
        s.apply(Event::ToggleBrand("A".into()), URL);
        s.apply(Event::OpenDataset(PathBuf::from("other.csv")), URL);
        assert!(s.selection.is_empty());
        assert_eq!(s.page, Some(Page::Stats));
        assert!(s.show_chipset_graph);
    }
}
