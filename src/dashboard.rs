use std::path::Path;
use std::time::Instant;

use crate::data::aggregate::{self, ChipsetCount, Kpis, ScreenSizeHistogram, TOP_CHIPSETS};
use crate::data::filter::apply_selection;
use crate::data::listing::{self, Listing};
use crate::data::loader::load_table;
use crate::data::model::PriceBucket;
use crate::data::transform::transform;
use crate::error::Result;
use crate::state::{Page, SessionContext};

// ---------------------------------------------------------------------------
// DashboardView – everything the Stats page renders
// ---------------------------------------------------------------------------

/// Output of one recompute. Each panel carries its own `Result`, so a
/// missing column only blanks the panel that needs it.
#[derive(Debug, Clone)]
pub struct DashboardView {
    /// Rows in the source file, before filtering.
    pub source_rows: usize,
    pub brand_options: Result<Vec<String>>,
    pub price_bucket_options: Vec<PriceBucket>,
    /// `Err` when the selection itself cannot be applied.
    pub kpis: Result<Kpis>,
    /// `None` while the chart is hidden.
    pub chipset_ranking: Option<Result<Vec<ChipsetCount>>>,
    /// `None` while the chart is hidden.
    pub screen_sizes: Option<Result<ScreenSizeHistogram>>,
    pub listing: Result<Listing>,
}

struct Summaries {
    kpis: Result<Kpis>,
    chipset_ranking: Option<Result<Vec<ChipsetCount>>>,
    screen_sizes: Option<Result<ScreenSizeHistogram>>,
    listing: Result<Listing>,
}

/// Run load → transform → filter → aggregate for one interaction.
///
/// The file is read every time. Returns `Ok(None)` when the Stats page is
/// not active. The session is only read. Load and transform failures are
/// fatal; a selection that cannot be applied fails every summary panel.
pub fn recompute(path: &Path, session: &SessionContext) -> Result<Option<DashboardView>> {
    let started = Instant::now();

    let raw = load_table(path)?;
    let table = transform(&raw)?;

    if session.page != Some(Page::Stats) {
        return Ok(None);
    }

    let summaries = match apply_selection(&table, &session.selection) {
        Ok(view) => {
            log::debug!(
                "{} of {} rows match {:?}",
                view.len(),
                table.len(),
                session.selection
            );
            Summaries {
                kpis: Ok(aggregate::kpis(&view)),
                chipset_ranking: session
                    .show_chipset_graph
                    .then(|| aggregate::chipset_ranking(&view, TOP_CHIPSETS)),
                screen_sizes: session
                    .show_screen_size_histogram
                    .then(|| aggregate::screen_size_histogram(&view)),
                listing: listing::listing(&view),
            }
        }
        // The filter panel stays usable so the selection can be cleared.
        Err(e) => {
            log::warn!("filtering failed: {e}");
            Summaries {
                kpis: Err(e.clone()),
                chipset_ranking: session.show_chipset_graph.then(|| Err(e.clone())),
                screen_sizes: session.show_screen_size_histogram.then(|| Err(e.clone())),
                listing: Err(e),
            }
        }
    };

    let dashboard = DashboardView {
        source_rows: table.len(),
        brand_options: table.brand_options(),
        price_bucket_options: table.price_bucket_options(),
        kpis: summaries.kpis,
        chipset_ranking: summaries.chipset_ranking,
        screen_sizes: summaries.screen_sizes,
        listing: summaries.listing,
    };

    log::debug!("recompute took {:?}", started.elapsed());
    Ok(Some(dashboard))
}
