use std::io::Write;
use std::path::PathBuf;

use mobiles_dashboard::dashboard::recompute;
use mobiles_dashboard::data::filter::{RowView, Selection, apply_selection};
use mobiles_dashboard::data::loader::load_table;
use mobiles_dashboard::data::model::PriceBucket;
use mobiles_dashboard::data::transform::transform;
use mobiles_dashboard::error::DashboardError;
use mobiles_dashboard::state::{Event, Page, SessionContext};
use tempfile::TempDir;

const HEADER: &str = "brand,Name,Price,Rating,RAM,Chipset,Display Type,Screen Size";

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).expect("create fixture");
    file.write_all(contents.as_bytes()).expect("write fixture");
    path
}

fn three_row_csv(dir: &TempDir) -> PathBuf {
    let body = format!(
        "{HEADER}\n\
         A,A one,5000,4.0,4000,Helio G35,IPS LCD,6.5\n\
         A,A two,15000,,6144,Helio G99,AMOLED,6.6\n\
         B,B one,95000,3.0,12000,Snapdragon 8 Gen 2,OLED,6.1\n"
    );
    write_file(dir, "final_cleaned.csv", &body)
}

fn stats_session() -> SessionContext {
    let mut s = SessionContext::default();
    s.apply(Event::OpenStats, "https://predict.example/");
    s
}

#[test]
fn unfiltered_three_row_scenario() {
    let dir = TempDir::new().unwrap();
    let path = three_row_csv(&dir);

    let view = recompute(&path, &stats_session()).unwrap().expect("stats page");
    let kpis = view.kpis.unwrap();
    assert_eq!(view.source_rows, 3);
    assert_eq!(kpis.total_count, 3);
    assert_eq!(kpis.average_rating, Ok(3.5));
    assert_eq!(view.brand_options.unwrap(), vec!["A", "B"]);
    assert_eq!(
        view.price_bucket_options,
        vec![
            PriceBucket::UpTo10k,
            PriceBucket::From10kTo20k,
            PriceBucket::From90kTo100k
        ]
    );
    assert!(view.chipset_ranking.is_none());
    assert!(view.screen_sizes.is_none());
}

#[test]
fn brand_filter_scenario() {
    let dir = TempDir::new().unwrap();
    let path = three_row_csv(&dir);

    let mut session = stats_session();
    session.apply(Event::ToggleBrand("A".into()), "");
    let view = recompute(&path, &session).unwrap().unwrap();
    assert_eq!(view.kpis.unwrap().total_count, 2);

    let table = transform(&load_table(&path).unwrap()).unwrap();
    let filtered = apply_selection(&table, &session.selection).unwrap();
    let buckets: Vec<&str> = filtered
        .phones()
        .filter_map(|p| p.price_bucket)
        .map(PriceBucket::label)
        .collect();
    assert_eq!(buckets, vec!["Rs.10000 and Below", "Rs.10000 - Rs.20000"]);

    let listing = view.listing.unwrap();
    assert_eq!(listing.len(), 2);
    assert_eq!(listing.rows[1][4], "6.14");
}

#[test]
fn empty_result_reports_zero_sentinel() {
    let dir = TempDir::new().unwrap();
    let path = three_row_csv(&dir);

    let mut session = stats_session();
    session.apply(Event::ToggleBrand("B".into()), "");
    session.apply(Event::TogglePriceBucket(PriceBucket::UpTo10k), "");
    let kpis = recompute(&path, &session).unwrap().unwrap().kpis.unwrap();
    assert_eq!(kpis.total_count, 0);
    assert_eq!(kpis.average_rating, Ok(0.0));
}

#[test]
fn empty_selection_returns_the_table_unchanged() {
    let dir = TempDir::new().unwrap();
    let path = three_row_csv(&dir);
    let table = transform(&load_table(&path).unwrap()).unwrap();

    let view = apply_selection(&table, &Selection::default()).unwrap();
    assert_eq!(view.indices, RowView::all(&table).indices);
    assert_eq!(view.len(), table.len());
}

#[test]
fn toggled_charts_are_computed_over_the_filtered_rows() {
    let dir = TempDir::new().unwrap();
    let path = three_row_csv(&dir);

    let mut session = stats_session();
    session.apply(Event::SetChipsetGraph(true), "");
    session.apply(Event::SetScreenSizeHistogram(true), "");
    session.apply(Event::ToggleBrand("A".into()), "");

    let view = recompute(&path, &session).unwrap().unwrap();
    let ranking = view.chipset_ranking.unwrap().unwrap();
    let names: Vec<&str> = ranking.iter().map(|c| c.chipset.as_str()).collect();
    assert_eq!(names, vec!["Helio G35", "Helio G99"]);

    let histogram = view.screen_sizes.unwrap().unwrap();
    assert_eq!(histogram.totals.iter().sum::<usize>(), 2);
    assert_eq!(histogram.layers.len(), 1);
    assert_eq!(histogram.layers[0].brand, "A");
}

#[test]
fn other_pages_still_load_but_skip_aggregation() {
    let dir = TempDir::new().unwrap();
    let path = three_row_csv(&dir);

    assert!(recompute(&path, &SessionContext::default()).unwrap().is_none());

    let mut predict = SessionContext::default();
    predict.apply(Event::OpenPredict, "https://predict.example/");
    assert_eq!(predict.page, Some(Page::Predict));
    assert!(recompute(&path, &predict).unwrap().is_none());
}

#[test]
fn missing_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.csv");
    let err = recompute(&path, &stats_session()).unwrap_err();
    assert!(matches!(err, DashboardError::DataUnavailable { .. }));

    // Even before a page is chosen.
    let err = recompute(&path, &SessionContext::default()).unwrap_err();
    assert!(matches!(err, DashboardError::DataUnavailable { .. }));
}

#[test]
fn malformed_file_is_data_unavailable() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "broken.csv", "brand,Price,RAM\nA,5000\nB,1,2,3,4\n");
    assert!(matches!(
        load_table(&path),
        Err(DashboardError::DataUnavailable { .. })
    ));
}

#[test]
fn missing_rating_column_only_fails_the_average_and_listing() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "norating.csv",
        "brand,Name,Price,RAM,Chipset,Display Type,Screen Size\n\
         A,A one,5000,4000,Helio G35,IPS LCD,6.5\n",
    );

    let mut session = stats_session();
    session.apply(Event::SetChipsetGraph(true), "");
    let view = recompute(&path, &session).unwrap().unwrap();
    let kpis = view.kpis.unwrap();
    assert_eq!(kpis.total_count, 1);
    assert_eq!(
        kpis.average_rating,
        Err(DashboardError::missing_column("Rating"))
    );
    assert_eq!(view.listing.unwrap_err(), DashboardError::missing_column("Rating"));
    assert_eq!(view.chipset_ranking.unwrap().unwrap().len(), 1);
}

#[test]
fn brand_selection_without_brand_column_can_be_cleared() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "nobrand.csv",
        "Name,Price,Rating,RAM,Chipset\n\
         A one,5000,4.0,4000,Helio G35\n",
    );

    let mut session = stats_session();
    session.apply(Event::SetChipsetGraph(true), "");
    session.apply(Event::ToggleBrand("A".into()), "");

    let view = recompute(&path, &session).unwrap().expect("filter error is not fatal");
    let missing = DashboardError::missing_column("brand");
    assert_eq!(view.brand_options.unwrap_err(), missing);
    assert_eq!(view.kpis.unwrap_err(), missing);
    assert_eq!(view.chipset_ranking.unwrap().unwrap_err(), missing);
    assert_eq!(view.listing.unwrap_err(), missing);
    assert_eq!(view.source_rows, 1);

    session.apply(Event::ClearBrands, "");
    let view = recompute(&path, &session).unwrap().unwrap();
    let kpis = view.kpis.unwrap();
    assert_eq!(kpis.total_count, 1);
    assert_eq!(kpis.average_rating, Ok(4.0));
    assert_eq!(view.chipset_ranking.unwrap().unwrap().len(), 1);
}

#[test]
fn missing_price_column_fails_the_transform() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "noprice.csv", "brand,RAM\nA,4000\n");
    assert_eq!(
        recompute(&path, &stats_session()).unwrap_err(),
        DashboardError::missing_column("Price")
    );
}

#[test]
fn tab_delimited_and_json_sources_load_the_same_rows() {
    let dir = TempDir::new().unwrap();
    let tsv = write_file(
        &dir,
        "phones.tsv",
        "brand\tName\tPrice\tRating\tRAM\n\
         A\tA one\t5000\t4.0\t4000\n\
         B\tB one\t95000\t\t8000\n",
    );
    let json = write_file(
        &dir,
        "phones.json",
        r#"[
            {"brand": "A", "Name": "A one", "Price": 5000, "Rating": 4.0, "RAM": 4000},
            {"brand": "B", "Name": "B one", "Price": 95000, "Rating": null, "RAM": 8000}
        ]"#,
    );

    for path in [tsv, json] {
        let table = transform(&load_table(&path).unwrap()).unwrap();
        assert_eq!(table.len(), 2, "{}", path.display());
        assert_eq!(table.phones[1].price_bucket, Some(PriceBucket::From90kTo100k));
        assert_eq!(table.phones[1].memory_gb, Some(8.0));
        assert_eq!(table.phones[1].number("Rating"), None);
    }
}

#[test]
fn filtered_count_never_exceeds_source_count() {
    let dir = TempDir::new().unwrap();
    let path = three_row_csv(&dir);
    let table = transform(&load_table(&path).unwrap()).unwrap();

    for bucket in PriceBucket::ALL {
        let sel = Selection {
            price_buckets: [bucket].into_iter().collect(),
            ..Default::default()
        };
        assert!(apply_selection(&table, &sel).unwrap().len() <= table.len());
    }
}
