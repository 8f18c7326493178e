use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_PREDICT_URL: &str = "https://b87d5dd16a14eafc64.gradio.live/";

/// Mobile phone specs & prices dashboard.
#[derive(Parser, Debug, Clone)]
#[command(name = "mobiles-dashboard", version, about, long_about = None)]
pub struct Config {
    /// Cleaned mobiles dataset (.csv, .tsv, .json or .parquet)
    #[arg(long, env = "MOBILES_DATA", default_value = "final_cleaned.csv")]
    pub data: PathBuf,

    /// Page opened in a new browser tab by "Predict"
    #[arg(long, env = "MOBILES_PREDICT_URL", default_value = DEFAULT_PREDICT_URL)]
    pub predict_url: String,

    /// Visible height of the results table, in points
    #[arg(long, default_value_t = 350.0, value_parser = parse_table_height)]
    pub table_height: f32,
}

fn parse_table_height(s: &str) -> Result<f32, String> {
    let height: f32 = s.parse().map_err(|e| format!("`{s}` is not a number: {e}"))?;
    if !height.is_finite() || height <= 0.0 {
        return Err(format!("table height must be a positive number of points, got `{s}`"));
    }
    Ok(height)
}
