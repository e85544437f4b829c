//! Bill history loading and CLI errors.

use analysis::{AnalysisError, Bill};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported input format '{0}': expected .csv or .json")]
    UnsupportedFormat(String),

    #[error("Input contains no bills")]
    EmptyHistory,

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error(transparent)]
    Server(#[from] server::ConfigError),
}

/// One row of a bill history file.
#[derive(Debug, Deserialize)]
struct BillRecord {
    #[serde(alias = "period")]
    month: String,
    #[serde(alias = "electricity_kwh", alias = "electricityKwh")]
    kwh: f64,
    #[serde(alias = "water_liters", alias = "waterLiters")]
    liters: f64,
    // Empty CSV cells arrive as None
    #[serde(default, alias = "elecCost", alias = "electricity_cost")]
    elec_cost: Option<f64>,
    #[serde(default, alias = "waterCost")]
    water_cost: Option<f64>,
}

impl From<BillRecord> for Bill {
    fn from(r: BillRecord) -> Self {
        Bill::new(r.month, r.kwh, r.liters)
            .with_costs(r.elec_cost.unwrap_or(0.0), r.water_cost.unwrap_or(0.0))
    }
}

/// Load a bill history from a CSV file with a header row
pub fn load_csv(path: &Path) -> Result<Vec<Bill>, CliError> {
    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(BufReader::new(file));

    let mut bills = Vec::new();
    for record in reader.deserialize::<BillRecord>() {
        bills.push(record?.into());
    }
    Ok(bills)
}

/// Load a bill history from a JSON array of records
pub fn load_json(path: &Path) -> Result<Vec<Bill>, CliError> {
    let file = File::open(path)?;
    let records: Vec<BillRecord> = serde_json::from_reader(BufReader::new(file))?;
    Ok(records.into_iter().map(Bill::from).collect())
}

/// Load a history, choosing the parser by file extension.
pub fn load_history(path: &Path) -> Result<Vec<Bill>, CliError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match extension.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        other => Err(CliError::UnsupportedFormat(other.to_string())),
    }
}
