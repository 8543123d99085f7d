//! Load pay matrix overrides from CSV

use super::payscale::{PayMatrix, PayTier};
use csv::Reader;
use std::error::Error;
use std::path::Path;

/// Raw CSV row: `level,basic_pay,tenure_months`
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    level: u8,
    basic_pay: f64,
    tenure_months: u32,
}

/// Load a pay matrix from a CSV file
pub fn load_pay_matrix<P: AsRef<Path>>(path: P) -> Result<PayMatrix, Box<dyn Error>> {
    let reader = Reader::from_path(path)?;
    load_from_csv_reader(reader)
}

/// Load a pay matrix from any reader (e.g., string buffer)
pub fn load_pay_matrix_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<PayMatrix, Box<dyn Error>> {
    load_from_csv_reader(Reader::from_reader(reader))
}

fn load_from_csv_reader<R: std::io::Read>(
    mut reader: Reader<R>,
) -> Result<PayMatrix, Box<dyn Error>> {
    let mut tiers = Vec::new();
    for result in reader.deserialize() {
        let row: CsvRow = result?;
        tiers.push(PayTier {
            level: row.level,
            basic_pay: row.basic_pay,
            tenure_months: row.tenure_months,
        });
    }
    Ok(PayMatrix::from_tiers(tiers)?)
}
