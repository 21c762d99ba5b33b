//! CSV loaders for replacement reference tables.
//!
//! Deployments can swap the built-in device price list and commission
//! brackets without rebuilding by passing CSV files on the command line.
//!
//! ## Device catalog format
//!
//! | Column  | Required | Type    | Notes                     |
//! |---------|----------|---------|---------------------------|
//! | `name`  | yes      | string  | Unique, non-empty         |
//! | `cost`  | yes      | decimal | Dealer cost, non-negative |
//! | `price` | yes      | decimal | Sale price, positive      |
//!
//! ```csv
//! name,cost,price
//! Dobbelt Screen,3800,8000
//! M20,1400,2500
//! ```
//!
//! ## Revenue class format
//!
//! Classes must be ordered by `min_revenue` and non-overlapping; both bounds
//! are inclusive.
//!
//! | Column            | Required | Type    |
//! |-------------------|----------|---------|
//! | `name`            | yes      | string  |
//! | `min_revenue`     | yes      | decimal |
//! | `max_revenue`     | yes      | decimal |
//! | `base_commission` | yes      | decimal |
//!
//! ```csv
//! name,min_revenue,max_revenue,base_commission
//! Nova,0,400000,250
//! Vega,400001,800000,500
//! ```

use std::path::Path;

use sales_core::catalog::{CatalogError, DeviceCatalog, validate_revenue_classes};
use sales_core::models::{Device, RevenueClass};

/// Errors that can occur while loading replacement tables from CSV.
#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    /// The underlying CSV deserialisation failed (bad structure, missing
    /// required column, type mismatch, etc.).
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// The rows parsed but the resulting table is invalid.
    #[error("invalid table: {0}")]
    InvalidTable(#[from] CatalogError),

    /// The file could not be read.
    #[error("cannot read file: {0}")]
    Io(#[from] std::io::Error),
}

fn reader(input: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All) // tolerate whitespace around values
        .flexible(false) // strict column count
        .from_reader(input.as_bytes())
}

/// Parses CSV text into a validated device catalog.
///
/// # Errors
///
/// * [`CsvLoadError::Parse`] – structurally invalid CSV or a field that
///   cannot be deserialised.
/// * [`CsvLoadError::InvalidTable`] – duplicate or empty names, non-positive
///   prices, negative costs.
pub fn load_catalog_from_str(input: &str) -> Result<DeviceCatalog, CsvLoadError> {
    let devices = reader(input)
        .deserialize::<Device>()
        .collect::<Result<Vec<_>, _>>()?;
    Ok(DeviceCatalog::from_devices(devices)?)
}

/// Reads a device catalog CSV from disk.
pub fn load_catalog_from_file(path: &Path) -> Result<DeviceCatalog, CsvLoadError> {
    let contents = std::fs::read_to_string(path)?;
    load_catalog_from_str(&contents)
}

/// Parses CSV text into a validated revenue class table.
///
/// # Errors
///
/// * [`CsvLoadError::Parse`] – structurally invalid CSV or a field that
///   cannot be deserialised.
/// * [`CsvLoadError::InvalidTable`] – inverted bounds, negative base
///   commission, or overlapping/out-of-order classes.
pub fn load_revenue_classes_from_str(input: &str) -> Result<Vec<RevenueClass>, CsvLoadError> {
    let classes = reader(input)
        .deserialize::<RevenueClass>()
        .collect::<Result<Vec<_>, _>>()?;
    validate_revenue_classes(&classes)?;
    Ok(classes)
}

/// Reads a revenue class CSV from disk.
pub fn load_revenue_classes_from_file(path: &Path) -> Result<Vec<RevenueClass>, CsvLoadError> {
    let contents = std::fs::read_to_string(path)?;
    load_revenue_classes_from_str(&contents)
}
