use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::domain::model::PriceRecord;
use crate::utils::error::{Result, ScanError};

// Vendor export shape: <Root><Items><Item>...</Item>...</Items></Root>
#[derive(Debug, Deserialize)]
struct PriceListExport {
    #[serde(rename = "Items")]
    items: ItemList,
}

#[derive(Debug, Deserialize)]
struct ItemList {
    #[serde(rename = "Item", default)]
    item: Vec<PriceRecord>,
}

/// Parses a Hazi-Hinam style price-list export into plain records.
pub fn parse_price_list(xml: &str) -> Result<Vec<PriceRecord>> {
    let export: PriceListExport =
        quick_xml::de::from_str(xml).map_err(|e| ScanError::CatalogParseError {
            message: e.to_string(),
        })?;

    Ok(export.items.item)
}

/// Reads and parses a price-list export from disk.
pub fn load_price_list(path: impl AsRef<Path>) -> Result<Vec<PriceRecord>> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "reading price list");

    let xml = fs::read_to_string(path)?;
    let records = parse_price_list(&xml)?;

    tracing::info!(records = records.len(), "price list loaded");
    Ok(records)
}
