use std::collections::HashMap;

use crate::domain::model::PriceRecord;
use crate::utils::error::{Result, ScanError};

/// Read-only price table mapping a vendor item code to a product name.
///
/// Vendor exports store item codes as text, so `lookup` matches on the
/// decimal string form of the barcode, case-sensitively. Behavior for
/// duplicate item codes in the source is undefined; the first record wins.
#[derive(Debug, Clone, Default)]
pub struct PriceCatalog {
    names: HashMap<String, String>,
}

impl PriceCatalog {
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = PriceRecord>,
    {
        let mut names = HashMap::new();
        for record in records {
            names.entry(record.item_code).or_insert(record.item_name);
        }
        Self { names }
    }

    /// Name of the product with this barcode.
    pub fn lookup(&self, barcode: i64) -> Result<&str> {
        self.names
            .get(&barcode.to_string())
            .map(String::as_str)
            .ok_or(ScanError::ProductNotFoundError { barcode })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
