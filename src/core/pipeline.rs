use crate::core::catalog::PriceCatalog;
use crate::core::tally::Tally;
use crate::domain::ports::Decoder;
use crate::utils::error::{Result, ScanError};

/// Decode, look up, count. One invocation per image; each is independent of
/// the last except for the tally it updates on success.
pub struct ScanPipeline<D: Decoder> {
    decoder: D,
}

impl<D: Decoder> ScanPipeline<D> {
    pub fn new(decoder: D) -> Self {
        Self { decoder }
    }

    /// First barcode decoded in the image, as an integer.
    ///
    /// The decoded payload is expected to be purely numeric; anything else is
    /// an input error, not a crash.
    pub fn decode_barcode(&self, image: &[u8]) -> Result<i64> {
        let payload = self
            .decoder
            .decode(image)?
            .ok_or(ScanError::BarcodeDecodeError)?;

        payload
            .trim()
            .parse()
            .map_err(|_| ScanError::InvalidBarcodeError { payload })
    }

    /// One complete scan. A failure at any step leaves the tally untouched;
    /// only a successful lookup counts the product.
    pub fn scan(&self, image: &[u8], catalog: &PriceCatalog, tally: &mut Tally) -> Result<String> {
        let barcode = self.decode_barcode(image)?;
        tracing::debug!(barcode, "decoded barcode");

        let name = catalog.lookup(barcode)?.to_string();
        tally.add(&name);
        tracing::debug!(product = %name, "added to shopping list");

        Ok(name)
    }
}
