use rxing::common::HybridBinarizer;
use rxing::{BinaryBitmap, Luma8LuminanceSource, MultiFormatReader, Reader};

use crate::domain::ports::Decoder;
use crate::utils::error::Result;

/// Barcode recognition backed by the rxing multi-format reader.
///
/// Reader failures are reported as "nothing found": rxing raises the same
/// family of errors for an empty frame and for a barcode it cannot make
/// sense of, and in both cases the caller should just try the next image.
/// Bytes that are not a decodable image at all are an `ImageError`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RxingDecoder;

impl RxingDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl Decoder for RxingDecoder {
    fn decode(&self, image: &[u8]) -> Result<Option<String>> {
        let gray = image::load_from_memory(image)?.to_luma8();
        let (width, height) = gray.dimensions();

        let source = Luma8LuminanceSource::new(gray.into_raw(), width, height);
        let mut bitmap = BinaryBitmap::new(HybridBinarizer::new(source));

        let mut reader = MultiFormatReader::default();
        match reader.decode(&mut bitmap) {
            Ok(found) => {
                tracing::debug!(format = ?found.getBarcodeFormat(), "barcode detected");
                Ok(Some(found.getText().to_string()))
            }
            Err(e) => {
                tracing::debug!(error = %e, "no barcode in image");
                Ok(None)
            }
        }
    }
}
