use crate::utils::error::Result;

/// Barcode recognition capability.
///
/// `Ok(None)` is the explicit "nothing found in this image" signal. `Err` is
/// reserved for infrastructure failures such as bytes that are not an image
/// at all. Front ends and tests substitute their own implementations; the
/// pipeline never talks to a barcode library directly.
pub trait Decoder: Send + Sync {
    fn decode(&self, image: &[u8]) -> Result<Option<String>>;
}
