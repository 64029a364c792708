use std::fs;
use std::path::Path;

use crate::core::{PriceCatalog, ScanPipeline, Tally};
use crate::domain::ports::Decoder;
use crate::utils::error::Result;

/// Proof of concept: print the name of the product whose barcode appears in
/// one image. Recoverable failures are printed instead of a name; anything
/// else propagates to the caller.
pub fn run<D: Decoder>(
    pipeline: &ScanPipeline<D>,
    catalog: &PriceCatalog,
    image_path: &Path,
) -> Result<()> {
    let image = fs::read(image_path)?;
    let mut tally = Tally::new();

    match pipeline.scan(&image, catalog, &mut tally) {
        Ok(name) => println!("{name}"),
        Err(e) if e.is_recoverable() => println!("{e}"),
        Err(e) => return Err(e),
    }

    Ok(())
}
