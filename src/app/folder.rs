use std::fs;
use std::path::{Path, PathBuf};

use crate::core::{PriceCatalog, ScanPipeline, Tally};
use crate::domain::ports::Decoder;
use crate::utils::error::Result;

/// Scans every file in `dir` in name order, printing each outcome and the
/// running list. Recoverable failures (no barcode, unknown product, file
/// that is not an image) are reported and skipped.
pub fn run<D: Decoder>(
    pipeline: &ScanPipeline<D>,
    catalog: &PriceCatalog,
    dir: &Path,
) -> Result<Tally> {
    let mut tally = Tally::new();

    let mut pictures = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path: PathBuf = entry?.path();
        if path.is_file() {
            pictures.push(path);
        }
    }
    pictures.sort();

    for picture in &pictures {
        print!("Scanning item in {} --- ", picture.display());

        let image = fs::read(picture)?;
        match pipeline.scan(&image, catalog, &mut tally) {
            Ok(name) => println!("{name}"),
            Err(e) if e.is_recoverable() => {
                println!();
                println!("{}: {e}", picture.display());
            }
            Err(e) => return Err(e),
        }

        println!("{tally}\n");
    }

    Ok(tally)
}
