pub mod file;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use file::FileConfig;

pub const DEFAULT_PRICE_LIST: &str = "hazi_hinam_dummy.xml";
pub const DEFAULT_DEMO_DIR: &str = "demo_pictures";

#[derive(Debug, Clone, Parser)]
#[command(name = "barcode-basket")]
#[command(about = "Barcode scanning shopping-list demo")]
pub struct CliConfig {
    /// Vendor price-list export (XML)
    #[arg(long)]
    pub price_list: Option<PathBuf>,

    /// Optional TOML settings file; command-line flags win over its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Decode one image and print the product name
    Scan { image: PathBuf },

    /// Scan every image in a folder
    Folder { dir: Option<PathBuf> },

    /// Type barcodes on the keyboard (0 empties the list, -1 exits)
    Interactive,
}

/// Effective settings after merging the command line, the optional settings
/// file and the built-in defaults, in that order.
#[derive(Debug, Clone)]
pub struct Settings {
    pub price_list: PathBuf,
    pub demo_dir: PathBuf,
}

impl CliConfig {
    pub fn settings(&self) -> Result<Settings> {
        let file = match &self.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };

        Ok(Settings {
            price_list: self
                .price_list
                .clone()
                .or(file.price_list)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PRICE_LIST)),
            demo_dir: file
                .demo_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DEMO_DIR)),
        })
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_path("price_list", &self.price_list)?;
        validation::validate_file_extension("price_list", &self.price_list, &["xml"])?;
        validation::validate_path("demo_dir", &self.demo_dir)?;
        Ok(())
    }
}
