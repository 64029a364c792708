pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{load_price_list, parse_price_list, RxingDecoder};
pub use app::SessionStore;
pub use config::{CliConfig, Command, Settings};
pub use core::{PriceCatalog, ScanPipeline, Tally};
pub use domain::model::PriceRecord;
pub use domain::ports::Decoder;
pub use utils::error::{Result, ScanError};
