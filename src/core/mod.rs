pub mod catalog;
pub mod pipeline;
pub mod tally;

pub use crate::domain::model::PriceRecord;
pub use crate::domain::ports::Decoder;
pub use crate::utils::error::Result;
pub use catalog::PriceCatalog;
pub use pipeline::ScanPipeline;
pub use tally::Tally;
