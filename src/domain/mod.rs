pub mod model;
pub mod ports;

pub use model::PriceRecord;
pub use ports::Decoder;
