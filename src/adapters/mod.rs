pub mod barcode;
pub mod xml_pricelist;

pub use barcode::RxingDecoder;
pub use xml_pricelist::{load_price_list, parse_price_list};
