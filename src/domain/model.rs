use serde::{Deserialize, Serialize};

/// One row of the vendor price-list export. The export carries many more
/// fields (prices, quantities, update timestamps); only the code/name pair
/// matters here and the rest are ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRecord {
    #[serde(rename = "ItemCode")]
    pub item_code: String,

    #[serde(rename = "ItemName")]
    pub item_name: String,
}
