use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Could not parse price list: {message}")]
    CatalogParseError { message: String },

    #[error("Cannot find barcode")]
    BarcodeDecodeError,

    #[error("Invalid barcode: {payload}")]
    InvalidBarcodeError { payload: String },

    #[error("Item {barcode} was not found in database")]
    ProductNotFoundError { barcode: i64 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Image error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Configuration error: invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ScanError {
    /// Scan-time failures never end a session: the caller reports them and
    /// moves on to the next image, with the tally untouched. Everything else
    /// (unreadable price list, bad configuration, plain IO) aborts startup.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ScanError::BarcodeDecodeError
                | ScanError::InvalidBarcodeError { .. }
                | ScanError::ProductNotFoundError { .. }
                | ScanError::ImageError(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ScanError>;
