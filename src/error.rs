use rust_decimal::Decimal;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, MarketError>;

#[derive(Error, Debug)]
pub enum MarketError {
    #[error("payment method not set")]
    NoPaymentMethod,
    #[error("invalid quantity: {0}")]
    InvalidQuantity(i64),
    #[error("insufficient stock of {product}: requested {requested}, available {available}")]
    InsufficientStock {
        product: String,
        requested: u32,
        available: u32,
    },
    #[error("insufficient balance: required {required}, available {available}")]
    InsufficientBalance {
        required: Decimal,
        available: Decimal,
    },
    #[error("product not found: {0}")]
    ProductNotFound(String),
    #[error("customer not found: {0}")]
    CustomerNotFound(String),
    #[error("invalid product: {0}")]
    InvalidProduct(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
