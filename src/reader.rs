use crate::error::MarketError;
use serde::Deserialize;
use std::io::Read;

/// One purchase request from an order stream.
///
/// The quantity arrives as a raw integer and is validated into a
/// [`crate::product::Quantity`] when the order is processed.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct PurchaseOrder {
    pub customer: String,
    pub product: String,
    pub quantity: i64,
}

pub struct OrderReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> OrderReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    pub fn orders(self) -> impl Iterator<Item = Result<PurchaseOrder, MarketError>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(MarketError::from))
    }
}
