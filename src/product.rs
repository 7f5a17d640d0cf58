use crate::error::MarketError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents a requested purchase count.
///
/// This is a wrapper around `u32` to enforce domain-specific rules at the
/// boundary: negative requests are rejected outright, while zero stays
/// representable (a zero-quantity purchase trivially succeeds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Quantity(u32);

impl Quantity {
    pub fn new(value: i64) -> Result<Self, MarketError> {
        u32::try_from(value)
            .map(Self)
            .map_err(|_| MarketError::InvalidQuantity(value))
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for Quantity {
    type Error = MarketError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<u32> for Quantity {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// An inventory record owned by the catalog.
///
/// Stock is a `u32`, so it cannot go negative through any guarded operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    name: String,
    unit_price: Decimal,
    quantity_on_hand: u32,
    seller_id: u32,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        unit_price: Decimal,
        quantity_on_hand: u32,
        seller_id: u32,
    ) -> Result<Self, MarketError> {
        let name = name.into();
        if name.is_empty() {
            return Err(MarketError::InvalidProduct("empty name".to_string()));
        }
        if unit_price < Decimal::ZERO {
            return Err(MarketError::InvalidProduct(format!(
                "negative unit price for {name}: {unit_price}"
            )));
        }
        Ok(Self {
            name,
            unit_price,
            quantity_on_hand,
            seller_id,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    pub fn quantity_on_hand(&self) -> u32 {
        self.quantity_on_hand
    }

    pub fn seller_id(&self) -> u32 {
        self.seller_id
    }

    /// Removes `amount` units from stock.
    ///
    /// Precondition (caller-enforced): `amount <= quantity_on_hand`.
    pub fn reduce_quantity(&mut self, amount: u32) {
        self.quantity_on_hand -= amount;
    }
}
