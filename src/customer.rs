use crate::error::MarketError;
use crate::payment::BoxedPaymentMethod;
use crate::product::{Product, Quantity};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// Outcome of a successful purchase.
///
/// The core never prints; callers decide whether and how to render this.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Receipt {
    pub product: String,
    pub quantity: u32,
    pub total_cost: Decimal,
    pub payment_method: &'static str,
    pub remaining_balance: Decimal,
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bought {} x{} for {} using {}. Remaining balance: {}",
            self.product, self.quantity, self.total_cost, self.payment_method, self.remaining_balance
        )
    }
}

/// A buyer with a balance and at most one active payment method.
pub struct Customer {
    name: String,
    balance: Decimal,
    payment_method: Option<BoxedPaymentMethod>,
}

impl Customer {
    pub fn new(name: impl Into<String>, balance: Decimal) -> Self {
        Self {
            name: name.into(),
            balance,
            payment_method: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Replaces the active payment method. The previous one is dropped.
    pub fn set_payment_method(&mut self, method: BoxedPaymentMethod) {
        self.payment_method = Some(method);
    }

    /// Buys `quantity` units of `product`, settling through the active
    /// payment method.
    ///
    /// The stock check runs before settlement, so an out-of-stock request
    /// never touches the balance. On any failure neither the balance nor the
    /// product changes. A zero quantity succeeds trivially at zero cost.
    pub fn purchase(
        &mut self,
        product: &mut Product,
        quantity: Quantity,
    ) -> Result<Receipt, MarketError> {
        let method = self
            .payment_method
            .as_ref()
            .ok_or(MarketError::NoPaymentMethod)?;

        let requested = quantity.get();
        let total_cost = product.unit_price() * Decimal::from(requested);

        if product.quantity_on_hand() < requested {
            return Err(MarketError::InsufficientStock {
                product: product.name().to_string(),
                requested,
                available: product.quantity_on_hand(),
            });
        }

        if !method.settle(total_cost, &mut self.balance) {
            return Err(MarketError::InsufficientBalance {
                required: total_cost,
                available: self.balance,
            });
        }

        product.reduce_quantity(requested);

        Ok(Receipt {
            product: product.name().to_string(),
            quantity: requested,
            total_cost,
            payment_method: method.name(),
            remaining_balance: self.balance,
        })
    }
}
