use rust_decimal::Decimal;

/// Settlement capability selected by a customer.
///
/// All built-in methods share the default settlement body; they exist to
/// demonstrate a selectable strategy and differ only in their label. A method
/// keeps no state of its own, so settling mutates the caller-supplied balance
/// in place.
pub trait PaymentMethod {
    fn name(&self) -> &'static str;

    /// Attempts to debit `amount` from `balance`.
    ///
    /// Returns `true` and debits in place when the balance covers the amount;
    /// otherwise returns `false` and leaves the balance untouched.
    fn settle(&self, amount: Decimal, balance: &mut Decimal) -> bool {
        if *balance >= amount {
            *balance -= amount;
            true
        } else {
            false
        }
    }
}

pub type BoxedPaymentMethod = Box<dyn PaymentMethod>;

pub struct Cash;

impl PaymentMethod for Cash {
    fn name(&self) -> &'static str {
        "Cash"
    }
}

pub struct Card;

impl PaymentMethod for Card {
    fn name(&self) -> &'static str {
        "Card"
    }
}

pub struct Crypto;

impl PaymentMethod for Crypto {
    fn name(&self) -> &'static str {
        "Crypto"
    }
}
