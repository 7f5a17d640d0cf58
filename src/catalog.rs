use crate::customer::{Customer, Receipt};
use crate::error::MarketError;
use crate::product::{Product, Quantity};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// A seller registered with the catalog.
///
/// `products` holds indices into the catalog's product arena. The references
/// are informational only; nothing stops another path from selling those
/// products.
#[derive(Debug, Clone, PartialEq)]
pub struct Seller {
    pub id: u32,
    pub name: String,
    pub products: Vec<usize>,
}

impl Seller {
    pub fn new(name: impl Into<String>, id: u32) -> Self {
        Self {
            id,
            name: name.into(),
            products: Vec::new(),
        }
    }
}

/// One line of a product listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Listing {
    pub name: String,
    pub unit_price: Decimal,
    pub quantity_on_hand: u32,
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- {}, Price: {}, Quantity: {}",
            self.name, self.unit_price, self.quantity_on_hand
        )
    }
}

/// The aggregate owning all sellers, customers, and products.
///
/// The three collections are independent: no duplicate-id checks, no
/// referential integrity beyond the `seller_id` stored on each product.
#[derive(Default)]
pub struct Catalog {
    sellers: Vec<Seller>,
    customers: Vec<Customer>,
    products: Vec<Product>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_seller(&mut self, seller: Seller) {
        self.sellers.push(seller);
    }

    pub fn add_customer(&mut self, customer: Customer) {
        self.customers.push(customer);
    }

    /// Appends a product to the arena and records its index on the owning
    /// seller, when one is registered.
    pub fn add_product(&mut self, product: Product) {
        let index = self.products.len();
        if let Some(seller) = self.sellers.iter_mut().find(|s| s.id == product.seller_id()) {
            seller.products.push(index);
        }
        self.products.push(product);
    }

    /// First product whose name matches exactly, in insertion order.
    ///
    /// When duplicate names exist the first-inserted one wins; that is a
    /// deliberate behavior, not an accident of the scan.
    pub fn find_product(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name() == name)
    }

    pub fn find_product_mut(&mut self, name: &str) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.name() == name)
    }

    pub fn find_customer_mut(&mut self, name: &str) -> Option<&mut Customer> {
        self.customers.iter_mut().find(|c| c.name() == name)
    }

    /// Lazy view over the product arena, one listing per product, in
    /// insertion order. Rendering is the caller's concern.
    pub fn listings(&self) -> impl Iterator<Item = Listing> + '_ {
        self.products.iter().map(|p| Listing {
            name: p.name().to_string(),
            unit_price: p.unit_price(),
            quantity_on_hand: p.quantity_on_hand(),
        })
    }

    /// Looks up the customer and product by name and runs the purchase.
    pub fn purchase(
        &mut self,
        customer: &str,
        product: &str,
        quantity: Quantity,
    ) -> Result<Receipt, MarketError> {
        let product = self
            .products
            .iter_mut()
            .find(|p| p.name() == product)
            .ok_or_else(|| MarketError::ProductNotFound(product.to_string()))?;
        let customer = self
            .customers
            .iter_mut()
            .find(|c| c.name() == customer)
            .ok_or_else(|| MarketError::CustomerNotFound(customer.to_string()))?;

        customer.purchase(product, quantity)
    }
}
