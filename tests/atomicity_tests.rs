use minimart::customer::Customer;
use minimart::payment::{BoxedPaymentMethod, Card, Cash, Crypto};
use minimart::product::{Product, Quantity};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn laptop() -> Product {
    Product::new("Laptop", dec!(1000.0), 5, 1).unwrap()
}

fn snapshot(customer: &Customer, product: &Product) -> (Decimal, u32) {
    (customer.balance(), product.quantity_on_hand())
}

#[test]
fn test_failed_purchase_mutates_nothing() {
    // One case per failure class
    let cases: Vec<(Decimal, Option<BoxedPaymentMethod>, i64)> = vec![
        (dec!(1500.0), None, 1),                    // no payment method
        (dec!(999.0), Some(Box::new(Cash)), 1),     // insufficient balance
        (dec!(100000.0), Some(Box::new(Cash)), 6),  // insufficient stock
    ];

    for (balance, method, quantity) in cases {
        let mut product = laptop();
        let mut customer = Customer::new("Alice", balance);
        if let Some(method) = method {
            customer.set_payment_method(method);
        }
        let before = snapshot(&customer, &product);

        let result = customer.purchase(&mut product, Quantity::new(quantity).unwrap());
        assert!(result.is_err());
        assert_eq!(snapshot(&customer, &product), before);
    }
}

#[test]
fn test_two_failed_purchases_equal_one() {
    let mut product = laptop();
    let mut customer = Customer::new("Alice", dec!(500.0));
    customer.set_payment_method(Box::new(Cash));

    assert!(customer
        .purchase(&mut product, Quantity::new(1).unwrap())
        .is_err());
    let after_one = snapshot(&customer, &product);

    assert!(customer
        .purchase(&mut product, Quantity::new(1).unwrap())
        .is_err());
    assert_eq!(snapshot(&customer, &product), after_one);
}

#[test]
fn test_payment_variants_are_interchangeable() {
    let methods: Vec<BoxedPaymentMethod> = vec![Box::new(Cash), Box::new(Card), Box::new(Crypto)];
    let mut outcomes = Vec::new();

    for method in methods {
        let mut product = laptop();
        let mut customer = Customer::new("Alice", dec!(1500.0));
        customer.set_payment_method(method);

        let receipt = customer
            .purchase(&mut product, Quantity::new(1).unwrap())
            .unwrap();
        outcomes.push((
            receipt.total_cost,
            receipt.remaining_balance,
            product.quantity_on_hand(),
            receipt.payment_method,
        ));
    }

    let (cost, balance, stock, _) = outcomes[0];
    for (c, b, s, _) in &outcomes {
        assert_eq!((*c, *b, *s), (cost, balance, stock));
    }
    // Only the label differs
    let labels: Vec<&str> = outcomes.iter().map(|o| o.3).collect();
    assert_eq!(labels, vec!["Cash", "Card", "Crypto"]);
}

#[test]
fn test_success_then_failure_keeps_success_state() {
    let mut product = laptop();
    let mut customer = Customer::new("Alice", dec!(1500.0));
    customer.set_payment_method(Box::new(Cash));

    customer
        .purchase(&mut product, Quantity::new(1).unwrap())
        .unwrap();
    let after_success = snapshot(&customer, &product);

    assert!(customer
        .purchase(&mut product, Quantity::new(1).unwrap())
        .is_err());
    assert_eq!(snapshot(&customer, &product), after_success);
}
