use clap::Parser;
use miette::{IntoDiagnostic, Result};
use minimart::catalog::{Catalog, Seller};
use minimart::customer::Customer;
use minimart::payment::Cash;
use minimart::product::{Product, Quantity};
use minimart::reader::OrderReader;
use rust_decimal_macros::dec;
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Purchase orders CSV file (optional). Without it, runs the built-in
    /// demo purchase.
    orders: Option<PathBuf>,
}

fn demo_catalog() -> miette::Result<Catalog> {
    let mut catalog = Catalog::new();

    let seller = Seller::new("John's Store", 1);
    let seller_id = seller.id;
    catalog.add_seller(seller);

    catalog.add_product(Product::new("Laptop", dec!(1000.0), 5, seller_id).into_diagnostic()?);
    catalog.add_product(Product::new("Phone", dec!(500.0), 10, seller_id).into_diagnostic()?);

    let mut alice = Customer::new("Alice", dec!(1500.0));
    alice.set_payment_method(Box::new(Cash));
    catalog.add_customer(alice);

    Ok(catalog)
}

fn print_listings(catalog: &Catalog) {
    println!("Available products:");
    for listing in catalog.listings() {
        println!("{listing}");
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut catalog = demo_catalog()?;
    print_listings(&catalog);

    if let Some(orders_path) = cli.orders {
        let file = File::open(orders_path).into_diagnostic()?;
        let reader = OrderReader::new(file);
        for order_result in reader.orders() {
            match order_result {
                Ok(order) => {
                    let outcome = Quantity::new(order.quantity).and_then(|quantity| {
                        catalog.purchase(&order.customer, &order.product, quantity)
                    });
                    match outcome {
                        Ok(receipt) => println!("Success: {receipt}"),
                        Err(e) => eprintln!("Error processing order: {e}"),
                    }
                }
                Err(e) => {
                    eprintln!("Error reading order: {e}");
                }
            }
        }
    } else {
        match catalog.purchase("Alice", "Laptop", Quantity::new(1).into_diagnostic()?) {
            Ok(receipt) => println!("Success: {receipt}"),
            Err(e) => eprintln!("Error processing order: {e}"),
        }
    }

    print_listings(&catalog);

    Ok(())
}
