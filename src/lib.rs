pub mod catalog;
pub mod customer;
pub mod error;
pub mod payment;
pub mod product;
pub mod reader;
