//! fleetbook-domain
//!
//! Pure domain models (Client, Order, Expense, Invoice, Book).
//! No I/O, no services, no storage. Only data types and core enums.

pub mod book;
pub mod client;
pub mod common;
pub mod expense;
pub mod invoice;
pub mod order;

pub use book::*;
pub use client::*;
pub use common::*;
pub use expense::*;
pub use invoice::*;
pub use order::*;
