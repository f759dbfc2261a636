//! Persistence gateway trait and collection diagnostics.

use std::collections::HashSet;

use fleetbook_domain::book::Book;
use fleetbook_domain::client::Client;
use fleetbook_domain::expense::Expense;
use fleetbook_domain::order::Order;

use crate::error::CoreResult;

/// Client names seeded when the clients collection is absent on first load.
pub const DEFAULT_CLIENTS: &[&str] = &["Walk-in"];

/// The three logical collections a backend persists independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Clients,
    Orders,
    Expenses,
}

impl Collection {
    pub fn name(self) -> &'static str {
        match self {
            Collection::Clients => "clients",
            Collection::Orders => "orders",
            Collection::Expenses => "expenses",
        }
    }
}

/// Abstraction over persistence backends storing the three collections.
///
/// `load_*` returns `Ok(None)` when the collection has never been saved;
/// the caller decides the default (seed list for clients, empty otherwise).
pub trait CollectionStore: Send + Sync {
    fn load_clients(&self) -> CoreResult<Option<Vec<Client>>>;
    fn load_orders(&self) -> CoreResult<Option<Vec<Order>>>;
    fn load_expenses(&self) -> CoreResult<Option<Vec<Expense>>>;
    fn save_clients(&self, clients: &[Client]) -> CoreResult<()>;
    fn save_orders(&self, orders: &[Order]) -> CoreResult<()>;
    fn save_expenses(&self, expenses: &[Expense]) -> CoreResult<()>;
}

/// Detects orders whose client reference no longer resolves.
///
/// Such orders are valid historical records; this is diagnostic output only.
pub fn book_warnings(book: &Book) -> Vec<String> {
    let client_names: HashSet<String> = book
        .clients
        .iter()
        .map(|client| client.name.trim().to_ascii_lowercase())
        .collect();
    let mut warnings = Vec::new();
    for order in &book.orders {
        if !client_names.contains(&order.client_name.trim().to_ascii_lowercase()) {
            warnings.push(format!(
                "order {} references unknown client `{}`",
                order.id, order.client_name
            ));
        }
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use fleetbook_domain::order::PaymentMethod;

    #[test]
    fn warnings_flag_orders_with_unresolved_client_names() {
        let mut book = Book::new();
        book.add_client(Client::new("Acme"));
        book.add_order(Order::new(
            NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
            "KA-1123",
            "Acme",
            "Haulage",
            "North depot",
            10.0,
            100.0,
            PaymentMethod::Cash,
        ));
        book.add_order(Order::new(
            NaiveDate::from_ymd_opt(2024, 5, 11).unwrap(),
            "KA-2210",
            "Gone Ltd",
            "Haulage",
            "South depot",
            10.0,
            60.0,
            PaymentMethod::Cash,
        ));

        let warnings = book_warnings(&book);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Gone Ltd"));
    }
}
