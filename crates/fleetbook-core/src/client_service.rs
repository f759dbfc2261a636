//! Business logic helpers for client list mutations.

use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use fleetbook_domain::book::Book;
use fleetbook_domain::client::Client;

/// Provides validated mutations for [`Client`] entities.
///
/// Client names are unique under case-insensitive comparison. Removal never
/// cascades: orders referencing the removed name are historical records and
/// keep rendering the stored string verbatim.
pub struct ClientService;

impl ClientService {
    /// Adds a client after trimming and uniqueness validation.
    pub fn add(book: &mut Book, name: &str) -> CoreResult<Uuid> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(CoreError::EmptyClientName);
        }
        if book.client_by_name(trimmed).is_some() {
            return Err(CoreError::DuplicateClientName(trimmed.to_string()));
        }
        Ok(book.add_client(Client::new(trimmed)))
    }

    /// Removes a client by id, returning the removed record.
    pub fn remove(book: &mut Book, id: Uuid) -> CoreResult<Client> {
        let position = book
            .clients
            .iter()
            .position(|client| client.id == id)
            .ok_or(CoreError::ClientNotFound(id))?;
        let removed = book.clients.remove(position);
        book.touch();
        Ok(removed)
    }

    /// Returns a snapshot of the clients currently tracked in the book.
    pub fn list(book: &Book) -> Vec<&Client> {
        book.clients.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use fleetbook_domain::order::{Order, PaymentMethod};

    #[test]
    fn add_trims_and_appends() {
        let mut book = Book::new();
        let id = ClientService::add(&mut book, "  Acme  ").expect("add succeeds");
        assert_eq!(book.client(id).map(|c| c.name.as_str()), Some("Acme"));
    }

    #[test]
    fn add_rejects_empty_name() {
        let mut book = Book::new();
        let err = ClientService::add(&mut book, "   ").expect_err("blank name must fail");
        assert!(matches!(err, CoreError::EmptyClientName));
        assert!(book.clients.is_empty());
    }

    #[test]
    fn add_rejects_case_insensitive_duplicates() {
        let mut book = Book::new();
        ClientService::add(&mut book, "omar").unwrap();
        let err = ClientService::add(&mut book, "Omar").expect_err("duplicate must fail");
        assert!(
            matches!(err, CoreError::DuplicateClientName(ref name) if name == "Omar"),
            "unexpected error: {err:?}"
        );
        assert_eq!(book.clients.len(), 1);
    }

    #[test]
    fn remove_leaves_matching_orders_untouched() {
        let mut book = Book::new();
        let id = ClientService::add(&mut book, "Acme").unwrap();
        book.add_order(Order::new(
            NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
            "KA-1123",
            "Acme",
            "Haulage",
            "North depot",
            40.0,
            100.0,
            PaymentMethod::Postpaid,
        ));

        let removed = ClientService::remove(&mut book, id).expect("remove succeeds");
        assert_eq!(removed.name, "Acme");
        assert!(book.clients.is_empty());
        assert_eq!(book.orders.len(), 1);
        assert_eq!(book.orders[0].client_name, "Acme");
    }
}
