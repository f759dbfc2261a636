//! Business logic helpers for validated order mutations.

use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use fleetbook_domain::book::Book;
use fleetbook_domain::order::Order;

/// Provides validated mutations for [`Order`] entities.
///
/// Saving is a single upsert action: an order whose id matches an existing
/// record replaces it in place (position preserved), anything else appends.
pub struct OrderService;

impl OrderService {
    /// Saves an order, appending or replacing by id.
    ///
    /// Rejected orders leave the book untouched; the error names every
    /// missing or invalid field.
    pub fn save(book: &mut Book, order: Order) -> CoreResult<Uuid> {
        Self::validate(&order)?;
        if let Some(existing) = book.order_mut(order.id) {
            let id = existing.id;
            *existing = order;
            book.touch();
            Ok(id)
        } else {
            Ok(book.add_order(order))
        }
    }

    /// Removes an order by id.
    pub fn remove(book: &mut Book, id: Uuid) -> CoreResult<Order> {
        let position = book
            .orders
            .iter()
            .position(|order| order.id == id)
            .ok_or(CoreError::OrderNotFound(id))?;
        let removed = book.orders.remove(position);
        book.touch();
        Ok(removed)
    }

    /// Returns a snapshot of the orders currently tracked in the book.
    pub fn list(book: &Book) -> Vec<&Order> {
        book.orders.iter().collect()
    }

    fn validate(order: &Order) -> CoreResult<()> {
        let mut fields = Vec::new();
        if order.client_name.trim().is_empty() {
            fields.push("client".into());
        }
        if order.vehicle.trim().is_empty() {
            fields.push("vehicle".into());
        }
        if order.price <= 0.0 {
            fields.push("price".into());
        }
        if fields.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation(fields))
        }
    }
}
