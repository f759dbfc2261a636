//! Transient client-selection state kept consistent across list changes.

use fleetbook_domain::book::Book;
use fleetbook_domain::client::Client;

/// UI-facing selection state: the client a statement is assembled for and
/// the client prefilled on the order draft form.
///
/// Orders reference clients by name, not id, so this resolver only touches
/// these transient strings — persisted orders are never rewritten, and a
/// stale name on an old order keeps rendering verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub statement_client: String,
    pub draft_client: String,
}

impl Selection {
    /// Seeds the selection from the current client list.
    pub fn from_book(book: &Book) -> Self {
        let first = book
            .clients
            .first()
            .map(|client| client.name.clone())
            .unwrap_or_default();
        Self {
            statement_client: first.clone(),
            draft_client: first,
        }
    }

    /// Reacts to a client addition: any empty slot adopts the new client.
    pub fn on_client_added(&mut self, client: &Client) {
        if self.statement_client.is_empty() {
            self.statement_client = client.name.clone();
        }
        if self.draft_client.is_empty() {
            self.draft_client = client.name.clone();
        }
    }

    /// Reacts to a client removal: slots naming the removed client fall
    /// back to the first remaining client, or empty when none remain.
    pub fn on_client_removed(&mut self, book: &Book, removed_name: &str) {
        let fallback = book
            .clients
            .first()
            .map(|client| client.name.clone())
            .unwrap_or_default();
        if self.statement_client == removed_name {
            self.statement_client = fallback.clone();
        }
        if self.draft_client == removed_name {
            self.draft_client = fallback;
        }
    }
}
