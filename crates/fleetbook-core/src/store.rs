//! The entity store: owns the book, the selection, and the storage handle.

use tracing::warn;
use uuid::Uuid;

use fleetbook_domain::book::Book;
use fleetbook_domain::client::Client;
use fleetbook_domain::common::StatementMonth;
use fleetbook_domain::expense::Expense;
use fleetbook_domain::invoice::Invoice;
use fleetbook_domain::order::Order;

use crate::client_service::ClientService;
use crate::error::CoreResult;
use crate::expense_service::ExpenseService;
use crate::order_service::OrderService;
use crate::selection::Selection;
use crate::statement::StatementService;
use crate::storage::{Collection, CollectionStore, DEFAULT_CLIENTS};

/// Facade coordinating validated mutations, selection state, and saves.
///
/// One store exists per process; it exclusively owns the collections for
/// the process lifetime and is torn down with it. Every successful
/// mutation triggers a save of the affected collection. Saves are
/// best-effort: a failed write is logged and never rolls back the
/// in-memory mutation (local-first durability, not transactional).
pub struct EntityStore {
    book: Book,
    selection: Selection,
    storage: Box<dyn CollectionStore>,
}

impl EntityStore {
    /// Loads the three collections, seeding defaults for absent ones.
    ///
    /// An absent clients collection falls back to [`DEFAULT_CLIENTS`];
    /// absent orders/expenses start empty. A present but unreadable
    /// collection is a real error and propagates.
    pub fn open(storage: Box<dyn CollectionStore>) -> CoreResult<Self> {
        let mut book = Book::new();
        book.clients = match storage.load_clients()? {
            Some(clients) => clients,
            None => DEFAULT_CLIENTS.iter().map(|name| Client::new(*name)).collect(),
        };
        book.orders = storage.load_orders()?.unwrap_or_default();
        book.expenses = storage.load_expenses()?.unwrap_or_default();
        let selection = Selection::from_book(&book);
        Ok(Self {
            book,
            selection,
            storage,
        })
    }

    pub fn book(&self) -> &Book {
        &self.book
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Saves an order (append or replace by id), then persists orders.
    pub fn submit_order(&mut self, order: Order) -> CoreResult<Uuid> {
        let id = OrderService::save(&mut self.book, order)?;
        self.persist(Collection::Orders);
        Ok(id)
    }

    /// Deletes an order by id, then persists orders.
    pub fn delete_order(&mut self, id: Uuid) -> CoreResult<Order> {
        let removed = OrderService::remove(&mut self.book, id)?;
        self.persist(Collection::Orders);
        Ok(removed)
    }

    /// Saves an expense (append or replace by id), then persists expenses.
    pub fn submit_expense(&mut self, expense: Expense) -> CoreResult<Uuid> {
        let id = ExpenseService::save(&mut self.book, expense)?;
        self.persist(Collection::Expenses);
        Ok(id)
    }

    /// Deletes an expense by id, then persists expenses.
    pub fn delete_expense(&mut self, id: Uuid) -> CoreResult<Expense> {
        let removed = ExpenseService::remove(&mut self.book, id)?;
        self.persist(Collection::Expenses);
        Ok(removed)
    }

    /// Adds a client, updates the selection defaults, persists clients.
    pub fn add_client(&mut self, name: &str) -> CoreResult<Uuid> {
        let id = ClientService::add(&mut self.book, name)?;
        if let Some(client) = self.book.client(id) {
            let client = client.clone();
            self.selection.on_client_added(&client);
        }
        self.persist(Collection::Clients);
        Ok(id)
    }

    /// Removes a client, re-derives the selection, persists clients.
    ///
    /// Orders referencing the removed client's name are left untouched.
    pub fn remove_client(&mut self, id: Uuid) -> CoreResult<Client> {
        let removed = ClientService::remove(&mut self.book, id)?;
        self.selection.on_client_removed(&self.book, &removed.name);
        self.persist(Collection::Clients);
        Ok(removed)
    }

    /// Points the statement selection at an explicit client name.
    pub fn select_statement_client(&mut self, name: &str) {
        self.selection.statement_client = name.to_string();
    }

    /// Assembles the statement for the selected client over `month`.
    ///
    /// The returned invoice is an owned, immutable value; the store keeps
    /// no references into it, so it can be handed to an async renderer.
    pub fn assemble_statement(&self, month: StatementMonth) -> CoreResult<Invoice> {
        StatementService::assemble(&self.book.orders, &self.selection.statement_client, month)
    }

    fn persist(&self, collection: Collection) {
        let result = match collection {
            Collection::Clients => self.storage.save_clients(&self.book.clients),
            Collection::Orders => self.storage.save_orders(&self.book.orders),
            Collection::Expenses => self.storage.save_expenses(&self.book.expenses),
        };
        if let Err(err) = result {
            warn!(
                collection = collection.name(),
                error = %err,
                "collection save failed; in-memory state kept"
            );
        }
    }
}
