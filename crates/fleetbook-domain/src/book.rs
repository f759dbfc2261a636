use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::client::Client;
use crate::expense::Expense;
use crate::order::Order;

const CURRENT_SCHEMA_VERSION: u8 = 1;

/// The aggregate owning the three insertion-ordered collections.
///
/// A `Book` is pure data; validation and persistence belong to the core
/// services. Collections keep insertion order: edits replace records in
/// place and never re-sort.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    #[serde(default)]
    pub clients: Vec<Client>,
    #[serde(default)]
    pub orders: Vec<Order>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default = "Book::schema_version_default")]
    pub schema_version: u8,
}

impl Book {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            clients: Vec::new(),
            orders: Vec::new(),
            expenses: Vec::new(),
            created_at: now,
            updated_at: now,
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    pub fn add_client(&mut self, client: Client) -> Uuid {
        let id = client.id;
        self.clients.push(client);
        self.touch();
        id
    }

    pub fn add_order(&mut self, order: Order) -> Uuid {
        let id = order.id;
        self.orders.push(order);
        self.touch();
        id
    }

    pub fn add_expense(&mut self, expense: Expense) -> Uuid {
        let id = expense.id;
        self.expenses.push(expense);
        self.touch();
        id
    }

    pub fn client(&self, id: Uuid) -> Option<&Client> {
        self.clients.iter().find(|client| client.id == id)
    }

    /// Looks up a client by name under case-insensitive comparison.
    pub fn client_by_name(&self, name: &str) -> Option<&Client> {
        let normalized = name.trim().to_ascii_lowercase();
        self.clients
            .iter()
            .find(|client| client.name.trim().to_ascii_lowercase() == normalized)
    }

    pub fn order(&self, id: Uuid) -> Option<&Order> {
        self.orders.iter().find(|order| order.id == id)
    }

    pub fn order_mut(&mut self, id: Uuid) -> Option<&mut Order> {
        self.orders.iter_mut().find(|order| order.id == id)
    }

    pub fn expense(&self, id: Uuid) -> Option<&Expense> {
        self.expenses.iter().find(|expense| expense.id == id)
    }

    pub fn expense_mut(&mut self, id: Uuid) -> Option<&mut Expense> {
        self.expenses.iter_mut().find(|expense| expense.id == id)
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}

impl Default for Book {
    fn default() -> Self {
        Self::new()
    }
}
