//! Domain type for billing clients.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{Identifiable, NamedEntity};

/// A named billing party. Identity is the unique display name; the id is an
/// opaque storage token. Clients are never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Client {
    pub id: Uuid,
    pub name: String,
}

impl Client {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}

impl Identifiable for Client {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Client {
    fn name(&self) -> &str {
        &self.name
    }
}
