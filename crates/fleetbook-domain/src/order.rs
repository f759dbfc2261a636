//! Domain types for billable service orders.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::Identifiable;

/// A billable service transaction against a client and vehicle.
///
/// `client_name` is a denormalized display-time reference to a client's
/// name, not a foreign key: orders outlive the clients they mention and
/// render the stored string verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: Uuid,
    pub date: NaiveDate,
    pub vehicle: String,
    pub client_name: String,
    pub order_type: String,
    pub location: String,
    pub cost: f64,
    pub price: f64,
    pub payment_method: PaymentMethod,
    pub paid: bool,
}

impl Order {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        date: NaiveDate,
        vehicle: impl Into<String>,
        client_name: impl Into<String>,
        order_type: impl Into<String>,
        location: impl Into<String>,
        cost: f64,
        price: f64,
        payment_method: PaymentMethod,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            vehicle: vehicle.into(),
            client_name: client_name.into(),
            order_type: order_type.into(),
            location: location.into(),
            cost,
            price,
            payment_method,
            paid: false,
        }
    }

    pub fn mark_paid(&mut self) {
        self.paid = true;
    }
}

impl Identifiable for Order {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// How an order is settled.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PaymentMethod {
    Cash,
    Postpaid,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Postpaid => "Postpaid",
        };
        f.write_str(label)
    }
}
