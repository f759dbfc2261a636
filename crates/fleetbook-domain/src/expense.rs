//! Domain types for operating expenses.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::Identifiable;

/// An operating cost transaction against a vehicle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: Uuid,
    pub date: NaiveDate,
    pub plate_number: String,
    pub kind: ExpenseKind,
    pub cost: f64,
    pub description: String,
}

impl Expense {
    pub fn new(
        date: NaiveDate,
        plate_number: impl Into<String>,
        kind: ExpenseKind,
        cost: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            plate_number: plate_number.into(),
            kind,
            cost,
            description: description.into(),
        }
    }
}

impl Identifiable for Expense {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Supported expense categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ExpenseKind {
    Diesel,
    Maintenance,
    SpareParts,
    Salary,
    Other,
}

impl fmt::Display for ExpenseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ExpenseKind::Diesel => "Diesel",
            ExpenseKind::Maintenance => "Maintenance",
            ExpenseKind::SpareParts => "Spare Parts",
            ExpenseKind::Salary => "Salary",
            ExpenseKind::Other => "Other",
        };
        f.write_str(label)
    }
}
