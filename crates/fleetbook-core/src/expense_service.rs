//! Business logic helpers for validated expense mutations.

use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use fleetbook_domain::book::Book;
use fleetbook_domain::expense::Expense;

/// Provides validated mutations for [`Expense`] entities.
///
/// Follows the same upsert discipline as the order service.
pub struct ExpenseService;

impl ExpenseService {
    /// Saves an expense, appending or replacing by id.
    pub fn save(book: &mut Book, expense: Expense) -> CoreResult<Uuid> {
        Self::validate(&expense)?;
        if let Some(existing) = book.expense_mut(expense.id) {
            let id = existing.id;
            *existing = expense;
            book.touch();
            Ok(id)
        } else {
            Ok(book.add_expense(expense))
        }
    }

    /// Removes an expense by id.
    pub fn remove(book: &mut Book, id: Uuid) -> CoreResult<Expense> {
        let position = book
            .expenses
            .iter()
            .position(|expense| expense.id == id)
            .ok_or(CoreError::ExpenseNotFound(id))?;
        let removed = book.expenses.remove(position);
        book.touch();
        Ok(removed)
    }

    /// Returns a snapshot of the expenses currently tracked in the book.
    pub fn list(book: &Book) -> Vec<&Expense> {
        book.expenses.iter().collect()
    }

    fn validate(expense: &Expense) -> CoreResult<()> {
        let mut fields = Vec::new();
        if expense.plate_number.trim().is_empty() {
            fields.push("plate number".into());
        }
        if expense.cost <= 0.0 {
            fields.push("cost".into());
        }
        if fields.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation(fields))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use fleetbook_domain::expense::ExpenseKind;

    fn sample_expense(plate: &str, cost: f64) -> Expense {
        Expense::new(
            NaiveDate::from_ymd_opt(2024, 5, 3).unwrap(),
            plate,
            ExpenseKind::Diesel,
            cost,
            "Fuel top-up",
        )
    }

    #[test]
    fn save_rejects_missing_plate_and_nonpositive_cost() {
        let mut book = Book::new();
        let err = ExpenseService::save(&mut book, sample_expense(" ", 0.0))
            .expect_err("invalid expense must fail");
        match err {
            CoreError::Validation(fields) => {
                assert_eq!(fields, vec!["plate number", "cost"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(book.expenses.is_empty());
    }

    #[test]
    fn save_replaces_existing_expense_in_place() {
        let mut book = Book::new();
        let first = sample_expense("KA-1123", 30.0);
        let second = sample_expense("KA-2210", 45.0);
        let target_id = first.id;
        ExpenseService::save(&mut book, first.clone()).unwrap();
        ExpenseService::save(&mut book, second).unwrap();

        let mut edited = first;
        edited.kind = ExpenseKind::Maintenance;
        edited.cost = 120.0;
        ExpenseService::save(&mut book, edited).unwrap();

        assert_eq!(book.expenses.len(), 2);
        assert_eq!(book.expenses[0].id, target_id);
        assert_eq!(book.expenses[0].kind, ExpenseKind::Maintenance);
        assert_eq!(book.expenses[0].cost, 120.0);
    }

    #[test]
    fn remove_deletes_by_id() {
        let mut book = Book::new();
        let expense = sample_expense("KA-1123", 30.0);
        let id = expense.id;
        ExpenseService::save(&mut book, expense).unwrap();
        let removed = ExpenseService::remove(&mut book, id).unwrap();
        assert_eq!(removed.id, id);
        assert!(book.expenses.is_empty());
    }
}
