//! Pure financial calculators for order balances and unpaid totals.

use fleetbook_domain::common::StatementMonth;
use fleetbook_domain::order::{Order, PaymentMethod};

/// Pure, side-effect-free balance and aggregation functions.
///
/// `balance` and `unpaid_total` coincide under the current payment rules
/// but are defined and tested independently; a change to one must not
/// silently alter the other.
pub struct FinanceService;

impl FinanceService {
    /// Outstanding amount owed on a single order.
    ///
    /// Cash orders and settled postpaid orders carry no balance.
    pub fn balance(order: &Order) -> f64 {
        if order.payment_method == PaymentMethod::Postpaid && !order.paid {
            order.price
        } else {
            0.0
        }
    }

    /// Sum of `price` over the client's unpaid postpaid orders in `month`.
    ///
    /// This is a literal summation of prices over the filter, not a fold
    /// over [`FinanceService::balance`].
    pub fn unpaid_total(orders: &[Order], client: &str, month: StatementMonth) -> f64 {
        orders
            .iter()
            .filter(|order| {
                order.client_name == client
                    && month.contains(order.date)
                    && order.payment_method == PaymentMethod::Postpaid
                    && !order.paid
            })
            .map(|order| order.price)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn order(client: &str, date: (i32, u32, u32), price: f64, method: PaymentMethod, paid: bool) -> Order {
        let mut order = Order::new(
            NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            "KA-1123",
            client,
            "Haulage",
            "North depot",
            10.0,
            price,
            method,
        );
        order.paid = paid;
        order
    }

    #[test]
    fn balance_is_zero_for_cash_regardless_of_paid() {
        for paid in [false, true] {
            let cash = order("Acme", (2024, 5, 10), 100.0, PaymentMethod::Cash, paid);
            assert_eq!(FinanceService::balance(&cash), 0.0);
        }
    }

    #[test]
    fn balance_equals_price_only_for_unpaid_postpaid() {
        let outstanding = order("Acme", (2024, 5, 10), 100.0, PaymentMethod::Postpaid, false);
        assert_eq!(FinanceService::balance(&outstanding), 100.0);

        let settled = order("Acme", (2024, 5, 10), 100.0, PaymentMethod::Postpaid, true);
        assert_eq!(FinanceService::balance(&settled), 0.0);
    }

    #[test]
    fn unpaid_total_sums_prices_over_the_full_filter() {
        let orders = vec![
            order("Acme", (2024, 5, 10), 100.0, PaymentMethod::Postpaid, false),
            order("Acme", (2024, 5, 12), 60.0, PaymentMethod::Postpaid, true),
            order("Acme", (2024, 5, 20), 50.0, PaymentMethod::Cash, false),
            order("Acme", (2024, 6, 2), 80.0, PaymentMethod::Postpaid, false),
            order("Globex", (2024, 5, 15), 70.0, PaymentMethod::Postpaid, false),
            order("Acme", (2024, 5, 28), 40.0, PaymentMethod::Postpaid, false),
        ];
        let month = StatementMonth::new(2024, 5).unwrap();
        assert_eq!(FinanceService::unpaid_total(&orders, "Acme", month), 140.0);
    }

    #[test]
    fn unpaid_total_is_zero_for_empty_filter() {
        let orders = vec![order("Acme", (2024, 5, 10), 100.0, PaymentMethod::Postpaid, false)];
        let month = StatementMonth::new(2024, 6).unwrap();
        assert_eq!(FinanceService::unpaid_total(&orders, "Acme", month), 0.0);
        assert_eq!(
            FinanceService::unpaid_total(&orders, "Globex", StatementMonth::new(2024, 5).unwrap()),
            0.0
        );
    }
}
