//! Derived monthly statement values handed to an external renderer.

use serde::{Deserialize, Serialize};

use crate::common::StatementMonth;
use crate::order::Order;

/// A derived, non-persisted monthly summary of a client's orders.
///
/// Invoices are transient values owned by the caller that requested them;
/// they are recomputed on demand and never stored. The struct doubles as
/// the data contract consumed by the external document renderer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Invoice {
    pub client: String,
    pub month: StatementMonth,
    pub line_items: Vec<InvoiceLine>,
    pub total_unpaid: f64,
}

/// One statement row: the order together with its outstanding balance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InvoiceLine {
    pub order: Order,
    pub balance: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::PaymentMethod;
    use chrono::NaiveDate;

    #[test]
    fn invoice_serializes_the_renderer_contract() {
        let order = Order::new(
            NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
            "KA-1123",
            "Acme",
            "Haulage",
            "North depot",
            40.0,
            100.0,
            PaymentMethod::Postpaid,
        );
        let invoice = Invoice {
            client: "Acme".into(),
            month: StatementMonth::new(2024, 5).unwrap(),
            line_items: vec![InvoiceLine {
                order,
                balance: 100.0,
            }],
            total_unpaid: 100.0,
        };

        let value = serde_json::to_value(&invoice).expect("serialize invoice");
        assert_eq!(value["client"], "Acme");
        assert_eq!(value["total_unpaid"], 100.0);
        assert_eq!(value["line_items"][0]["balance"], 100.0);
        assert_eq!(value["line_items"][0]["order"]["payment_method"], "Postpaid");

        let back: Invoice = serde_json::from_value(value).expect("deserialize invoice");
        assert_eq!(back, invoice);
    }
}
