//! Assembles client/month order filters into statement documents.

use crate::error::{CoreError, CoreResult};
use crate::finance::FinanceService;
use fleetbook_domain::common::StatementMonth;
use fleetbook_domain::invoice::{Invoice, InvoiceLine};
use fleetbook_domain::order::Order;

/// Filters and aggregates orders into an [`Invoice`] for one client/month.
///
/// See also: [`FinanceService`] for the per-line and total computations.
pub struct StatementService;

impl StatementService {
    /// Builds the statement for `client` over `month`.
    ///
    /// Line items keep the orders' insertion order; no re-sort by date.
    /// Returns [`CoreError::NoData`] when the client is unset or no order
    /// matches the filter — a precondition failure, not a computation error.
    pub fn assemble(orders: &[Order], client: &str, month: StatementMonth) -> CoreResult<Invoice> {
        if client.trim().is_empty() {
            return Err(CoreError::NoData {
                client: client.to_string(),
                month: month.to_string(),
            });
        }
        let line_items: Vec<InvoiceLine> = orders
            .iter()
            .filter(|order| order.client_name == client && month.contains(order.date))
            .map(|order| InvoiceLine {
                order: order.clone(),
                balance: FinanceService::balance(order),
            })
            .collect();
        if line_items.is_empty() {
            return Err(CoreError::NoData {
                client: client.to_string(),
                month: month.to_string(),
            });
        }
        let total_unpaid = FinanceService::unpaid_total(orders, client, month);
        Ok(Invoice {
            client: client.to_string(),
            month,
            line_items,
            total_unpaid,
        })
    }
}
