use std::collections::HashSet;

use flatdues_common::models::bill::{Bill, BillStatus};
use uuid::Uuid;

use crate::client::PortalClient;
use crate::error::PortalError;

/// Partition of a resident's bills into pending and paid, with totals.
/// The partition is exhaustive and disjoint: every bill lands on exactly
/// one side and `total_due + total_paid` equals the sum over the list.
#[derive(Debug, Clone, PartialEq)]
pub struct DuesSummary {
    pub pending: Vec<Bill>,
    pub paid: Vec<Bill>,
    pub total_due: f64,
    pub total_paid: f64,
}

/// Partition `bills` by status and total each side. Pure: recomputed from
/// the list on every call, so no cached aggregate can drift from the data.
pub fn summarize(bills: &[Bill]) -> DuesSummary {
    let (pending, paid): (Vec<Bill>, Vec<Bill>) = bills
        .iter()
        .cloned()
        .partition(|b| b.status == BillStatus::Unpaid);
    let total_due = pending.iter().map(|b| b.amount).sum();
    let total_paid = paid.iter().map(|b| b.amount).sum();
    DuesSummary {
        pending,
        paid,
        total_due,
        total_paid,
    }
}

/// Outcome of a pay attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayOutcome {
    /// Payment accepted and the list resynchronized
    Paid,
    /// The user declined the confirmation prompt; nothing was sent
    Cancelled,
    /// A payment for this bill is already in flight
    InFlight,
}

/// The signed-in resident's view of their own bills.
///
/// Scoping happens server-side from the bearer token; this view never
/// filters by identity. Status flips only through a re-fetch after the
/// server confirms a payment - there is no optimistic update to roll back.
pub struct DuesBoard {
    client: PortalClient,
    token: String,
    pub bills: Vec<Bill>,
    in_flight: HashSet<Uuid>,
}

impl DuesBoard {
    pub(crate) fn new(client: PortalClient, token: String) -> Self {
        Self {
            client,
            token,
            bills: Vec::new(),
            in_flight: HashSet::new(),
        }
    }

    /// Re-fetch the caller's bills from the server.
    pub async fn refresh(&mut self) -> Result<(), PortalError> {
        self.bills = self.client.own_bills(&self.token).await?;
        Ok(())
    }

    /// Current partition and totals, recomputed from the fetched list.
    pub fn summary(&self) -> DuesSummary {
        summarize(&self.bills)
    }

    /// Whether a pay request for this bill is in flight. A UI disables
    /// exactly that bill's control; other bills stay enabled.
    pub fn is_paying(&self, bill_id: Uuid) -> bool {
        self.in_flight.contains(&bill_id)
    }

    /// Pay one bill. `confirm` is the interactive-confirmation seam: it
    /// receives the bill about to be paid and declining sends nothing.
    ///
    /// On success the full list is re-fetched and the bill comes back Paid.
    /// On failure the in-flight mark is released and the local list is left
    /// untouched - the caller surfaces the error and the bill stays Unpaid.
    pub async fn pay<F>(&mut self, bill_id: Uuid, confirm: F) -> Result<PayOutcome, PortalError>
    where
        F: FnOnce(&Bill) -> bool,
    {
        if self.in_flight.contains(&bill_id) {
            return Ok(PayOutcome::InFlight);
        }
        let Some(bill) = self.bills.iter().find(|b| b.id == bill_id) else {
            return Err(PortalError::Validation(format!("Unknown bill: {}", bill_id)));
        };
        if !confirm(bill) {
            return Ok(PayOutcome::Cancelled);
        }

        self.in_flight.insert(bill_id);
        let result = self.client.pay_bill(&self.token, bill_id).await;
        self.in_flight.remove(&bill_id);
        result?;

        tracing::info!("Paid bill {}", bill_id);
        self.refresh().await?;
        Ok(PayOutcome::Paid)
    }
}
