use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Bill lifecycle status. The only transition is Unpaid -> Paid, triggered by
/// the resident's pay action; there is no cancel, partial payment, or re-open.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BillStatus {
    Unpaid,
    Paid,
}

/// One resident's maintenance charge for a given month/year
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub id: Uuid,
    pub resident_id: Uuid,
    pub amount: f64,
    /// English month name ("January".."December")
    pub month: String,
    pub year: i32,
    pub due_date: NaiveDate,
    pub status: BillStatus,
    pub description: String,
}

/// Bill-creation payload (admin side)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBill {
    pub resident_id: Uuid,
    pub amount: f64,
    pub month: String,
    pub year: i32,
    pub due_date: NaiveDate,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayRequest {
    pub bill_id: Uuid,
}

/// One entry in the admin overview's recent-payments feed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecentPayment {
    pub id: Uuid,
    pub resident_name: String,
    pub flat_number: String,
    pub amount: f64,
    pub payment_date: DateTime<Utc>,
}

/// Aggregates for the admin overview screen
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub total_received: f64,
    pub pending_amount: f64,
    pub total_residents: u64,
    pub recent_payments: Vec<RecentPayment>,
}
