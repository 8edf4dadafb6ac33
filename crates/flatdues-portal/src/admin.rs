use chrono::{Datelike, NaiveDate};
use flatdues_common::models::auth::{RegisterRequest, Role};
use flatdues_common::models::bill::{Bill, NewBill};
use flatdues_common::models::resident::Resident;
use flatdues_common::validation::{self, DEFAULT_RESIDENT_PASSWORD, MONTHS};
use uuid::Uuid;

use crate::client::PortalClient;
use crate::error::PortalError;

/// Form model for the create-bill dialog
#[derive(Debug, Clone, PartialEq)]
pub struct BillDraft {
    pub resident_id: Option<Uuid>,
    pub amount: Option<f64>,
    pub month: String,
    pub year: i32,
    pub due_date: Option<NaiveDate>,
    pub description: String,
}

impl BillDraft {
    /// Draft pre-filled for the current billing period
    pub fn for_current_period() -> Self {
        let today = chrono::Local::now().date_naive();
        Self::for_period(today)
    }

    fn for_period(date: NaiveDate) -> Self {
        Self {
            resident_id: None,
            amount: None,
            month: MONTHS[date.month0() as usize].to_string(),
            year: date.year(),
            due_date: None,
            description: "Monthly Maintenance".to_string(),
        }
    }

    /// Reset after a successful submit, keeping the billing period and
    /// description for the next bill.
    fn reset_after_submit(&mut self) {
        self.resident_id = None;
        self.amount = None;
        self.due_date = None;
    }

    fn to_request(&self) -> Result<NewBill, PortalError> {
        let resident_id = self
            .resident_id
            .ok_or_else(|| PortalError::Validation("Choose a resident".to_string()))?;
        let amount = self
            .amount
            .ok_or_else(|| PortalError::Validation("Amount is required".to_string()))?;
        let due_date = self
            .due_date
            .ok_or_else(|| PortalError::Validation("Due date is required".to_string()))?;

        let bill = NewBill {
            resident_id,
            amount,
            month: self.month.clone(),
            year: self.year,
            due_date,
            description: self.description.clone(),
        };
        validation::validate_new_bill(&bill).map_err(|e| PortalError::Validation(e.to_string()))?;
        Ok(bill)
    }
}

/// Admin view over all bills. Carries the resident roster too, because the
/// create-bill form selects a resident from it.
pub struct BillDirectory {
    client: PortalClient,
    token: String,
    pub bills: Vec<Bill>,
    pub residents: Vec<Resident>,
    pub draft: BillDraft,
}

impl BillDirectory {
    pub(crate) fn new(client: PortalClient, token: String) -> Self {
        Self {
            client,
            token,
            bills: Vec::new(),
            residents: Vec::new(),
            draft: BillDraft::for_current_period(),
        }
    }

    /// Re-fetch both lists from the server. Server-determined order is
    /// preserved; nothing is re-sorted client-side.
    pub async fn refresh(&mut self) -> Result<(), PortalError> {
        self.bills = self.client.list_bills(&self.token).await?;
        self.residents = self.client.list_residents(&self.token).await?;
        Ok(())
    }

    /// Create a bill from the current draft, then resynchronize from the
    /// server. No local patch: the displayed list always reflects server
    /// truth.
    pub async fn submit_draft(&mut self) -> Result<Bill, PortalError> {
        let request = self.draft.to_request()?;
        let bill = self.client.create_bill(&self.token, &request).await?;
        tracing::info!(
            "Created bill of {} for resident {} ({} {})",
            request.amount,
            request.resident_id,
            request.month,
            request.year
        );
        self.refresh().await?;
        self.draft.reset_after_submit();
        Ok(bill)
    }
}

/// Form model for the add-resident dialog
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResidentDraft {
    pub name: String,
    pub email: String,
    pub contact: String,
    pub flat_number: String,
    pub password: String,
}

impl ResidentDraft {
    fn to_request(&self) -> Result<RegisterRequest, PortalError> {
        let password = if self.password.is_empty() {
            tracing::warn!(
                "Applying the default resident password for {}",
                self.email
            );
            DEFAULT_RESIDENT_PASSWORD.to_string()
        } else {
            self.password.clone()
        };

        let req = RegisterRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            password,
            contact: self.contact.clone(),
            role: Role::Resident,
            flat_number: Some(self.flat_number.clone()),
        };
        validation::validate_registration(&req)
            .map_err(|e| PortalError::Validation(e.to_string()))?;
        Ok(req)
    }
}

/// Admin view over the resident roster
pub struct ResidentDirectory {
    client: PortalClient,
    token: String,
    pub residents: Vec<Resident>,
    pub draft: ResidentDraft,
}

impl ResidentDirectory {
    pub(crate) fn new(client: PortalClient, token: String) -> Self {
        Self {
            client,
            token,
            residents: Vec::new(),
            draft: ResidentDraft::default(),
        }
    }

    /// Re-fetch the roster from the server (server order preserved).
    pub async fn refresh(&mut self) -> Result<(), PortalError> {
        self.residents = self.client.list_residents(&self.token).await?;
        Ok(())
    }

    /// Register a resident account from the current draft, then
    /// resynchronize the roster and reset the form.
    ///
    /// Registration goes to the public register endpoint and never touches
    /// the admin's own session; the created account shows up in the
    /// refreshed roster.
    pub async fn submit_draft(&mut self) -> Result<(), PortalError> {
        let request = self.draft.to_request()?;
        self.client.register(&request).await?;
        tracing::info!("Registered resident {} (flat {})", request.email, self.draft.flat_number);
        self.refresh().await?;
        self.draft = ResidentDraft::default();
        Ok(())
    }
}
