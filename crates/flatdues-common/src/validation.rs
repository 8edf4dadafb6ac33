use anyhow::{bail, Result};

use crate::models::auth::{RegisterRequest, Role};
use crate::models::bill::NewBill;

/// Month names as the backend stores them on bills
pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Placeholder credential applied when an admin registers a resident without
/// choosing a password. Known weakness, kept as an explicit decision; callers
/// log when it is applied.
pub const DEFAULT_RESIDENT_PASSWORD: &str = "Resident@123";

/// Validates a bill-creation payload before it is sent.
pub fn validate_new_bill(bill: &NewBill) -> Result<()> {
    if !bill.amount.is_finite() || bill.amount <= 0.0 {
        bail!("Amount must be a positive number");
    }
    if !MONTHS.contains(&bill.month.as_str()) {
        bail!("'{}' is not a month name", bill.month);
    }
    if !(1900..=9999).contains(&bill.year) {
        bail!("Year {} is out of range", bill.year);
    }
    if bill.description.trim().is_empty() {
        bail!("Description must not be empty");
    }
    Ok(())
}

/// Validates an account-creation payload before it is sent.
/// Residents must carry a flat number; admins must not.
pub fn validate_registration(req: &RegisterRequest) -> Result<()> {
    if req.name.trim().is_empty() {
        bail!("Name must not be empty");
    }
    if req.email.trim().is_empty() || !req.email.contains('@') {
        bail!("'{}' is not a valid email address", req.email);
    }
    if req.contact.trim().is_empty() {
        bail!("Contact number must not be empty");
    }
    if req.password.is_empty() {
        bail!("Password must not be empty");
    }
    match (req.role, &req.flat_number) {
        (Role::Resident, None) => bail!("Residents must have a flat number"),
        (Role::Resident, Some(flat)) if flat.trim().is_empty() => {
            bail!("Residents must have a flat number")
        }
        (Role::Admin, Some(_)) => bail!("Admin accounts do not have a flat number"),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn test_bill() -> NewBill {
        NewBill {
            resident_id: Uuid::new_v4(),
            amount: 1500.0,
            month: "August".to_string(),
            year: 2026,
            due_date: NaiveDate::from_ymd_opt(2026, 8, 31).unwrap(),
            description: "Monthly Maintenance".to_string(),
        }
    }

    fn test_registration() -> RegisterRequest {
        RegisterRequest {
            name: "Ravi Mehta".to_string(),
            email: "ravi@example.com".to_string(),
            password: "s3cret!".to_string(),
            contact: "9876543210".to_string(),
            role: Role::Resident,
            flat_number: Some("B-204".to_string()),
        }
    }

    #[test]
    fn test_valid_bill_passes() {
        assert!(validate_new_bill(&test_bill()).is_ok());
    }

    #[test]
    fn test_bill_amount_must_be_positive() {
        let mut bill = test_bill();
        bill.amount = 0.0;
        assert!(validate_new_bill(&bill).is_err());

        bill.amount = -250.0;
        assert!(validate_new_bill(&bill).is_err());

        bill.amount = f64::NAN;
        assert!(validate_new_bill(&bill).is_err());
    }

    #[test]
    fn test_bill_month_must_be_a_month_name() {
        let mut bill = test_bill();
        bill.month = "Augst".to_string();
        let err = validate_new_bill(&bill).unwrap_err();
        assert!(err.to_string().contains("not a month name"));
    }

    #[test]
    fn test_bill_year_range() {
        let mut bill = test_bill();
        bill.year = 180;
        assert!(validate_new_bill(&bill).is_err());
    }

    #[test]
    fn test_bill_description_required() {
        let mut bill = test_bill();
        bill.description = "   ".to_string();
        assert!(validate_new_bill(&bill).is_err());
    }

    #[test]
    fn test_valid_registration_passes() {
        assert!(validate_registration(&test_registration()).is_ok());
    }

    #[test]
    fn test_registration_email_must_look_like_email() {
        let mut req = test_registration();
        req.email = "ravi.example.com".to_string();
        assert!(validate_registration(&req).is_err());
    }

    #[test]
    fn test_resident_requires_flat_number() {
        let mut req = test_registration();
        req.flat_number = None;
        assert!(validate_registration(&req).is_err());

        req.flat_number = Some("  ".to_string());
        assert!(validate_registration(&req).is_err());
    }

    #[test]
    fn test_admin_must_not_have_flat_number() {
        let mut req = test_registration();
        req.role = Role::Admin;
        assert!(validate_registration(&req).is_err());

        req.flat_number = None;
        assert!(validate_registration(&req).is_ok());
    }

    #[test]
    fn test_registration_password_required() {
        // The default-password fallback happens before validation; by the
        // time a request is validated the password must be non-empty.
        let mut req = test_registration();
        req.password = String::new();
        assert!(validate_registration(&req).is_err());
    }
}
