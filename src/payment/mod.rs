//! UPI payment requests and payment-intent URIs
//!
//! A [`PaymentRequest`] names who gets paid and, optionally, how much. The
//! [`UpiUriBuilder`] turns it into the `upi://pay?...` string that payment
//! apps scan.

mod uri;

pub use uri::{PaymentUri, UpiUriBuilder};

use crate::error::{Error, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Largest number of fractional digits a rupee amount may carry (paise).
pub const MAX_AMOUNT_SCALE: u32 = 2;

/// Merchant receiving the payment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payee {
    /// UPI virtual payment address, e.g. `pehenava@paytm`
    pub id: String,
    /// Display name shown by the scanning app
    pub name: String,
}

impl Payee {
    /// Create a payee after checking both fields.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        let payee = Self {
            id: id.into(),
            name: name.into(),
        };
        payee.validate()?;
        Ok(payee)
    }

    /// Check the address shape and that the display name is not blank.
    pub fn validate(&self) -> Result<()> {
        validate_vpa(&self.id)?;
        if self.name.trim().is_empty() {
            return Err(Error::InvalidPayment(
                "payee name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Payee {
    fn default() -> Self {
        Self {
            id: "pehenava@paytm".to_string(),
            name: "Pehenava".to_string(),
        }
    }
}

/// A single payment intent. `amount == None` is the general, open-amount QR.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentRequest {
    payee: Payee,
    amount: Option<Decimal>,
}

impl PaymentRequest {
    /// Request for a fixed amount in rupees.
    pub fn with_amount(payee: Payee, amount: Decimal) -> Result<Self> {
        validate_amount(amount)?;
        payee.validate()?;
        Ok(Self {
            payee,
            amount: Some(amount),
        })
    }

    /// Request that leaves the amount to the payer.
    pub fn open(payee: Payee) -> Result<Self> {
        payee.validate()?;
        Ok(Self {
            payee,
            amount: None,
        })
    }

    /// The receiving merchant
    pub fn payee(&self) -> &Payee {
        &self.payee
    }

    /// The requested amount, if fixed
    pub fn amount(&self) -> Option<Decimal> {
        self.amount
    }
}

/// Render an amount the way it appears in URIs and file names: no grouping,
/// no trailing zeros, `.` as separator.
pub fn format_amount(amount: Decimal) -> String {
    amount.normalize().to_string()
}

fn validate_amount(amount: Decimal) -> Result<()> {
    if amount <= Decimal::ZERO {
        return Err(Error::InvalidPayment(format!(
            "amount must be positive, got {amount}"
        )));
    }
    if amount.normalize().scale() > MAX_AMOUNT_SCALE {
        return Err(Error::InvalidPayment(format!(
            "amount {amount} has more than {MAX_AMOUNT_SCALE} decimal places"
        )));
    }
    Ok(())
}

/// Accepts `handle@provider` where both halves use `[A-Za-z0-9._-]`.
fn validate_vpa(vpa: &str) -> Result<()> {
    let invalid = |reason: &str| Error::InvalidPayment(format!("payee id '{vpa}' {reason}"));

    let (handle, provider) = vpa
        .split_once('@')
        .ok_or_else(|| invalid("must look like handle@provider"))?;

    if handle.is_empty() || provider.is_empty() {
        return Err(invalid("must look like handle@provider"));
    }

    let allowed = |c: char| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-');
    if !handle.chars().all(allowed) || !provider.chars().all(allowed) {
        return Err(invalid("contains characters not allowed in a UPI address"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn default_payee_is_valid() {
        assert!(Payee::default().validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_amounts() {
        for raw in ["0", "-1", "-0.01"] {
            let amount = Decimal::from_str(raw).unwrap();
            let err = PaymentRequest::with_amount(Payee::default(), amount).unwrap_err();
            assert!(matches!(err, Error::InvalidPayment(_)), "{raw}");
        }
    }

    #[test]
    fn rejects_sub_paise_amounts() {
        let amount = Decimal::from_str("10.005").unwrap();
        assert!(PaymentRequest::with_amount(Payee::default(), amount).is_err());

        // trailing zeros do not count against the scale
        let amount = Decimal::from_str("10.500").unwrap();
        assert!(PaymentRequest::with_amount(Payee::default(), amount).is_ok());
    }

    #[test]
    fn rejects_malformed_payee_ids() {
        for id in ["", "pehenava", "@paytm", "pehenava@", "a@b@c", "peh enava@paytm", "x&y@paytm"] {
            assert!(Payee::new(id, "Pehenava").is_err(), "{id:?} should be rejected");
        }
        assert!(Payee::new("shop.owner-1_x@okaxis", "Shop").is_ok());
    }

    #[test]
    fn rejects_blank_payee_name() {
        assert!(Payee::new("pehenava@paytm", "   ").is_err());
    }

    #[test]
    fn open_request_has_no_amount() {
        let request = PaymentRequest::open(Payee::default()).unwrap();
        assert_eq!(request.amount(), None);
        assert_eq!(request.payee().id, "pehenava@paytm");
    }

    #[test]
    fn formats_amounts_without_grouping() {
        assert_eq!(format_amount(Decimal::from(50000)), "50000");
        assert_eq!(format_amount(Decimal::from_str("2500.50").unwrap()), "2500.5");
        assert_eq!(format_amount(Decimal::from_str("1000.00").unwrap()), "1000");
    }
}
