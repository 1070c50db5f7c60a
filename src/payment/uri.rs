//! UPI deep-link construction

use super::{PaymentRequest, format_amount};
use crate::error::{Error, Result};
use std::fmt;

/// A fully built `upi://pay?...` string
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PaymentUri(String);

impl PaymentUri {
    /// Borrow the URI text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PaymentUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Builds payment URIs with a fixed scheme, currency and transaction note.
///
/// Query keys are always emitted in the order `pa`, `pn`, `am`, `cu`, `tn`;
/// `am` only appears for fixed-amount requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpiUriBuilder {
    scheme: String,
    currency: String,
    note: String,
}

impl UpiUriBuilder {
    /// Default scheme
    pub const SCHEME: &'static str = "upi";
    /// Default ISO 4217 currency code
    pub const CURRENCY: &'static str = "INR";
    /// Default transaction note
    pub const NOTE: &'static str = "Pehenava Purchase";

    /// Builder with the storefront defaults (`upi`, `INR`, `Pehenava Purchase`)
    pub fn new() -> Self {
        Self {
            scheme: Self::SCHEME.to_string(),
            currency: Self::CURRENCY.to_string(),
            note: Self::NOTE.to_string(),
        }
    }

    /// Override the URI scheme
    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    /// Override the currency code
    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Override the transaction note
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// Build the URI for a request.
    pub fn build(&self, request: &PaymentRequest) -> Result<PaymentUri> {
        if self.scheme.is_empty() || !self.scheme.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(Error::Config(format!(
                "Invalid URI scheme '{}'",
                self.scheme
            )));
        }
        if self.currency.len() != 3 || !self.currency.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(Error::Config(format!(
                "Currency '{}' is not a three-letter ISO code",
                self.currency
            )));
        }

        let payee = request.payee();
        let mut uri = format!(
            "{}://pay?pa={}&pn={}",
            self.scheme,
            payee.id,
            urlencoding::encode(&payee.name)
        );

        if let Some(amount) = request.amount() {
            uri.push_str("&am=");
            uri.push_str(&format_amount(amount));
        }

        uri.push_str("&cu=");
        uri.push_str(&self.currency);
        uri.push_str("&tn=");
        uri.push_str(&urlencoding::encode(&self.note));

        Ok(PaymentUri(uri))
    }
}

impl Default for UpiUriBuilder {
    fn default() -> Self {
        Self::new()
    }
}
