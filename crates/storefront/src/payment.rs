//! Mock payment gateway.
//!
//! The demo store never charges anyone. The form still gets structural
//! validation so the rendering layer has real errors to show, and every
//! structurally valid charge is approved with a generated reference.

use rand::Rng;
use rand::distr::Alphanumeric;
use thiserror::Error;

use electromart_core::Money;

/// Length of the generated payment reference suffix.
const REFERENCE_SUFFIX_LEN: usize = 8;

/// Errors from validating a payment form.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaymentError {
    /// A required field is empty.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Card number must be 13-19 digits (spaces allowed).
    #[error("card number must be 13-19 digits")]
    InvalidCardNumber,

    /// Expiry must look like MM/YY.
    #[error("expiry must be in MM/YY format")]
    InvalidExpiry,

    /// CVV must be 3 or 4 digits.
    #[error("cvv must be 3 or 4 digits")]
    InvalidCvv,
}

/// Card details entered on the payment page.
#[derive(Debug, Clone)]
pub struct PaymentForm {
    /// Name printed on the card.
    pub cardholder: String,
    /// Card number; digits, optionally space-separated.
    pub card_number: String,
    /// Expiry in MM/YY format.
    pub expiry: String,
    /// Security code.
    pub cvv: String,
}

impl PaymentForm {
    /// Validate the form structurally.
    ///
    /// # Errors
    ///
    /// Returns the first failing check: missing fields, then card number,
    /// expiry, and cvv shape.
    pub fn validate(&self) -> Result<(), PaymentError> {
        if self.cardholder.trim().is_empty() {
            return Err(PaymentError::MissingField("cardholder"));
        }

        let digits: String = self
            .card_number
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        if digits.is_empty() {
            return Err(PaymentError::MissingField("card number"));
        }
        if !digits.chars().all(|c| c.is_ascii_digit()) || !(13..=19).contains(&digits.len()) {
            return Err(PaymentError::InvalidCardNumber);
        }

        validate_expiry(&self.expiry)?;

        if !(3..=4).contains(&self.cvv.len()) || !self.cvv.chars().all(|c| c.is_ascii_digit()) {
            return Err(PaymentError::InvalidCvv);
        }

        Ok(())
    }

    /// Last four digits of the card number, for receipts.
    #[must_use]
    pub fn card_last_four(&self) -> String {
        let digits: Vec<char> = self
            .card_number
            .chars()
            .filter(char::is_ascii_digit)
            .collect();
        digits.iter().rev().take(4).rev().collect()
    }
}

fn validate_expiry(expiry: &str) -> Result<(), PaymentError> {
    let Some((month, year)) = expiry.split_once('/') else {
        return Err(PaymentError::InvalidExpiry);
    };

    if month.len() != 2 || year.len() != 2 {
        return Err(PaymentError::InvalidExpiry);
    }

    let month: u8 = month.parse().map_err(|_| PaymentError::InvalidExpiry)?;
    if !(1..=12).contains(&month) {
        return Err(PaymentError::InvalidExpiry);
    }
    year.parse::<u8>().map_err(|_| PaymentError::InvalidExpiry)?;

    Ok(())
}

/// Proof that the mock gateway "took" a payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentReceipt {
    /// Amount charged.
    pub amount: Money,
    /// Last four digits of the card used.
    pub card_last_four: String,
    /// Opaque payment reference.
    pub reference: String,
}

/// A payment gateway that approves everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockGateway;

impl MockGateway {
    /// Charge a card. Validation aside, this always succeeds - no real
    /// payment is attempted.
    ///
    /// # Errors
    ///
    /// Returns `PaymentError` if the form fails structural validation.
    pub fn charge(form: &PaymentForm, amount: Money) -> Result<PaymentReceipt, PaymentError> {
        form.validate()?;

        let receipt = PaymentReceipt {
            amount,
            card_last_four: form.card_last_four(),
            reference: generate_reference(),
        };
        tracing::info!(reference = %receipt.reference, amount = %amount, "mock payment approved");
        Ok(receipt)
    }
}

fn generate_reference() -> String {
    let suffix: String = rand::rng()
        .sample_iter(Alphanumeric)
        .take(REFERENCE_SUFFIX_LEN)
        .map(|b| char::from(b).to_ascii_uppercase())
        .collect();
    format!("PAY-{suffix}")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn valid_form() -> PaymentForm {
        PaymentForm {
            cardholder: "IVAN PETROV".to_owned(),
            card_number: "4276 5500 1234 5678".to_owned(),
            expiry: "12/27".to_owned(),
            cvv: "123".to_owned(),
        }
    }

    #[test]
    fn test_valid_form_is_charged() {
        let receipt = MockGateway::charge(&valid_form(), Money::from(2500)).unwrap();
        assert_eq!(receipt.amount, Money::from(2500));
        assert_eq!(receipt.card_last_four, "5678");
        assert!(receipt.reference.starts_with("PAY-"));
    }

    #[test]
    fn test_blank_cardholder_rejected() {
        let mut form = valid_form();
        form.cardholder = "   ".to_owned();
        assert_eq!(
            form.validate(),
            Err(PaymentError::MissingField("cardholder"))
        );
    }

    #[test]
    fn test_card_number_shape() {
        let mut form = valid_form();
        form.card_number = "1234".to_owned();
        assert_eq!(form.validate(), Err(PaymentError::InvalidCardNumber));

        form.card_number = "4276 5500 1234 ABCD".to_owned();
        assert_eq!(form.validate(), Err(PaymentError::InvalidCardNumber));
    }

    #[test]
    fn test_expiry_shape() {
        let mut form = valid_form();
        for bad in ["1227", "13/27", "1/27", "12/7", "ab/cd"] {
            form.expiry = bad.to_owned();
            assert_eq!(form.validate(), Err(PaymentError::InvalidExpiry), "{bad}");
        }
    }

    #[test]
    fn test_cvv_shape() {
        let mut form = valid_form();
        form.cvv = "12".to_owned();
        assert_eq!(form.validate(), Err(PaymentError::InvalidCvv));

        form.cvv = "12a".to_owned();
        assert_eq!(form.validate(), Err(PaymentError::InvalidCvv));

        form.cvv = "1234".to_owned();
        assert!(form.validate().is_ok());
    }
}
