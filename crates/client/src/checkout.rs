//! Checkout form state machine.
//!
//! The flow holds the address/payment form and a small state machine
//! around submission. A failed submission keeps the form data and drops
//! back to a submittable state with the error text attached; only a
//! successful submission (which hands the user to the external payment
//! redirect) is terminal.

use crate::api::ApiClient;
use crate::types::{CheckoutRequest, CheckoutSession};

/// The checkout address/payment form.
///
/// Every field must be non-empty after trimming before submission is
/// allowed; values are trimmed again when building the request body.
#[derive(Debug, Clone, Default)]
pub struct CheckoutForm {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub payment_method: String,
    pub currency: String,
    pub shipping_method: String,
}

impl CheckoutForm {
    fn fields(&self) -> [(&'static str, &str); 8] {
        [
            ("street", &self.street),
            ("city", &self.city),
            ("state", &self.state),
            ("zipCode", &self.zip_code),
            ("country", &self.country),
            ("paymentMethod", &self.payment_method),
            ("currency", &self.currency),
            ("shippingMethod", &self.shipping_method),
        ]
    }

    /// Names of fields still blank, in form order.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        self.fields()
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
            .collect()
    }

    /// Whether every field holds a non-blank value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    fn to_request(&self) -> CheckoutRequest {
        CheckoutRequest {
            street: self.street.trim().to_string(),
            city: self.city.trim().to_string(),
            state: self.state.trim().to_string(),
            zip_code: self.zip_code.trim().to_string(),
            country: self.country.trim().to_string(),
            payment_method: self.payment_method.trim().to_string(),
            currency: self.currency.trim().to_string(),
            shipping_method: self.shipping_method.trim().to_string(),
        }
    }
}

/// Where the flow currently stands.
#[derive(Debug, Clone)]
pub enum CheckoutState {
    /// Form editable; submission allowed once complete.
    Editing,
    /// Request in flight; further submissions rejected.
    Submitting,
    /// Terminal: the payment session is live and the user is being
    /// redirected.
    Redirected(CheckoutSession),
    /// Submission failed; the form keeps its data and may be submitted
    /// again.
    Failed(String),
}

/// The checkout flow: form plus submission state.
#[derive(Debug, Clone)]
pub struct CheckoutFlow {
    pub form: CheckoutForm,
    state: CheckoutState,
}

impl Default for CheckoutFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckoutFlow {
    #[must_use]
    pub fn new() -> Self {
        Self {
            form: CheckoutForm::default(),
            state: CheckoutState::Editing,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &CheckoutState {
        &self.state
    }

    /// The error text of the last failed submission, if any.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        match &self.state {
            CheckoutState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Whether the submit button should be live.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        matches!(
            self.state,
            CheckoutState::Editing | CheckoutState::Failed(_)
        ) && self.form.is_complete()
    }

    /// Enter `Submitting` and build the request body.
    ///
    /// Returns `None` when submission is not currently allowed (form
    /// incomplete, already in flight, or already redirected).
    fn begin_submit(&mut self) -> Option<CheckoutRequest> {
        if !self.can_submit() {
            return None;
        }
        self.state = CheckoutState::Submitting;
        Some(self.form.to_request())
    }

    fn complete(&mut self, session: CheckoutSession) {
        self.state = CheckoutState::Redirected(session);
    }

    fn fail(&mut self, message: String) {
        self.state = CheckoutState::Failed(message);
    }

    /// Submit the form for the whole cart.
    ///
    /// Drives the state machine around [`ApiClient::checkout`]; the
    /// resulting state carries either the payment session or the error
    /// text. A call while submission is not allowed leaves the state
    /// untouched.
    pub async fn submit(&mut self, client: &ApiClient) -> &CheckoutState {
        let Some(request) = self.begin_submit() else {
            return &self.state;
        };
        match client.checkout(&request).await {
            Ok(session) => self.complete(session),
            Err(error) => {
                tracing::warn!(%error, "Checkout submission failed");
                self.fail(error.to_string());
            }
        }
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> CheckoutForm {
        CheckoutForm {
            street: "1 Main St".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            zip_code: "62704".to_string(),
            country: "US".to_string(),
            payment_method: "CREDIT_CARD".to_string(),
            currency: "USD".to_string(),
            shipping_method: "STANDARD".to_string(),
        }
    }

    #[test]
    fn test_blank_field_blocks_submission() {
        let mut flow = CheckoutFlow::new();
        flow.form = filled_form();
        flow.form.zip_code = "   ".to_string();
        assert!(!flow.can_submit());
        assert_eq!(flow.form.missing_fields(), vec!["zipCode"]);
        assert!(flow.begin_submit().is_none());
        assert!(matches!(flow.state(), CheckoutState::Editing));
    }

    #[test]
    fn test_complete_form_is_submittable() {
        let mut flow = CheckoutFlow::new();
        flow.form = filled_form();
        assert!(flow.can_submit());

        let request = flow.begin_submit().unwrap_or_else(|| unreachable!());
        assert_eq!(request.zip_code, "62704");
        assert!(matches!(flow.state(), CheckoutState::Submitting));
        // In flight: no double submit.
        assert!(!flow.can_submit());
    }

    #[test]
    fn test_failure_keeps_data_and_stays_submittable() {
        let mut flow = CheckoutFlow::new();
        flow.form = filled_form();
        flow.begin_submit();
        flow.fail("payment service unavailable".to_string());

        assert_eq!(flow.last_error(), Some("payment service unavailable"));
        assert_eq!(flow.form.street, "1 Main St");
        assert!(flow.can_submit());
    }

    #[test]
    fn test_redirected_is_terminal() {
        let mut flow = CheckoutFlow::new();
        flow.form = filled_form();
        flow.begin_submit();
        flow.complete(CheckoutSession {
            session_id: "sess_1".to_string(),
            redirect_url: Some("https://pay.example/sess_1".to_string()),
        });

        assert!(!flow.can_submit());
        assert!(flow.begin_submit().is_none());
        assert!(matches!(flow.state(), CheckoutState::Redirected(_)));
    }

    #[test]
    fn test_request_body_is_trimmed() {
        let mut form = filled_form();
        form.city = "  Springfield  ".to_string();
        let mut flow = CheckoutFlow::new();
        flow.form = form;
        let request = flow.begin_submit().unwrap_or_else(|| unreachable!());
        assert_eq!(request.city, "Springfield");
    }
}
