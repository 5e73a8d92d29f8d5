//! Public vendor intake form.
//!
//! Drives one submission attempt at a time:
//!
//! ```text
//! Idle ──submit──▶ Submitting ──ok──▶ Success
//!                       │
//!                       └──err──▶ Error ──submit──▶ Submitting
//! ```

use tracing::warn;

use super::desk::ApplicationIntake;
use super::model::ApplicationSubmission;
use crate::navigation::{Role, RouteKey};

/// Shown to the applicant whenever a submission fails, whatever the cause.
pub const SUBMIT_FAILED_MESSAGE: &str = "Something went wrong. Please try again.";

/// Services an applicant can tick.
pub const SERVICE_CHOICES: [&str; 6] = ["Water", "Fire", "Mold", "Storm", "Contents", "Boardup"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntakeStatus {
    Idle,
    Submitting,
    Success { application_id: String },
    Error,
}

#[derive(Debug, Clone)]
pub struct IntakeForm {
    pub draft: ApplicationSubmission,
    pub accept_terms: bool,
    status: IntakeStatus,
    error: Option<&'static str>,
}

impl Default for IntakeForm {
    fn default() -> Self {
        Self::new()
    }
}

impl IntakeForm {
    pub fn new() -> Self {
        Self {
            draft: ApplicationSubmission::default(),
            accept_terms: false,
            status: IntakeStatus::Idle,
            error: None,
        }
    }

    /// Where a signed-in visitor is sent instead of seeing the form.
    /// Vendors already belong to the network.
    pub fn redirect_for(role: Role) -> Option<RouteKey> {
        match role {
            Role::Vendor => Some(RouteKey::VendorDashboard),
            _ => None,
        }
    }

    pub fn status(&self) -> &IntakeStatus {
        &self.status
    }

    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    /// Submit is enabled once the required contact fields are filled and terms accepted.
    pub fn can_submit(&self) -> bool {
        !matches!(self.status, IntakeStatus::Submitting | IntakeStatus::Success { .. })
            && self.draft.missing_required().is_empty()
            && self.accept_terms
    }

    /// Toggle a service in the draft's offered list.
    pub fn toggle_service(&mut self, service: &str) {
        let offered = &mut self.draft.services_offered;
        if let Some(pos) = offered.iter().position(|s| s == service) {
            offered.remove(pos);
        } else {
            offered.push(service.to_string());
        }
    }

    /// Replace service areas from comma-separated input, dropping blanks.
    pub fn set_service_areas(&mut self, input: &str) {
        self.draft.service_areas = input
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
    }

    /// Send the draft. Does nothing while submit is disabled.
    pub async fn submit(&mut self, intake: &dyn ApplicationIntake) -> &IntakeStatus {
        if !self.can_submit() {
            return &self.status;
        }
        self.status = IntakeStatus::Submitting;
        self.error = None;

        match intake.submit(self.draft.clone()).await {
            Ok(receipt) => {
                self.status = IntakeStatus::Success {
                    application_id: receipt.application_id,
                };
            }
            Err(e) => {
                warn!(error = %e, "Vendor application submission failed");
                self.status = IntakeStatus::Error;
                self.error = Some(SUBMIT_FAILED_MESSAGE);
            }
        }
        &self.status
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;

    use super::*;
    use crate::applications::{ApplicationDesk, StatusFilter, SubmitReceipt};
    use crate::error::{ApplicationError, StoreError};
    use crate::store::MemoryBackend;

    /// Fails the first `failures` submissions, then accepts.
    struct FlakyIntake {
        failures: usize,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ApplicationIntake for FlakyIntake {
        async fn submit(
            &self,
            _submission: ApplicationSubmission,
        ) -> Result<SubmitReceipt, ApplicationError> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            if n < self.failures {
                return Err(ApplicationError::Store(StoreError::Unavailable(
                    "network down".to_string(),
                )));
            }
            Ok(SubmitReceipt {
                success: true,
                application_id: "va_fake01".to_string(),
            })
        }
    }

    fn filled() -> IntakeForm {
        let mut form = IntakeForm::new();
        form.draft.company_name = "Dry Fast Inc".to_string();
        form.draft.contact_name = "Sam Rivera".to_string();
        form.draft.contact_email = "sam@dryfast.com".to_string();
        form.accept_terms = true;
        form
    }

    #[test]
    fn submit_disabled_until_required_fields_and_terms() {
        let mut form = IntakeForm::new();
        assert!(!form.can_submit());
        form.draft.company_name = "Dry Fast Inc".to_string();
        form.draft.contact_name = "Sam".to_string();
        form.draft.contact_email = "sam@dryfast.com".to_string();
        assert!(!form.can_submit());
        form.accept_terms = true;
        assert!(form.can_submit());
        form.draft.contact_email.clear();
        assert!(!form.can_submit());
    }

    #[test]
    fn toggle_and_service_areas() {
        let mut form = IntakeForm::new();
        form.toggle_service("Water");
        form.toggle_service("Mold");
        form.toggle_service("Water");
        assert_eq!(form.draft.services_offered, vec!["Mold"]);

        form.set_service_areas(" Denver, ,Boulder ,");
        assert_eq!(form.draft.service_areas, vec!["Denver", "Boulder"]);
    }

    #[test]
    fn vendors_skip_the_form() {
        assert_eq!(IntakeForm::redirect_for(Role::Vendor), Some(RouteKey::VendorDashboard));
        assert_eq!(IntakeForm::redirect_for(Role::Manager), None);
    }

    #[tokio::test]
    async fn disabled_submit_never_calls_backend() {
        let intake = FlakyIntake {
            failures: 0,
            calls: AtomicUsize::new(0),
        };
        let mut form = IntakeForm::new();
        assert_eq!(form.submit(&intake).await, &IntakeStatus::Idle);
        assert_eq!(intake.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn failure_shows_message_and_allows_retry() {
        let intake = FlakyIntake {
            failures: 1,
            calls: AtomicUsize::new(0),
        };
        let mut form = filled();

        assert_eq!(form.submit(&intake).await, &IntakeStatus::Error);
        assert_eq!(form.error(), Some(SUBMIT_FAILED_MESSAGE));
        assert!(form.can_submit());

        let status = form.submit(&intake).await.clone();
        assert_eq!(
            status,
            IntakeStatus::Success {
                application_id: "va_fake01".to_string()
            }
        );
        assert!(form.error().is_none());
        assert!(!form.can_submit());
    }

    #[tokio::test]
    async fn success_lands_in_review_queue() {
        let db = Arc::new(MemoryBackend::new(Duration::ZERO));
        let desk = ApplicationDesk::new(db);
        let mut form = filled();
        form.toggle_service("Fire");

        let id = match form.submit(&desk).await {
            IntakeStatus::Success { application_id } => application_id.clone(),
            other => panic!("unexpected status: {other:?}"),
        };
        let stored = desk.get(&id).await.unwrap();
        assert_eq!(stored.services_offered, vec!["Fire"]);
        assert_eq!(desk.list(StatusFilter::All).await.unwrap().len(), 1);
    }
}
