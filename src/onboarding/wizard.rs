//! OnboardingWizard: client-side controller for the vendor onboarding steps.
//!
//! Holds the current step and the last state returned by the backend. Step
//! movement is free (next, back, or any step directly); only the finish
//! action is gated, on the checklist. Every save replaces the local state
//! with the backend's response. A failed save leaves the local state as it
//! was and records the error so the step can show it and be retried.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use super::manager::OnboardingBackend;
use super::model::{
    DocumentKind, NotificationUpdate, ProfileUpdate, ServicesUpdate, VendorOnboardingState,
};
use super::state::WizardStep;
use crate::error::{OnboardingError, WizardError};
use crate::navigation::{Role, RouteKey};

/// Result of opening the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardEntry {
    /// State loaded; the wizard can be shown.
    Ready,
    /// The wizard does not apply; go elsewhere.
    Redirect(RouteKey),
}

/// What the primary button at the bottom of the wizard does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PrimaryAction {
    Next,
    Finish { enabled: bool },
}

/// Serializable snapshot for rendering.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardView {
    pub step: WizardStep,
    pub steps: [WizardStep; 5],
    pub can_go_back: bool,
    pub primary_action: PrimaryAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<VendorOnboardingState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_error: Option<String>,
}

pub struct OnboardingWizard {
    backend: Arc<dyn OnboardingBackend>,
    role: Role,
    step: WizardStep,
    state: Option<VendorOnboardingState>,
    last_error: Option<String>,
}

impl OnboardingWizard {
    pub fn new(backend: Arc<dyn OnboardingBackend>, role: Role) -> Self {
        Self {
            backend,
            role,
            step: WizardStep::default(),
            state: None,
            last_error: None,
        }
    }

    /// Load the state. Non-vendors are sent to `/`, finished vendors to their dashboard.
    pub async fn open(&mut self) -> Result<WizardEntry, WizardError> {
        if self.role != Role::Vendor {
            return Ok(WizardEntry::Redirect(RouteKey::Dashboard));
        }
        let state = match self.backend.fetch_state().await {
            Ok(state) => state,
            Err(source) => {
                self.last_error = Some(source.to_string());
                return Err(WizardError::Save {
                    step: self.step,
                    source,
                });
            }
        };
        if state.onboarding_completed {
            return Ok(WizardEntry::Redirect(RouteKey::VendorDashboard));
        }
        self.state = Some(state);
        self.last_error = None;
        Ok(WizardEntry::Ready)
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn state(&self) -> Option<&VendorOnboardingState> {
        self.state.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Move one step forward; stays on the last step. No completeness check.
    pub fn next(&mut self) -> WizardStep {
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        self.step
    }

    /// Move one step back; stays on the first step.
    pub fn back(&mut self) -> WizardStep {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
        self.step
    }

    /// Jump to any step.
    pub fn go_to(&mut self, step: WizardStep) {
        self.step = step;
    }

    /// Whether the finish action is enabled.
    pub fn can_finish(&self) -> bool {
        self.state
            .as_ref()
            .is_some_and(|s| !s.onboarding_completed && s.checklist.ready_to_complete())
    }

    pub fn primary_action(&self) -> PrimaryAction {
        if self.step.is_last() {
            PrimaryAction::Finish {
                enabled: self.can_finish(),
            }
        } else {
            PrimaryAction::Next
        }
    }

    pub fn view(&self) -> WizardView {
        WizardView {
            step: self.step,
            steps: WizardStep::ALL,
            can_go_back: !self.step.is_first(),
            primary_action: self.primary_action(),
            state: self.state.clone(),
            last_error: self.last_error.clone(),
        }
    }

    pub async fn save_profile(
        &mut self,
        update: ProfileUpdate,
    ) -> Result<&VendorOnboardingState, WizardError> {
        self.ensure_loaded()?;
        let result = self.backend.update_profile(update).await;
        self.accept(result, |source| WizardError::Save {
            step: WizardStep::Profile,
            source,
        })
    }

    pub async fn save_services(
        &mut self,
        update: ServicesUpdate,
    ) -> Result<&VendorOnboardingState, WizardError> {
        self.ensure_loaded()?;
        let result = self.backend.update_services(update).await;
        self.accept(result, |source| WizardError::Save {
            step: WizardStep::Services,
            source,
        })
    }

    pub async fn upload(&mut self, kind: DocumentKind) -> Result<&VendorOnboardingState, WizardError> {
        self.ensure_loaded()?;
        let result = self.backend.upload_document(kind).await;
        self.accept(result, |source| WizardError::Upload { kind, source })
    }

    pub async fn save_notifications(
        &mut self,
        update: NotificationUpdate,
    ) -> Result<&VendorOnboardingState, WizardError> {
        self.ensure_loaded()?;
        let result = self.backend.update_notifications(update).await;
        self.accept(result, |source| WizardError::Save {
            step: WizardStep::Notifications,
            source,
        })
    }

    /// Complete onboarding and return where to navigate next.
    ///
    /// The completion call is not issued while the checklist is incomplete.
    pub async fn finish(&mut self) -> Result<RouteKey, WizardError> {
        self.ensure_loaded()?;
        if !self.can_finish() {
            return Err(WizardError::ChecklistIncomplete);
        }
        let result = self.backend.complete().await;
        self.accept(result, |source| WizardError::Save {
            step: WizardStep::Review,
            source,
        })?;
        info!("Vendor onboarding finished");
        Ok(RouteKey::VendorDashboard)
    }

    fn ensure_loaded(&self) -> Result<(), WizardError> {
        if self.state.is_none() {
            return Err(WizardError::NotLoaded);
        }
        Ok(())
    }

    fn accept<F>(
        &mut self,
        result: Result<VendorOnboardingState, OnboardingError>,
        wrap: F,
    ) -> Result<&VendorOnboardingState, WizardError>
    where
        F: FnOnce(OnboardingError) -> WizardError,
    {
        match result {
            Ok(state) => {
                self.last_error = None;
                let state = self.state.insert(state);
                Ok(&*state)
            }
            Err(source) => {
                let err = wrap(source);
                warn!(step = %self.step, error = %err, "Onboarding save failed");
                self.last_error = Some(err.to_string());
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;

    use super::*;
    use crate::error::StoreError;
    use crate::onboarding::OnboardingManager;
    use crate::store::MemoryBackend;

    fn vendor_wizard() -> OnboardingWizard {
        let backend = OnboardingManager::new(Arc::new(MemoryBackend::new(Duration::ZERO)), "org_w");
        OnboardingWizard::new(Arc::new(backend), Role::Vendor)
    }

    /// Delegates to a real manager, optionally failing every write.
    struct FlakyBackend {
        inner: OnboardingManager,
        failing: AtomicBool,
        complete_calls: AtomicUsize,
    }

    impl FlakyBackend {
        fn new() -> Self {
            Self {
                inner: OnboardingManager::new(Arc::new(MemoryBackend::new(Duration::ZERO)), "org_f"),
                failing: AtomicBool::new(false),
                complete_calls: AtomicUsize::new(0),
            }
        }

        fn check(&self) -> Result<(), OnboardingError> {
            if self.failing.load(Ordering::SeqCst) {
                return Err(StoreError::Unavailable("simulated outage".to_string()).into());
            }
            Ok(())
        }
    }

    #[async_trait]
    impl OnboardingBackend for FlakyBackend {
        async fn fetch_state(&self) -> Result<VendorOnboardingState, OnboardingError> {
            self.inner.fetch_state().await
        }
        async fn update_profile(
            &self,
            update: ProfileUpdate,
        ) -> Result<VendorOnboardingState, OnboardingError> {
            self.check()?;
            self.inner.update_profile(update).await
        }
        async fn update_services(
            &self,
            update: ServicesUpdate,
        ) -> Result<VendorOnboardingState, OnboardingError> {
            self.check()?;
            self.inner.update_services(update).await
        }
        async fn upload_document(
            &self,
            kind: DocumentKind,
        ) -> Result<VendorOnboardingState, OnboardingError> {
            self.check()?;
            self.inner.upload_document(kind).await
        }
        async fn update_notifications(
            &self,
            update: NotificationUpdate,
        ) -> Result<VendorOnboardingState, OnboardingError> {
            self.check()?;
            self.inner.update_notifications(update).await
        }
        async fn complete(&self) -> Result<VendorOnboardingState, OnboardingError> {
            self.complete_calls.fetch_add(1, Ordering::SeqCst);
            self.check()?;
            self.inner.complete().await
        }
    }

    #[tokio::test]
    async fn non_vendor_is_redirected_home() {
        let backend = OnboardingManager::new(Arc::new(MemoryBackend::new(Duration::ZERO)), "org_x");
        let mut wizard = OnboardingWizard::new(Arc::new(backend), Role::Adjuster);
        assert_eq!(wizard.open().await.unwrap(), WizardEntry::Redirect(RouteKey::Dashboard));
        assert!(wizard.state().is_none());
    }

    #[tokio::test]
    async fn saves_require_loaded_state() {
        let mut wizard = vendor_wizard();
        let err = wizard.upload(DocumentKind::W9).await.unwrap_err();
        assert!(matches!(err, WizardError::NotLoaded));
    }

    #[tokio::test]
    async fn navigation_is_free_and_clamped() {
        let mut wizard = vendor_wizard();
        wizard.open().await.unwrap();
        assert_eq!(wizard.back(), WizardStep::Profile);
        assert_eq!(wizard.next(), WizardStep::Services);
        assert_eq!(wizard.next(), WizardStep::Documents);
        wizard.go_to(WizardStep::Review);
        assert_eq!(wizard.next(), WizardStep::Review);
        assert_eq!(wizard.primary_action(), PrimaryAction::Finish { enabled: false });
        wizard.go_to(WizardStep::Profile);
        assert_eq!(wizard.primary_action(), PrimaryAction::Next);
        assert!(!wizard.view().can_go_back);
    }

    #[tokio::test]
    async fn fresh_state_cannot_finish_and_issues_no_call() {
        let backend = Arc::new(FlakyBackend::new());
        let mut wizard = OnboardingWizard::new(backend.clone(), Role::Vendor);
        wizard.open().await.unwrap();
        wizard.go_to(WizardStep::Review);

        assert!(!wizard.can_finish());
        let err = wizard.finish().await.unwrap_err();
        assert!(matches!(err, WizardError::ChecklistIncomplete));
        assert_eq!(backend.complete_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn repeated_w9_upload_stays_true() {
        let mut wizard = vendor_wizard();
        wizard.open().await.unwrap();
        for _ in 0..3 {
            let state = wizard.upload(DocumentKind::W9).await.unwrap();
            assert!(state.checklist.w9_uploaded);
            assert!(!state.checklist.coi_uploaded);
        }
    }

    #[tokio::test]
    async fn full_walkthrough_finishes() {
        let mut wizard = vendor_wizard();
        assert_eq!(wizard.open().await.unwrap(), WizardEntry::Ready);

        wizard
            .save_profile(ProfileUpdate {
                company_name: Some("Dry Fast".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        wizard.next();
        wizard
            .save_services(ServicesUpdate {
                service_areas: Some(vec!["CO".to_string()]),
                services_offered: Some(vec!["Water".to_string()]),
            })
            .await
            .unwrap();
        wizard.next();
        wizard.upload(DocumentKind::W9).await.unwrap();
        wizard.upload(DocumentKind::Coi).await.unwrap();
        assert!(!wizard.can_finish());
        wizard.upload(DocumentKind::License).await.unwrap();
        wizard.next();
        wizard.next();

        assert_eq!(wizard.step(), WizardStep::Review);
        assert_eq!(wizard.primary_action(), PrimaryAction::Finish { enabled: true });
        assert_eq!(wizard.finish().await.unwrap(), RouteKey::VendorDashboard);
        assert!(wizard.state().unwrap().onboarding_completed);
        assert!(!wizard.can_finish());
    }

    #[tokio::test]
    async fn completed_onboarding_redirects_on_open() {
        let backend: Arc<dyn OnboardingBackend> = Arc::new(OnboardingManager::new(
            Arc::new(MemoryBackend::new(Duration::ZERO)),
            "org_done",
        ));
        backend.update_profile(ProfileUpdate::default()).await.unwrap();
        backend.update_services(ServicesUpdate::default()).await.unwrap();
        for kind in DocumentKind::ALL {
            backend.upload_document(kind).await.unwrap();
        }
        backend.complete().await.unwrap();

        let mut wizard = OnboardingWizard::new(backend, Role::Vendor);
        assert_eq!(
            wizard.open().await.unwrap(),
            WizardEntry::Redirect(RouteKey::VendorDashboard)
        );
    }

    #[tokio::test]
    async fn failed_save_keeps_previous_state_and_can_retry() {
        let backend = Arc::new(FlakyBackend::new());
        let mut wizard = OnboardingWizard::new(backend.clone(), Role::Vendor);
        wizard.open().await.unwrap();
        let before = wizard.state().cloned();

        backend.failing.store(true, Ordering::SeqCst);
        let err = wizard.upload(DocumentKind::Coi).await.unwrap_err();
        assert!(matches!(err, WizardError::Upload { kind: DocumentKind::Coi, .. }));
        assert_eq!(wizard.state().cloned(), before);
        assert!(wizard.last_error().unwrap().contains("simulated outage"));
        assert!(wizard.view().last_error.is_some());

        backend.failing.store(false, Ordering::SeqCst);
        let state = wizard.upload(DocumentKind::Coi).await.unwrap();
        assert!(state.checklist.coi_uploaded);
        assert!(wizard.last_error().is_none());
    }
}
