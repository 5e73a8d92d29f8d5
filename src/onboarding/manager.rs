//! OnboardingManager: the backend side of vendor onboarding.
//!
//! Each operation loads the organization's state, applies one partial update,
//! stores the result and returns the full state. Callers replace their local
//! copy with what comes back and never merge on their own.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use tracing::{info, warn};

use super::model::{
    DocumentKind, NotificationUpdate, ProfileUpdate, ServicesUpdate, VendorOnboardingState,
};
use crate::error::OnboardingError;
use crate::store::Database;

/// Operations the onboarding wizard calls out to.
#[async_trait]
pub trait OnboardingBackend: Send + Sync {
    /// Current state for the active vendor session, created with defaults on first access.
    async fn fetch_state(&self) -> Result<VendorOnboardingState, OnboardingError>;

    /// Merge profile fields; marks `profileCompleted`.
    async fn update_profile(
        &self,
        update: ProfileUpdate,
    ) -> Result<VendorOnboardingState, OnboardingError>;

    /// Replace whichever service lists are present; marks `serviceAreasConfigured`.
    async fn update_services(
        &self,
        update: ServicesUpdate,
    ) -> Result<VendorOnboardingState, OnboardingError>;

    /// Record an uploaded document. Repeating an upload is harmless.
    async fn upload_document(
        &self,
        kind: DocumentKind,
    ) -> Result<VendorOnboardingState, OnboardingError>;

    /// Merge notification flags; marks `notificationPreferencesSet`.
    async fn update_notifications(
        &self,
        update: NotificationUpdate,
    ) -> Result<VendorOnboardingState, OnboardingError>;

    /// Mark onboarding complete. Rejected while the checklist is incomplete.
    async fn complete(&self) -> Result<VendorOnboardingState, OnboardingError>;
}

/// Storage-backed onboarding for one vendor organization.
pub struct OnboardingManager {
    db: Arc<dyn Database>,
    org_id: String,
    /// Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl OnboardingManager {
    pub fn new(db: Arc<dyn Database>, org_id: impl Into<String>) -> Self {
        Self {
            db,
            org_id: org_id.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn org_id(&self) -> &str {
        &self.org_id
    }

    async fn load_or_create(&self) -> Result<VendorOnboardingState, OnboardingError> {
        if let Some(state) = self.db.get_onboarding_state(&self.org_id).await? {
            return Ok(state);
        }
        info!(org_id = %self.org_id, "Creating onboarding state with defaults");
        let state = VendorOnboardingState::new(self.org_id.clone());
        self.db.put_onboarding_state(&state).await?;
        Ok(state)
    }

    async fn mutate<F>(&self, action: &str, apply: F) -> Result<VendorOnboardingState, OnboardingError>
    where
        F: FnOnce(&mut VendorOnboardingState) -> Result<(), OnboardingError> + Send,
    {
        let _guard = self.write_lock.lock().await;
        let mut state = self.load_or_create().await?;
        apply(&mut state)?;
        self.db.put_onboarding_state(&state).await.map_err(|e| {
            warn!(org_id = %self.org_id, action, error = %e, "Failed to store onboarding state");
            OnboardingError::from(e)
        })?;
        info!(org_id = %self.org_id, action, "Onboarding state updated");
        Ok(state)
    }
}

#[async_trait]
impl OnboardingBackend for OnboardingManager {
    async fn fetch_state(&self) -> Result<VendorOnboardingState, OnboardingError> {
        self.load_or_create().await
    }

    async fn update_profile(
        &self,
        update: ProfileUpdate,
    ) -> Result<VendorOnboardingState, OnboardingError> {
        self.mutate("update_profile", |state| {
            state.apply_profile(update);
            Ok(())
        })
        .await
    }

    async fn update_services(
        &self,
        update: ServicesUpdate,
    ) -> Result<VendorOnboardingState, OnboardingError> {
        self.mutate("update_services", |state| {
            state.apply_services(update);
            Ok(())
        })
        .await
    }

    async fn upload_document(
        &self,
        kind: DocumentKind,
    ) -> Result<VendorOnboardingState, OnboardingError> {
        self.mutate("upload_document", |state| {
            state.checklist.record_upload(kind);
            Ok(())
        })
        .await
    }

    async fn update_notifications(
        &self,
        update: NotificationUpdate,
    ) -> Result<VendorOnboardingState, OnboardingError> {
        self.mutate("update_notifications", |state| {
            state.apply_notifications(update);
            Ok(())
        })
        .await
    }

    async fn complete(&self) -> Result<VendorOnboardingState, OnboardingError> {
        let org_id = self.org_id.clone();
        self.mutate("complete", move |state| {
            if state.onboarding_completed {
                return Ok(());
            }
            let missing = state.checklist.missing_for_completion();
            if !missing.is_empty() {
                warn!(org_id = %org_id, ?missing, "Rejected onboarding completion");
                return Err(OnboardingError::ChecklistIncomplete { missing });
            }
            state.onboarding_completed = true;
            state.completed_at = Some(Utc::now());
            Ok(())
        })
        .await
    }
}
