//! Unified `Database` trait: one async interface for all persistence.
//!
//! Every component receives an `Arc<dyn Database>`; tests inject their own
//! implementation instead of sharing process-wide state.

use async_trait::async_trait;

use crate::applications::VendorApplication;
use crate::error::StoreError;
use crate::onboarding::VendorOnboardingState;
use crate::session::{OnboardingAnswers, ProfileInfo};

/// Backend-agnostic storage for profiles, onboarding state and applications.
#[async_trait]
pub trait Database: Send + Sync {
    // ── Session profile ─────────────────────────────────────────────

    /// Load the persisted profile, if one was saved.
    async fn load_profile(&self) -> Result<Option<ProfileInfo>, StoreError>;

    /// Persist the profile, replacing any previous one.
    async fn save_profile(&self, profile: &ProfileInfo) -> Result<(), StoreError>;

    /// Remove the persisted profile.
    async fn clear_profile(&self) -> Result<(), StoreError>;

    /// Load the saved onboarding questionnaire answers, if any.
    async fn load_onboarding_data(&self) -> Result<Option<OnboardingAnswers>, StoreError>;

    /// Persist questionnaire answers, replacing any previous ones.
    async fn save_onboarding_data(&self, data: &OnboardingAnswers) -> Result<(), StoreError>;

    /// Remove the saved questionnaire answers.
    async fn clear_onboarding_data(&self) -> Result<(), StoreError>;

    // ── Vendor onboarding ───────────────────────────────────────────

    /// Get the onboarding state for an organization.
    async fn get_onboarding_state(
        &self,
        org_id: &str,
    ) -> Result<Option<VendorOnboardingState>, StoreError>;

    /// Store the full onboarding state, replacing the previous one.
    async fn put_onboarding_state(&self, state: &VendorOnboardingState) -> Result<(), StoreError>;

    // ── Vendor applications ─────────────────────────────────────────

    /// Insert a new application.
    async fn insert_application(&self, application: &VendorApplication) -> Result<(), StoreError>;

    /// All applications, newest first.
    async fn list_applications(&self) -> Result<Vec<VendorApplication>, StoreError>;

    /// Get an application by id.
    async fn get_application(&self, id: &str) -> Result<Option<VendorApplication>, StoreError>;

    /// Replace an existing application. Fails with `NotFound` for unknown ids.
    async fn update_application(&self, application: &VendorApplication) -> Result<(), StoreError>;
}
