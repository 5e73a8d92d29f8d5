//! In-memory `Database` backend with simulated network latency.
//!
//! Stands in for the real backend: all data lives behind a `RwLock` and every
//! call sleeps for the configured latency first. The session profile and the
//! questionnaire answers are kept as serialized JSON blobs, the way a browser
//! keeps them in local storage.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use super::fixtures;
use super::traits::Database;
use crate::applications::VendorApplication;
use crate::error::StoreError;
use crate::onboarding::VendorOnboardingState;
use crate::session::{OnboardingAnswers, ProfileInfo};

#[derive(Default)]
struct Inner {
    profile_json: Option<String>,
    answers_json: Option<String>,
    onboarding: HashMap<String, VendorOnboardingState>,
    /// Newest first.
    applications: Vec<VendorApplication>,
}

/// Volatile storage backend.
pub struct MemoryBackend {
    inner: RwLock<Inner>,
    latency: Duration,
}

impl MemoryBackend {
    /// Empty store.
    pub fn new(latency: Duration) -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
            latency,
        }
    }

    /// Store pre-populated with the demo vendor organization and applications.
    pub fn with_fixtures(latency: Duration) -> Self {
        let onboarding = fixtures::onboarding_state();
        let inner = Inner {
            profile_json: None,
            answers_json: None,
            onboarding: HashMap::from([(onboarding.org_id.clone(), onboarding)]),
            applications: fixtures::vendor_applications(),
        };
        Self {
            inner: RwLock::new(inner),
            latency,
        }
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

fn decode<T: serde::de::DeserializeOwned>(blob: Option<&str>) -> Result<Option<T>, StoreError> {
    blob.map(|json| serde_json::from_str(json).map_err(|e| StoreError::Serialization(e.to_string())))
        .transpose()
}

fn encode<T: serde::Serialize>(value: &T) -> Result<String, StoreError> {
    serde_json::to_string(value).map_err(|e| StoreError::Serialization(e.to_string()))
}

#[async_trait]
impl Database for MemoryBackend {
    async fn load_profile(&self) -> Result<Option<ProfileInfo>, StoreError> {
        self.simulate_latency().await;
        decode(self.inner.read().await.profile_json.as_deref())
    }

    async fn save_profile(&self, profile: &ProfileInfo) -> Result<(), StoreError> {
        self.simulate_latency().await;
        let json = encode(profile)?;
        self.inner.write().await.profile_json = Some(json);
        Ok(())
    }

    async fn clear_profile(&self) -> Result<(), StoreError> {
        self.simulate_latency().await;
        self.inner.write().await.profile_json = None;
        Ok(())
    }

    async fn load_onboarding_data(&self) -> Result<Option<OnboardingAnswers>, StoreError> {
        self.simulate_latency().await;
        decode(self.inner.read().await.answers_json.as_deref())
    }

    async fn save_onboarding_data(&self, data: &OnboardingAnswers) -> Result<(), StoreError> {
        self.simulate_latency().await;
        let json = encode(data)?;
        self.inner.write().await.answers_json = Some(json);
        Ok(())
    }

    async fn clear_onboarding_data(&self) -> Result<(), StoreError> {
        self.simulate_latency().await;
        self.inner.write().await.answers_json = None;
        Ok(())
    }

    async fn get_onboarding_state(
        &self,
        org_id: &str,
    ) -> Result<Option<VendorOnboardingState>, StoreError> {
        self.simulate_latency().await;
        Ok(self.inner.read().await.onboarding.get(org_id).cloned())
    }

    async fn put_onboarding_state(&self, state: &VendorOnboardingState) -> Result<(), StoreError> {
        self.simulate_latency().await;
        debug!(org_id = %state.org_id, "Storing onboarding state");
        self.inner
            .write()
            .await
            .onboarding
            .insert(state.org_id.clone(), state.clone());
        Ok(())
    }

    async fn insert_application(&self, application: &VendorApplication) -> Result<(), StoreError> {
        self.simulate_latency().await;
        self.inner
            .write()
            .await
            .applications
            .insert(0, application.clone());
        Ok(())
    }

    async fn list_applications(&self) -> Result<Vec<VendorApplication>, StoreError> {
        self.simulate_latency().await;
        Ok(self.inner.read().await.applications.clone())
    }

    async fn get_application(&self, id: &str) -> Result<Option<VendorApplication>, StoreError> {
        self.simulate_latency().await;
        Ok(self
            .inner
            .read()
            .await
            .applications
            .iter()
            .find(|a| a.id == id)
            .cloned())
    }

    async fn update_application(&self, application: &VendorApplication) -> Result<(), StoreError> {
        self.simulate_latency().await;
        let mut inner = self.inner.write().await;
        let slot = inner
            .applications
            .iter_mut()
            .find(|a| a.id == application.id)
            .ok_or_else(|| StoreError::NotFound {
                entity: "vendor_application".to_string(),
                id: application.id.clone(),
            })?;
        *slot = application.clone();
        Ok(())
    }
}
