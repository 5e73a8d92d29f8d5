//! SessionStore: owns the signed-in profile and the session-active flag.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{info, warn};

use super::model::{OnboardingAnswers, ProfileInfo};
use crate::error::StoreError;
use crate::navigation::{self, Role, RouteKey};
use crate::store::Database;

/// Point-in-time view of the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub profile: ProfileInfo,
    pub onboarding: OnboardingAnswers,
    pub session_active: bool,
    pub role: Role,
    pub home: &'static str,
}

struct Session {
    profile: ProfileInfo,
    onboarding: OnboardingAnswers,
    active: bool,
    /// Bumped on every sign-in and sign-out.
    generation: u64,
}

pub struct SessionStore {
    db: Arc<dyn Database>,
    session: RwLock<Session>,
}

impl SessionStore {
    /// Restore the persisted profile and questionnaire answers. The session
    /// itself starts inactive.
    pub async fn load(db: Arc<dyn Database>) -> Result<Self, StoreError> {
        let profile = db.load_profile().await?.unwrap_or_default();
        let onboarding = db.load_onboarding_data().await?.unwrap_or_default();
        Ok(Self {
            db,
            session: RwLock::new(Session {
                profile,
                onboarding,
                active: false,
                generation: 0,
            }),
        })
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        let session = self.session.read().await;
        let role = session.profile.role();
        SessionSnapshot {
            profile: session.profile.clone(),
            onboarding: session.onboarding.clone(),
            session_active: session.active,
            role,
            home: navigation::home(role).path(),
        }
    }

    pub async fn role(&self) -> Role {
        self.session.read().await.profile.role()
    }

    pub async fn is_active(&self) -> bool {
        self.session.read().await.active
    }

    /// Identifies the current sign-in. Anything tied to one sign-in compares
    /// against this to notice that the user changed.
    pub async fn generation(&self) -> u64 {
        self.session.read().await.generation
    }

    /// Persist `profile`, activate the session and return the role's home route.
    pub async fn set_profile(&self, profile: ProfileInfo) -> Result<RouteKey, StoreError> {
        self.db.save_profile(&profile).await?;
        let role = profile.role();
        info!(email = %profile.email, role = %role, "Session started");
        let mut session = self.session.write().await;
        session.profile = profile;
        session.active = true;
        session.generation += 1;
        Ok(navigation::home(role))
    }

    /// Persist questionnaire answers and return where to go next.
    pub async fn set_onboarding(&self, data: OnboardingAnswers) -> Result<RouteKey, StoreError> {
        self.db.save_onboarding_data(&data).await?;
        info!(fields = data.len(), "Onboarding answers saved");
        self.session.write().await.onboarding = data;
        Ok(RouteKey::Settings)
    }

    /// Clear the session, the persisted profile and the questionnaire answers.
    ///
    /// The in-memory session is always cleared, even if the storage calls fail.
    pub async fn logout(&self) -> Result<(), StoreError> {
        {
            let mut session = self.session.write().await;
            session.profile = ProfileInfo::default();
            session.onboarding = OnboardingAnswers::new();
            session.active = false;
            session.generation += 1;
        }
        info!("Session ended");
        let profile = self.db.clear_profile().await;
        let answers = self.db.clear_onboarding_data().await;
        profile.and(answers).map_err(|e| {
            warn!(error = %e, "Failed to clear persisted session data");
            e
        })
    }
}
