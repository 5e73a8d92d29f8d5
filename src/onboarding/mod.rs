//! Vendor onboarding: the checklist-gated setup a vendor organization walks
//! through before reaching its dashboard.
//!
//! [`OnboardingManager`] plays the backend: it owns the stored state and
//! applies one partial update per call. [`OnboardingWizard`] is the client
//! side: it tracks the current step, issues saves and gates the finish action
//! on the checklist.

pub mod manager;
pub mod model;
pub mod routes;
pub mod state;
pub mod wizard;

pub use manager::{OnboardingBackend, OnboardingManager};
pub use model::{
    Checklist, DocumentKind, NotificationPrefs, NotificationUpdate, ProfileUpdate, ServicesUpdate,
    VendorOnboardingState, VendorProfile,
};
pub use routes::{OnboardingRouteState, onboarding_routes};
pub use state::WizardStep;
pub use wizard::{OnboardingWizard, PrimaryAction, WizardEntry, WizardView};
