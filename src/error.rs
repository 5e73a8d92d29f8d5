//! Error types for the Claimsy portal.

use crate::onboarding::{DocumentKind, WizardStep};

/// Top-level error type for the portal.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    #[error("Onboarding error: {0}")]
    Onboarding(#[from] OnboardingError),

    #[error("Wizard error: {0}")]
    Wizard(#[from] WizardError),

    #[error("Vendor application error: {0}")]
    Application(#[from] ApplicationError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Repository errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Errors raised by the onboarding backend stand-in.
#[derive(Debug, Clone, thiserror::Error)]
pub enum OnboardingError {
    #[error("Onboarding checklist incomplete, missing: {}", .missing.join(", "))]
    ChecklistIncomplete { missing: Vec<&'static str> },

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

/// Errors raised by the client-side onboarding wizard.
#[derive(Debug, Clone, thiserror::Error)]
pub enum WizardError {
    #[error("Onboarding state has not been loaded yet")]
    NotLoaded,

    #[error("Finish is disabled until the checklist is complete")]
    ChecklistIncomplete,

    #[error("Saving the {step} step failed: {source}")]
    Save {
        step: WizardStep,
        #[source]
        source: OnboardingError,
    },

    #[error("Uploading {kind} failed: {source}")]
    Upload {
        kind: DocumentKind,
        #[source]
        source: OnboardingError,
    },
}

/// Vendor application desk errors.
#[derive(Debug, thiserror::Error)]
pub enum ApplicationError {
    #[error("Vendor application {id} not found")]
    NotFound { id: String },

    #[error("Vendor application {id} is {status}, cannot move to {target}")]
    InvalidTransition {
        id: String,
        status: String,
        target: String,
    },

    #[error("Invalid vendor application: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

/// Result type alias for the portal.
pub type Result<T> = std::result::Result<T, Error>;
