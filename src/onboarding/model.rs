//! Vendor onboarding data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Company identity and service metadata collected during onboarding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorProfile {
    pub company_name: String,
    pub address_line1: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default)]
    pub service_areas: Vec<String>,
    #[serde(default)]
    pub services_offered: Vec<String>,
}

/// Completion gates tracked per organization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checklist {
    pub w9_uploaded: bool,
    pub coi_uploaded: bool,
    pub license_uploaded: bool,
    pub profile_completed: bool,
    pub service_areas_configured: bool,
    pub notification_preferences_set: bool,
}

impl Checklist {
    /// Whether the finish action is enabled.
    ///
    /// Notification preferences are tracked but do not gate completion.
    pub fn ready_to_complete(&self) -> bool {
        self.missing_for_completion().is_empty()
    }

    /// Names of the gates still blocking completion.
    pub fn missing_for_completion(&self) -> Vec<&'static str> {
        [
            (self.w9_uploaded, "w9Uploaded"),
            (self.coi_uploaded, "coiUploaded"),
            (self.license_uploaded, "licenseUploaded"),
            (self.profile_completed, "profileCompleted"),
            (self.service_areas_configured, "serviceAreasConfigured"),
        ]
        .into_iter()
        .filter(|(done, _)| !done)
        .map(|(_, name)| name)
        .collect()
    }

    /// Whether all three compliance documents are on file.
    pub fn documents_complete(&self) -> bool {
        self.w9_uploaded && self.coi_uploaded && self.license_uploaded
    }

    /// Mark a document as uploaded. Never clears a flag.
    pub fn record_upload(&mut self, kind: DocumentKind) {
        match kind {
            DocumentKind::W9 => self.w9_uploaded = true,
            DocumentKind::Coi => self.coi_uploaded = true,
            DocumentKind::License => self.license_uploaded = true,
        }
    }

    pub fn is_uploaded(&self, kind: DocumentKind) -> bool {
        match kind {
            DocumentKind::W9 => self.w9_uploaded,
            DocumentKind::Coi => self.coi_uploaded,
            DocumentKind::License => self.license_uploaded,
        }
    }
}

/// Which notifications the vendor wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPrefs {
    pub job_emails: bool,
    pub reminders: bool,
    pub compliance: bool,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            job_emails: true,
            reminders: true,
            compliance: true,
        }
    }
}

/// The compliance documents a vendor must upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DocumentKind {
    W9,
    Coi,
    License,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 3] = [DocumentKind::W9, DocumentKind::Coi, DocumentKind::License];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::W9 => "W9",
            Self::Coi => "COI",
            Self::License => "LICENSE",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DocumentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "W9" => Ok(Self::W9),
            "COI" => Ok(Self::Coi),
            "LICENSE" => Ok(Self::License),
            other => Err(format!("unknown document kind: {other}")),
        }
    }
}

/// One vendor organization's onboarding progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorOnboardingState {
    pub org_id: String,
    pub onboarding_completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    pub profile: VendorProfile,
    pub checklist: Checklist,
    pub notifications: NotificationPrefs,
}

impl VendorOnboardingState {
    /// Fresh state for an organization reaching the wizard for the first time.
    pub fn new(org_id: impl Into<String>) -> Self {
        Self {
            org_id: org_id.into(),
            onboarding_completed: false,
            completed_at: None,
            profile: VendorProfile::default(),
            checklist: Checklist::default(),
            notifications: NotificationPrefs::default(),
        }
    }

    /// Merge a partial profile update and mark the profile gate.
    pub fn apply_profile(&mut self, update: ProfileUpdate) {
        let p = &mut self.profile;
        if let Some(v) = update.company_name {
            p.company_name = v;
        }
        if let Some(v) = update.address_line1 {
            p.address_line1 = v;
        }
        if let Some(v) = update.city {
            p.city = v;
        }
        if let Some(v) = update.state {
            p.state = v;
        }
        if let Some(v) = update.postal_code {
            p.postal_code = v;
        }
        if let Some(v) = update.phone {
            p.phone = Some(v);
        }
        if let Some(v) = update.website {
            p.website = Some(v);
        }
        self.checklist.profile_completed = true;
    }

    /// Replace whichever of service areas and services offered the update
    /// carries, and mark that gate.
    pub fn apply_services(&mut self, update: ServicesUpdate) {
        if let Some(v) = update.service_areas {
            self.profile.service_areas = v;
        }
        if let Some(v) = update.services_offered {
            self.profile.services_offered = v;
        }
        self.checklist.service_areas_configured = true;
    }

    /// Merge partial notification flags and mark that gate.
    pub fn apply_notifications(&mut self, update: NotificationUpdate) {
        let n = &mut self.notifications;
        if let Some(v) = update.job_emails {
            n.job_emails = v;
        }
        if let Some(v) = update.reminders {
            n.reminders = v;
        }
        if let Some(v) = update.compliance {
            n.compliance = v;
        }
        self.checklist.notification_preferences_set = true;
    }
}

/// Partial update of the company profile. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// Partial update of service coverage. An absent list is left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicesUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_areas: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services_offered: Option<Vec<String>>,
}

/// Partial update of notification flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_emails: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminders: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compliance: Option<bool>,
}
