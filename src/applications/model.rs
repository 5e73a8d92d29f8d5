//! Vendor application data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Review status of an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    New,
    UnderReview,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "NEW",
            Self::UnderReview => "UNDER_REVIEW",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        }
    }

    /// Whether a reviewer can still approve or reject.
    pub fn is_open(&self) -> bool {
        matches!(self, Self::New | Self::UnderReview)
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// List filter: a single status, or everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ApplicationStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: ApplicationStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == status,
        }
    }
}

impl std::str::FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "" | "ALL" => Ok(Self::All),
            "NEW" => Ok(Self::Only(ApplicationStatus::New)),
            "UNDER_REVIEW" => Ok(Self::Only(ApplicationStatus::UnderReview)),
            "APPROVED" => Ok(Self::Only(ApplicationStatus::Approved)),
            "REJECTED" => Ok(Self::Only(ApplicationStatus::Rejected)),
            other => Err(format!("unknown application status: {other}")),
        }
    }
}

/// A restoration vendor's request to join the network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorApplication {
    pub id: String,
    pub company_name: String,
    pub contact_name: String,
    pub contact_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub service_areas: Vec<String>,
    #[serde(default)]
    pub services_offered: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heard_about_us: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub status: ApplicationStatus,
    #[serde(default)]
    pub reviewer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Fields submitted through the public intake form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSubmission {
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub contact_name: String,
    #[serde(default)]
    pub contact_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub service_areas: Vec<String>,
    #[serde(default)]
    pub services_offered: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heard_about_us: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ApplicationSubmission {
    /// Names of required fields that are blank.
    pub fn missing_required(&self) -> Vec<&'static str> {
        [
            (&self.company_name, "companyName"),
            (&self.contact_name, "contactName"),
            (&self.contact_email, "contactEmail"),
        ]
        .into_iter()
        .filter(|(value, _)| value.trim().is_empty())
        .map(|(_, name)| name)
        .collect()
    }
}

/// Acknowledgement returned to the applicant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReceipt {
    pub success: bool,
    pub application_id: String,
}

/// Reviewer input for approving an application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApproveRequest {
    #[serde(default)]
    pub primary_email: String,
    #[serde(default)]
    pub primary_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewer_id: Option<String>,
}

/// Reviewer input for rejecting an application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectRequest {
    #[serde(default)]
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewer_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_filter_parses() {
        assert_eq!("ALL".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert_eq!("".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert_eq!(
            "under_review".parse::<StatusFilter>().unwrap(),
            StatusFilter::Only(ApplicationStatus::UnderReview)
        );
        assert!("PENDING".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn status_serializes_screaming_snake() {
        for status in [
            ApplicationStatus::New,
            ApplicationStatus::UnderReview,
            ApplicationStatus::Approved,
            ApplicationStatus::Rejected,
        ] {
            assert_eq!(serde_json::to_string(&status).unwrap(), format!("\"{status}\""));
        }
    }

    #[test]
    fn missing_required_reports_blank_fields() {
        let submission = ApplicationSubmission {
            company_name: "Dry Fast".to_string(),
            contact_name: "   ".to_string(),
            ..Default::default()
        };
        assert_eq!(submission.missing_required(), vec!["contactName", "contactEmail"]);
    }
}
