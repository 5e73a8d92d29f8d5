//! Demo data the in-memory store starts with.

use chrono::{DateTime, TimeZone, Utc};

use crate::applications::{ApplicationStatus, VendorApplication};
use crate::config::DEFAULT_VENDOR_ORG;
use crate::onboarding::{Checklist, NotificationPrefs, VendorOnboardingState, VendorProfile};

fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// Onboarding state for the demo vendor organization: profile prefilled from
/// its application, nothing on the checklist done yet.
pub fn onboarding_state() -> VendorOnboardingState {
    VendorOnboardingState {
        org_id: DEFAULT_VENDOR_ORG.to_string(),
        onboarding_completed: false,
        completed_at: None,
        profile: VendorProfile {
            company_name: "Rapid Restore LLC".to_string(),
            address_line1: "123 Main St".to_string(),
            city: "Denver".to_string(),
            state: "CO".to_string(),
            postal_code: "80202".to_string(),
            phone: Some("555-123-4567".to_string()),
            website: Some("https://rapidrestore.com".to_string()),
            service_areas: vec!["CO".to_string()],
            services_offered: vec!["Water".to_string(), "Fire".to_string()],
        },
        checklist: Checklist::default(),
        notifications: NotificationPrefs::default(),
    }
}

/// Applications waiting in the review queue, newest first.
pub fn vendor_applications() -> Vec<VendorApplication> {
    vec![
        VendorApplication {
            id: "va_001".to_string(),
            company_name: "Rapid Restore LLC".to_string(),
            contact_name: "John Doe".to_string(),
            contact_email: "john@rapidrestore.com".to_string(),
            contact_phone: Some("555-123-4567".to_string()),
            website: Some("https://rapidrestore.com".to_string()),
            address_line1: Some("123 Main St".to_string()),
            city: Some("Denver".to_string()),
            state: Some("CO".to_string()),
            postal_code: Some("80202".to_string()),
            service_areas: vec!["CO".to_string()],
            services_offered: vec!["Water".to_string(), "Fire".to_string()],
            heard_about_us: Some("Referral".to_string()),
            notes: Some("We specialize in multi-family properties.".to_string()),
            status: ApplicationStatus::New,
            reviewer_id: None,
            rejection_reason: None,
            created_at: at(2024, 1, 10, 12),
        },
        VendorApplication {
            id: "va_002".to_string(),
            company_name: "ClearSky Roofing".to_string(),
            contact_name: "Taylor Brooks".to_string(),
            contact_email: "taylor@clearskyroofing.com".to_string(),
            contact_phone: Some("555-987-6543".to_string()),
            website: Some("https://clearskyroofing.com".to_string()),
            address_line1: Some("44 Elm Ave".to_string()),
            city: Some("Boulder".to_string()),
            state: Some("CO".to_string()),
            postal_code: Some("80301".to_string()),
            service_areas: vec!["CO".to_string(), "WY".to_string()],
            services_offered: vec!["Roof".to_string()],
            heard_about_us: Some("Web search".to_string()),
            notes: None,
            status: ApplicationStatus::UnderReview,
            reviewer_id: None,
            rejection_reason: None,
            created_at: at(2024, 1, 5, 10),
        },
    ]
}
