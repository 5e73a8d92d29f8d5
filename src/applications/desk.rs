//! ApplicationDesk: intake and review of vendor applications.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;
use tokio::sync::Mutex;
use tracing::{info, warn};

use super::model::{
    ApplicationStatus, ApplicationSubmission, ApproveRequest, RejectRequest, StatusFilter,
    SubmitReceipt, VendorApplication,
};
use crate::error::ApplicationError;
use crate::store::Database;

/// Reviewer recorded when the request does not name one.
pub const DEFAULT_REVIEWER: &str = "admin";

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Receives public application submissions.
#[async_trait]
pub trait ApplicationIntake: Send + Sync {
    async fn submit(&self, submission: ApplicationSubmission)
    -> Result<SubmitReceipt, ApplicationError>;
}

pub struct ApplicationDesk {
    db: Arc<dyn Database>,
    /// Serializes review decisions so only one can close an application.
    review_lock: Mutex<()>,
}

impl ApplicationDesk {
    pub fn new(db: Arc<dyn Database>) -> Self {
        Self {
            db,
            review_lock: Mutex::new(()),
        }
    }

    /// Applications matching `filter`, newest first.
    pub async fn list(&self, filter: StatusFilter) -> Result<Vec<VendorApplication>, ApplicationError> {
        let all = self.db.list_applications().await?;
        Ok(all.into_iter().filter(|a| filter.matches(a.status)).collect())
    }

    pub async fn get(&self, id: &str) -> Result<VendorApplication, ApplicationError> {
        self.db
            .get_application(id)
            .await?
            .ok_or_else(|| ApplicationError::NotFound { id: id.to_string() })
    }

    pub async fn approve(
        &self,
        id: &str,
        request: ApproveRequest,
    ) -> Result<VendorApplication, ApplicationError> {
        let _guard = self.review_lock.lock().await;
        let mut application = self.open_for_review(id, ApplicationStatus::Approved).await?;
        application.status = ApplicationStatus::Approved;
        application.reviewer_id = Some(reviewer_or_default(request.reviewer_id));
        self.db.update_application(&application).await?;
        info!(
            application_id = %id,
            primary_email = %request.primary_email,
            primary_name = %request.primary_name,
            "Vendor application approved"
        );
        Ok(application)
    }

    pub async fn reject(
        &self,
        id: &str,
        request: RejectRequest,
    ) -> Result<VendorApplication, ApplicationError> {
        let reason = request.reason.trim();
        if reason.is_empty() {
            return Err(ApplicationError::Validation(
                "a rejection reason is required".to_string(),
            ));
        }
        let _guard = self.review_lock.lock().await;
        let mut application = self.open_for_review(id, ApplicationStatus::Rejected).await?;
        application.status = ApplicationStatus::Rejected;
        application.rejection_reason = Some(reason.to_string());
        application.reviewer_id = Some(reviewer_or_default(request.reviewer_id));
        self.db.update_application(&application).await?;
        info!(application_id = %id, "Vendor application rejected");
        Ok(application)
    }

    async fn open_for_review(
        &self,
        id: &str,
        target: ApplicationStatus,
    ) -> Result<VendorApplication, ApplicationError> {
        let application = self.get(id).await?;
        if !application.status.is_open() {
            warn!(
                application_id = %id,
                status = %application.status,
                requested = %target,
                "Application already decided"
            );
            return Err(ApplicationError::InvalidTransition {
                id: id.to_string(),
                status: application.status.to_string(),
                target: target.to_string(),
            });
        }
        Ok(application)
    }
}

#[async_trait]
impl ApplicationIntake for ApplicationDesk {
    async fn submit(
        &self,
        submission: ApplicationSubmission,
    ) -> Result<SubmitReceipt, ApplicationError> {
        let missing = submission.missing_required();
        if !missing.is_empty() {
            return Err(ApplicationError::Validation(format!(
                "missing required fields: {}",
                missing.join(", ")
            )));
        }

        let application = VendorApplication {
            id: generate_application_id(),
            company_name: submission.company_name,
            contact_name: submission.contact_name,
            contact_email: submission.contact_email,
            contact_phone: submission.contact_phone,
            website: submission.website,
            address_line1: submission.address_line1,
            city: submission.city,
            state: submission.state,
            postal_code: submission.postal_code,
            service_areas: submission.service_areas,
            services_offered: submission.services_offered,
            heard_about_us: submission.heard_about_us,
            notes: submission.notes,
            status: ApplicationStatus::New,
            reviewer_id: None,
            rejection_reason: None,
            created_at: Utc::now(),
        };
        self.db.insert_application(&application).await?;
        info!(
            application_id = %application.id,
            company = %application.company_name,
            "Vendor application submitted"
        );
        Ok(SubmitReceipt {
            success: true,
            application_id: application.id,
        })
    }
}

fn reviewer_or_default(reviewer: Option<String>) -> String {
    reviewer
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty())
        .unwrap_or_else(|| DEFAULT_REVIEWER.to_string())
}

/// `va_` followed by six random base-36 characters.
fn generate_application_id() -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..6)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect();
    format!("va_{suffix}")
}
