//! Vendor applications: public intake and RM/admin review.

pub mod desk;
pub mod intake;
pub mod model;
pub mod routes;

pub use desk::{ApplicationDesk, ApplicationIntake, DEFAULT_REVIEWER};
pub use intake::{IntakeForm, IntakeStatus, SUBMIT_FAILED_MESSAGE};
pub use model::{
    ApplicationStatus, ApplicationSubmission, ApproveRequest, RejectRequest, StatusFilter,
    SubmitReceipt, VendorApplication,
};
