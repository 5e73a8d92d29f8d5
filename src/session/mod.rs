//! Signed-in profile, session flag and login personas.

pub mod model;
pub mod routes;
pub mod store;

pub use model::{LoginRequest, OnboardingAnswers, PERSONAS, Persona, ProfileInfo, persona};
pub use store::{SessionSnapshot, SessionStore};
