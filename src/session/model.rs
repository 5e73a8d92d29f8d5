//! Session profile and the demo personas offered on the login screen.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::navigation::Role;

/// Answers from the `/onboarding` questionnaire, keyed by field name.
pub type OnboardingAnswers = BTreeMap<String, String>;

/// Identity of the signed-in user.
///
/// `role` is kept as the raw string the user signed in with; use
/// [`ProfileInfo::role`] for the normalized value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileInfo {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "role", default, skip_serializing_if = "Option::is_none")]
    pub raw_role: Option<String>,
}

impl Default for ProfileInfo {
    fn default() -> Self {
        Self {
            name: "New User".to_string(),
            email: String::new(),
            title: None,
            phone: None,
            raw_role: None,
        }
    }
}

impl ProfileInfo {
    pub fn role(&self) -> Role {
        Role::normalize(self.raw_role.as_deref())
    }
}

/// A one-click login persona.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Persona {
    pub key: &'static str,
    pub label: &'static str,
    pub email: &'static str,
    pub name: &'static str,
    pub role: &'static str,
}

impl Persona {
    pub fn profile(&self) -> ProfileInfo {
        ProfileInfo {
            name: self.name.to_string(),
            email: self.email.to_string(),
            title: Some(self.label.to_string()),
            phone: None,
            raw_role: Some(self.role.to_string()),
        }
    }
}

pub const PERSONAS: &[Persona] = &[
    Persona {
        key: "adjuster",
        label: "Adjuster",
        email: "adjuster@claimsy.ai",
        name: "Adjuster Pro",
        role: "ADJUSTER",
    },
    Persona {
        key: "agency",
        label: "Agency",
        email: "agency@claimsy.ai",
        name: "Agency Lead",
        role: "AGENCY_USER",
    },
    Persona {
        key: "vendor",
        label: "Vendor",
        email: "vendor@claimsy.ai",
        name: "Vendor Ops",
        role: "VENDOR_USER",
    },
    Persona {
        key: "relationship_manager",
        label: "Relationship Manager",
        email: "rm@claimsy.ai",
        name: "Success Lead",
        role: "RELATIONSHIP_MANAGER",
    },
    Persona {
        key: "super_admin",
        label: "Super Admin",
        email: "admin@claimsy.ai",
        name: "Admin",
        role: "SUPER_ADMIN",
    },
];

pub fn persona(key: &str) -> Option<&'static Persona> {
    PERSONAS.iter().find(|p| p.key.eq_ignore_ascii_case(key))
}

/// Email sign-in or sign-up form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub signup: bool,
}

impl LoginRequest {
    /// Build the profile to sign in with. A missing name is guessed from the
    /// email's local part.
    pub fn into_profile(self) -> ProfileInfo {
        let typed = self.name.as_deref().map(str::trim).unwrap_or_default();
        let name = if typed.is_empty() {
            self.email
                .split('@')
                .next()
                .unwrap_or_default()
                .replacen('.', " ", 1)
        } else {
            typed.to_string()
        };
        let title = if self.signup { "New user" } else { "Manager" };
        ProfileInfo {
            name: if name.is_empty() {
                ProfileInfo::default().name
            } else {
                name
            },
            email: self.email,
            title: Some(title.to_string()),
            phone: None,
            raw_role: self.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_role_is_normalized() {
        let mut profile = ProfileInfo::default();
        assert_eq!(profile.role(), Role::Manager);
        profile.raw_role = Some("AGENCY_USER".to_string());
        assert_eq!(profile.role(), Role::Agency);
    }

    #[test]
    fn personas_cover_every_non_manager_role() {
        let roles: Vec<Role> = PERSONAS.iter().map(|p| p.profile().role()).collect();
        for role in Role::ALL {
            if role == Role::Manager {
                continue;
            }
            assert!(roles.contains(&role), "no persona for {role}");
        }
        assert_eq!(persona("VENDOR").unwrap().role, "VENDOR_USER");
        assert!(persona("ceo").is_none());
    }

    #[test]
    fn login_guesses_name_from_email() {
        let profile = LoginRequest {
            email: "alex.mason@claimsy.ai".to_string(),
            role: Some("ADJUSTER".to_string()),
            ..Default::default()
        }
        .into_profile();
        assert_eq!(profile.name, "alex mason");
        assert_eq!(profile.title.as_deref(), Some("Manager"));
        assert_eq!(profile.role(), Role::Adjuster);

        let profile = LoginRequest {
            email: "@claimsy.ai".to_string(),
            name: Some("  ".to_string()),
            signup: true,
            ..Default::default()
        }
        .into_profile();
        assert_eq!(profile.name, "New User");
        assert_eq!(profile.title.as_deref(), Some("New user"));
        assert_eq!(profile.role(), Role::Manager);
    }

    #[test]
    fn wire_format_uses_role_key() {
        let json = serde_json::to_value(persona("adjuster").unwrap().profile()).unwrap();
        assert_eq!(json["role"], "ADJUSTER");
        assert_eq!(json["title"], "Adjuster");
        assert!(json.get("phone").is_none());
    }
}
