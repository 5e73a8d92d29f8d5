//! Persona roles and normalization of free-form role strings.

use serde::{Deserialize, Serialize};

/// The closed set of personas the portal routes for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Manager,
    Adjuster,
    Agency,
    Vendor,
    RelationshipManager,
    SuperAdmin,
}

impl Role {
    pub const ALL: [Role; 6] = [
        Role::Manager,
        Role::Adjuster,
        Role::Agency,
        Role::Vendor,
        Role::RelationshipManager,
        Role::SuperAdmin,
    ];

    /// Normalize a raw role string (as stored on a profile) into a `Role`.
    ///
    /// Matching is case-insensitive against the canonical names and the
    /// account-type aliases (`AGENCY_USER`, `VENDOR_USER`, ...). A missing or
    /// unrecognized role falls back to `Manager`.
    pub fn normalize(raw: Option<&str>) -> Role {
        let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
            return Role::Manager;
        };
        match raw.to_ascii_uppercase().as_str() {
            "MANAGER" => Role::Manager,
            "ADJUSTER" => Role::Adjuster,
            "AGENCY" | "AGENCY_USER" => Role::Agency,
            "VENDOR" | "VENDOR_USER" => Role::Vendor,
            "RELATIONSHIP_MANAGER" => Role::RelationshipManager,
            "SUPER_ADMIN" => Role::SuperAdmin,
            _ => Role::Manager,
        }
    }

    /// Canonical snake_case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Manager => "manager",
            Self::Adjuster => "adjuster",
            Self::Agency => "agency",
            Self::Vendor => "vendor",
            Self::RelationshipManager => "relationship_manager",
            Self::SuperAdmin => "super_admin",
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Self::Manager
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_normalize() {
        assert_eq!(Role::normalize(Some("ADJUSTER")), Role::Adjuster);
        assert_eq!(Role::normalize(Some("AGENCY_USER")), Role::Agency);
        assert_eq!(Role::normalize(Some("VENDOR_USER")), Role::Vendor);
        assert_eq!(Role::normalize(Some("RELATIONSHIP_MANAGER")), Role::RelationshipManager);
        assert_eq!(Role::normalize(Some("SUPER_ADMIN")), Role::SuperAdmin);
        assert_eq!(Role::normalize(Some("MANAGER")), Role::Manager);
    }

    #[test]
    fn canonical_names_normalize_case_insensitively() {
        for role in Role::ALL {
            assert_eq!(Role::normalize(Some(role.as_str())), role);
            assert_eq!(Role::normalize(Some(&role.as_str().to_uppercase())), role);
        }
        assert_eq!(Role::normalize(Some("  vendor_user ")), Role::Vendor);
    }

    #[test]
    fn unknown_or_missing_falls_back_to_manager() {
        assert_eq!(Role::normalize(None), Role::Manager);
        assert_eq!(Role::normalize(Some("")), Role::Manager);
        assert_eq!(Role::normalize(Some("janitor")), Role::Manager);
        assert_eq!(Role::normalize(Some("admin")), Role::Manager);
    }

    #[test]
    fn display_matches_serde() {
        for role in Role::ALL {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(format!("\"{role}\""), json);
        }
    }
}
