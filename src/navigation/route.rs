//! Declared routes, path matching and the detail → parent authorization relation.

use serde::{Deserialize, Serialize};

/// Title shown for paths that match no declared route.
pub const FALLBACK_TITLE: &str = "ClaimsyAI";

/// Every route the portal declares.
///
/// Detail routes (those with a `:id` segment, and the vendor wizard) do not
/// get their own authorization entry; they declare the list route whose entry
/// they reuse via [`RouteKey::authorization_parent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteKey {
    Dashboard,
    Claims,
    ClaimDetail,
    Workflow,
    Vendors,
    Agencies,
    Users,
    Referrals,
    Settings,
    Blueprint,
    Login,
    Onboarding,
    VendorIntake,
    AdjusterDashboard,
    AgencyDashboard,
    AgencyClaims,
    AgencySettings,
    AgencyRewards,
    AgencyCredits,
    VendorDashboard,
    VendorJobs,
    VendorSettings,
    VendorPayments,
    VendorOnboarding,
    RmDashboard,
    RmVendors,
    RmAgencies,
    RmAdjusters,
    RmReferrals,
    RmCompliance,
    RmOutreach,
    RmVendorApplications,
    RmVendorApplicationDetail,
    AdminDashboard,
    AdminVendorApplications,
    AdminVendorApplicationDetail,
    PublicClaimStatus,
    ForInsuranceAgencies,
    ForRestorationVendors,
    ForAdjusters,
    HowItWorks,
    Contact,
    LegalPrivacy,
    LegalTerms,
}

impl RouteKey {
    pub const ALL: &'static [RouteKey] = &[
        RouteKey::Dashboard,
        RouteKey::Claims,
        RouteKey::ClaimDetail,
        RouteKey::Workflow,
        RouteKey::Vendors,
        RouteKey::Agencies,
        RouteKey::Users,
        RouteKey::Referrals,
        RouteKey::Settings,
        RouteKey::Blueprint,
        RouteKey::Login,
        RouteKey::Onboarding,
        RouteKey::VendorIntake,
        RouteKey::AdjusterDashboard,
        RouteKey::AgencyDashboard,
        RouteKey::AgencyClaims,
        RouteKey::AgencySettings,
        RouteKey::AgencyRewards,
        RouteKey::AgencyCredits,
        RouteKey::VendorDashboard,
        RouteKey::VendorJobs,
        RouteKey::VendorSettings,
        RouteKey::VendorPayments,
        RouteKey::VendorOnboarding,
        RouteKey::RmDashboard,
        RouteKey::RmVendors,
        RouteKey::RmAgencies,
        RouteKey::RmAdjusters,
        RouteKey::RmReferrals,
        RouteKey::RmCompliance,
        RouteKey::RmOutreach,
        RouteKey::RmVendorApplications,
        RouteKey::RmVendorApplicationDetail,
        RouteKey::AdminDashboard,
        RouteKey::AdminVendorApplications,
        RouteKey::AdminVendorApplicationDetail,
        RouteKey::PublicClaimStatus,
        RouteKey::ForInsuranceAgencies,
        RouteKey::ForRestorationVendors,
        RouteKey::ForAdjusters,
        RouteKey::HowItWorks,
        RouteKey::Contact,
        RouteKey::LegalPrivacy,
        RouteKey::LegalTerms,
    ];

    /// Path pattern; `:id` matches exactly one non-empty segment.
    pub fn pattern(&self) -> &'static str {
        match self {
            Self::Dashboard => "/",
            Self::Claims => "/claims",
            Self::ClaimDetail => "/claims/:id",
            Self::Workflow => "/workflow",
            Self::Vendors => "/vendors",
            Self::Agencies => "/agencies",
            Self::Users => "/users",
            Self::Referrals => "/referrals",
            Self::Settings => "/settings",
            Self::Blueprint => "/blueprint",
            Self::Login => "/login",
            Self::Onboarding => "/onboarding",
            Self::VendorIntake => "/onboard/vendor",
            Self::AdjusterDashboard => "/adjuster/dashboard",
            Self::AgencyDashboard => "/agency/dashboard",
            Self::AgencyClaims => "/agency/claims",
            Self::AgencySettings => "/agency/settings",
            Self::AgencyRewards => "/agency/rewards",
            Self::AgencyCredits => "/agency/credits",
            Self::VendorDashboard => "/vendor/dashboard",
            Self::VendorJobs => "/vendor/jobs",
            Self::VendorSettings => "/vendor/settings",
            Self::VendorPayments => "/vendor/payments",
            Self::VendorOnboarding => "/vendor/onboarding",
            Self::RmDashboard => "/rm/dashboard",
            Self::RmVendors => "/rm/vendors",
            Self::RmAgencies => "/rm/agencies",
            Self::RmAdjusters => "/rm/adjusters",
            Self::RmReferrals => "/rm/referrals",
            Self::RmCompliance => "/rm/compliance",
            Self::RmOutreach => "/rm/outreach",
            Self::RmVendorApplications => "/rm/vendor-applications",
            Self::RmVendorApplicationDetail => "/rm/vendor-applications/:id",
            Self::AdminDashboard => "/admin/dashboard",
            Self::AdminVendorApplications => "/admin/vendor-applications",
            Self::AdminVendorApplicationDetail => "/admin/vendor-applications/:id",
            Self::PublicClaimStatus => "/c/:id",
            Self::ForInsuranceAgencies => "/for-insurance-agencies",
            Self::ForRestorationVendors => "/for-restoration-vendors",
            Self::ForAdjusters => "/for-adjusters",
            Self::HowItWorks => "/how-it-works",
            Self::Contact => "/contact",
            Self::LegalPrivacy => "/legal/privacy",
            Self::LegalTerms => "/legal/terms",
        }
    }

    /// Concrete path for non-parameterized routes. Used as redirect target.
    pub fn path(&self) -> &'static str {
        self.pattern()
    }

    /// Title shown in the top bar.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Claims => "Claims",
            Self::ClaimDetail => "Claim Detail",
            Self::Workflow => "Workflow",
            Self::Vendors => "Vendors",
            Self::Agencies => "Agencies",
            Self::Users => "Users",
            Self::Referrals => "Referrals",
            Self::Settings => "Settings",
            Self::Blueprint => "Blueprint",
            Self::Login => "Login",
            Self::Onboarding => "Onboarding",
            Self::VendorIntake => "Vendor Intake",
            Self::AdjusterDashboard => "Adjuster",
            Self::AgencyDashboard => "Agency",
            Self::AgencyClaims => "Agency Claims",
            Self::AgencySettings => "Agency Settings",
            Self::AgencyRewards => "Agency Rewards",
            Self::AgencyCredits => "Agency Credits",
            Self::VendorDashboard => "Vendor",
            Self::VendorJobs => "Vendor Jobs",
            Self::VendorSettings => "Vendor Settings",
            Self::VendorPayments => "Vendor Payments",
            Self::VendorOnboarding => "Vendor Onboarding",
            Self::RmDashboard => "Relationship Manager",
            Self::RmVendors => "RM Vendors",
            Self::RmAgencies => "RM Agencies",
            Self::RmAdjusters => "RM Adjusters",
            Self::RmReferrals => "RM Referrals",
            Self::RmCompliance => "RM Compliance",
            Self::RmOutreach => "RM Outreach",
            Self::RmVendorApplications => "RM Vendor Applications",
            Self::RmVendorApplicationDetail => "RM Vendor Application",
            Self::AdminDashboard => "Super Admin",
            Self::AdminVendorApplications => "Admin Vendor Applications",
            Self::AdminVendorApplicationDetail => "Admin Vendor Application",
            Self::PublicClaimStatus => "Client Status",
            Self::ForInsuranceAgencies => "For Insurance Agencies",
            Self::ForRestorationVendors => "For Restoration Vendors",
            Self::ForAdjusters => "For Adjusters",
            Self::HowItWorks => "How Claimsy Works",
            Self::Contact => "Contact",
            Self::LegalPrivacy => "Privacy",
            Self::LegalTerms => "Terms",
        }
    }

    /// The list route whose authorization entry this route reuses.
    pub fn authorization_parent(&self) -> Option<RouteKey> {
        match self {
            Self::ClaimDetail => Some(Self::Claims),
            Self::VendorOnboarding => Some(Self::VendorDashboard),
            Self::RmVendorApplicationDetail => Some(Self::RmVendorApplications),
            Self::AdminVendorApplicationDetail => Some(Self::AdminVendorApplications),
            _ => None,
        }
    }

    /// Key looked up in the authorization table.
    pub fn authorization_key(&self) -> RouteKey {
        self.authorization_parent().unwrap_or(*self)
    }

    /// Reachable without an active session, regardless of the authorization table.
    pub fn is_public(&self) -> bool {
        matches!(
            self,
            Self::PublicClaimStatus
                | Self::VendorIntake
                | Self::ForInsuranceAgencies
                | Self::ForRestorationVendors
                | Self::ForAdjusters
                | Self::HowItWorks
                | Self::Contact
                | Self::LegalPrivacy
                | Self::LegalTerms
        )
    }

    /// Rendered without the navigation shell and exempt from the allowed-set check.
    pub fn is_chromeless(&self) -> bool {
        matches!(self, Self::Login | Self::Onboarding | Self::VendorIntake)
    }

    /// Match a normalized path against the declared patterns.
    pub fn resolve(path: &str) -> Option<RouteMatch> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        Self::ALL.iter().find_map(|key| {
            let pattern: Vec<&str> = key.pattern().split('/').filter(|s| !s.is_empty()).collect();
            if pattern.len() != segments.len() {
                return None;
            }
            let mut param = None;
            for (expected, actual) in pattern.iter().zip(&segments) {
                if *expected == ":id" {
                    param = Some((*actual).to_string());
                } else if expected != actual {
                    return None;
                }
            }
            Some(RouteMatch { key: *key, param })
        })
    }
}

impl std::fmt::Display for RouteKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.pattern())
    }
}

/// A declared route matched against a concrete path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteMatch {
    pub key: RouteKey,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
}

/// Normalize a requested path: drop query/fragment, ensure a leading slash and
/// strip a single trailing slash (except for the root).
pub fn normalize_path(raw: &str) -> String {
    let path = raw
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim();
    let mut path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    };
    if path.len() > 1 && path.ends_with('/') {
        path.pop();
    }
    path
}

/// Title for a raw path, falling back to the product name.
pub fn title_for(path: &str) -> &'static str {
    RouteKey::resolve(&normalize_path(path))
        .map(|m| m.key.title())
        .unwrap_or(FALLBACK_TITLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_single_trailing_slash() {
        assert_eq!(normalize_path("/claims/"), "/claims");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("claims"), "/claims");
        assert_eq!(normalize_path("/rm/vendors?tab=1"), "/rm/vendors");
    }

    #[test]
    fn detail_routes_resolve_with_param() {
        let m = RouteKey::resolve("/claims/abc123").unwrap();
        assert_eq!(m.key, RouteKey::ClaimDetail);
        assert_eq!(m.param.as_deref(), Some("abc123"));
        assert_eq!(m.key.authorization_key(), RouteKey::Claims);

        let m = RouteKey::resolve("/admin/vendor-applications/va_001").unwrap();
        assert_eq!(m.key, RouteKey::AdminVendorApplicationDetail);
        assert_eq!(m.key.authorization_key(), RouteKey::AdminVendorApplications);
    }

    #[test]
    fn static_routes_resolve_without_param() {
        for key in RouteKey::ALL {
            if key.pattern().contains(":id") {
                continue;
            }
            let m = RouteKey::resolve(key.pattern()).unwrap();
            assert_eq!(m.key, *key, "pattern {} resolved to {:?}", key.pattern(), m.key);
            assert!(m.param.is_none());
        }
    }

    #[test]
    fn undeclared_paths_do_not_resolve() {
        assert!(RouteKey::resolve("/nowhere").is_none());
        assert!(RouteKey::resolve("/claims/abc/extra").is_none());
        assert!(RouteKey::resolve("/c").is_none());
    }

    #[test]
    fn parents_are_not_themselves_detail_routes() {
        for key in RouteKey::ALL {
            if let Some(parent) = key.authorization_parent() {
                assert!(parent.authorization_parent().is_none(), "{key:?} has a nested parent");
            }
        }
    }

    #[test]
    fn titles_fall_back_for_unknown_paths() {
        assert_eq!(title_for("/claims/"), "Claims");
        assert_eq!(title_for("/c/xyz"), "Client Status");
        assert_eq!(title_for("/unknown"), FALLBACK_TITLE);
    }
}
