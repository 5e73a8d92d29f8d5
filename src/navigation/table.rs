//! Static authorization table: which routes each role may reach, and where it lands.

use super::role::Role;
use super::route::RouteKey;

use RouteKey::*;

const MANAGER: &[RouteKey] = &[
    Dashboard, Claims, Workflow, Vendors, Agencies, Users, Referrals, Settings, Blueprint,
];

const ADJUSTER: &[RouteKey] = &[AdjusterDashboard, Claims, Referrals, Settings];

const AGENCY: &[RouteKey] = &[
    AgencyDashboard,
    AgencyClaims,
    AgencySettings,
    AgencyRewards,
    AgencyCredits,
    Claims,
    Settings,
];

const VENDOR: &[RouteKey] = &[VendorDashboard, VendorJobs, VendorSettings, VendorPayments, Settings];

const RELATIONSHIP_MANAGER: &[RouteKey] = &[
    RmDashboard,
    RmVendors,
    RmAgencies,
    RmAdjusters,
    RmReferrals,
    RmCompliance,
    RmOutreach,
    RmVendorApplications,
    Settings,
    Blueprint,
];

const SUPER_ADMIN: &[RouteKey] = &[
    AdminDashboard,
    RmDashboard,
    Settings,
    Blueprint,
    Claims,
    Vendors,
    Agencies,
    Users,
    Referrals,
    AdminVendorApplications,
    RmVendorApplications,
];

/// Authorization keys the role may access.
pub fn allowed_routes(role: Role) -> &'static [RouteKey] {
    match role {
        Role::Manager => MANAGER,
        Role::Adjuster => ADJUSTER,
        Role::Agency => AGENCY,
        Role::Vendor => VENDOR,
        Role::RelationshipManager => RELATIONSHIP_MANAGER,
        Role::SuperAdmin => SUPER_ADMIN,
    }
}

/// Landing route for the role.
pub fn home(role: Role) -> RouteKey {
    match role {
        Role::Manager => Dashboard,
        Role::Adjuster => AdjusterDashboard,
        Role::Agency => AgencyDashboard,
        Role::Vendor => VendorDashboard,
        Role::RelationshipManager => RmDashboard,
        Role::SuperAdmin => AdminDashboard,
    }
}

/// Whether `route` (or its authorization parent) is in the role's allowed set.
pub fn is_allowed(role: Role, route: RouteKey) -> bool {
    allowed_routes(role).contains(&route.authorization_key())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_role_has_a_non_empty_allowed_set() {
        for role in Role::ALL {
            assert!(!allowed_routes(role).is_empty(), "{role} has no routes");
        }
    }

    #[test]
    fn home_is_allowed_for_every_role() {
        for role in Role::ALL {
            assert!(
                allowed_routes(role).contains(&home(role)),
                "home {} not allowed for {role}",
                home(role)
            );
        }
    }

    #[test]
    fn table_contains_only_authorization_keys() {
        // Detail routes must never appear directly; they inherit from their parent.
        for role in Role::ALL {
            for key in allowed_routes(role) {
                assert!(key.authorization_parent().is_none(), "{key:?} listed for {role}");
                assert!(!key.is_public(), "{key:?} is public and should not be listed");
            }
        }
    }

    #[test]
    fn detail_routes_inherit_parent_entry() {
        assert!(is_allowed(Role::Adjuster, ClaimDetail));
        assert!(is_allowed(Role::Vendor, VendorOnboarding));
        assert!(is_allowed(Role::RelationshipManager, RmVendorApplicationDetail));
        assert!(!is_allowed(Role::RelationshipManager, AdminVendorApplicationDetail));
        assert!(!is_allowed(Role::Vendor, ClaimDetail));
    }
}
