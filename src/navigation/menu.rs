//! Sidebar entries shown in the navigation shell.

use serde::Serialize;

use super::role::Role;
use super::route::RouteKey;

/// One sidebar link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label: &'static str,
    pub route: RouteKey,
    pub to: &'static str,
}

const ALL_ROLES: &[Role] = &Role::ALL;

/// Declared entries with the roles that see them.
const ENTRIES: &[(&str, RouteKey, &[Role])] = &[
    ("Dashboard", RouteKey::Dashboard, &[Role::Manager]),
    ("Adjuster Home", RouteKey::AdjusterDashboard, &[Role::Adjuster]),
    ("Agency Home", RouteKey::AgencyDashboard, &[Role::Agency]),
    ("Vendor Home", RouteKey::VendorDashboard, &[Role::Vendor]),
    ("RM Home", RouteKey::RmDashboard, &[Role::RelationshipManager]),
    ("Admin Home", RouteKey::AdminDashboard, &[Role::SuperAdmin]),
    ("Claims", RouteKey::Claims, &[Role::Manager, Role::Adjuster, Role::Agency]),
    ("Referrals", RouteKey::Referrals, &[Role::Manager, Role::Adjuster]),
    ("Workflow", RouteKey::Workflow, &[Role::Manager]),
    ("Vendors", RouteKey::Vendors, &[Role::Manager, Role::SuperAdmin]),
    ("Agencies", RouteKey::Agencies, &[Role::Manager, Role::SuperAdmin]),
    ("Users", RouteKey::Users, &[Role::Manager, Role::SuperAdmin]),
    ("RM Vendors", RouteKey::RmVendors, &[Role::RelationshipManager]),
    ("RM Agencies", RouteKey::RmAgencies, &[Role::RelationshipManager]),
    ("RM Referrals", RouteKey::RmReferrals, &[Role::RelationshipManager]),
    ("RM Compliance", RouteKey::RmCompliance, &[Role::RelationshipManager]),
    ("RM Outreach", RouteKey::RmOutreach, &[Role::RelationshipManager]),
    ("RM Vendor Apps", RouteKey::RmVendorApplications, &[Role::RelationshipManager]),
    ("Admin Vendor Apps", RouteKey::AdminVendorApplications, &[Role::SuperAdmin]),
    (
        "Blueprint",
        RouteKey::Blueprint,
        &[Role::Manager, Role::RelationshipManager, Role::SuperAdmin],
    ),
    ("Settings", RouteKey::Settings, ALL_ROLES),
];

/// Sidebar entries visible to `role`, in declaration order.
pub fn menu_for(role: Role) -> Vec<NavItem> {
    ENTRIES
        .iter()
        .filter(|(_, _, roles)| roles.contains(&role))
        .map(|(label, route, _)| NavItem {
            label: *label,
            route: *route,
            to: route.path(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::table;

    #[test]
    fn every_menu_entry_is_reachable() {
        for role in Role::ALL {
            for item in menu_for(role) {
                assert!(
                    table::is_allowed(role, item.route),
                    "{role} sees {} but cannot open it",
                    item.to
                );
            }
        }
    }

    #[test]
    fn home_is_first_entry() {
        for role in Role::ALL {
            let items = menu_for(role);
            assert_eq!(items[0].route, table::home(role));
        }
    }

    #[test]
    fn settings_is_shared() {
        for role in Role::ALL {
            assert!(menu_for(role).iter().any(|i| i.route == RouteKey::Settings));
        }
    }
}
