//! Route guard: decides whether a requested path renders or redirects.
//!
//! Every navigation resolves to a [`NavDecision`]. Unauthorized access is
//! never an error: it always becomes a redirect, either to `/login` (no
//! session) or to the role's home route.

use serde::Serialize;
use tracing::debug;

use super::role::Role;
use super::route::{RouteKey, normalize_path};
use super::table;

/// Why a navigation was redirected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RedirectReason {
    /// No active session and the path is not public.
    Unauthenticated,
    /// The login page was requested with a session already active.
    AlreadyAuthenticated,
    /// The route exists but is not in the role's allowed set.
    NotPermitted,
    /// The path matches no declared route.
    UnknownRoute,
}

/// Outcome of a guarded navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum NavDecision {
    Render {
        route: RouteKey,
        path: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        param: Option<String>,
        title: &'static str,
        /// Whether the navigation shell (sidebar, top bar) is drawn.
        chrome: bool,
    },
    Redirect {
        to: &'static str,
        reason: RedirectReason,
    },
}

impl NavDecision {
    pub fn is_render(&self) -> bool {
        matches!(self, Self::Render { .. })
    }

    /// Redirect target, if this decision is a redirect.
    pub fn redirect_target(&self) -> Option<&'static str> {
        match self {
            Self::Redirect { to, .. } => Some(to),
            Self::Render { .. } => None,
        }
    }

    fn redirect(to: RouteKey, reason: RedirectReason) -> Self {
        Self::Redirect {
            to: to.path(),
            reason,
        }
    }
}

/// Decide how to handle a request for `raw_path`.
pub fn decide(raw_path: &str, session_active: bool, role: Role) -> NavDecision {
    let path = normalize_path(raw_path);
    let matched = RouteKey::resolve(&path);

    let decision = match matched {
        Some(m) if m.key.is_public() => render(path, m.key, m.param),
        Some(m) if !session_active && m.key == RouteKey::Login => render(path, m.key, m.param),
        _ if !session_active => {
            NavDecision::redirect(RouteKey::Login, RedirectReason::Unauthenticated)
        }
        None => NavDecision::redirect(table::home(role), RedirectReason::UnknownRoute),
        Some(m) if m.key == RouteKey::Login => {
            NavDecision::redirect(table::home(role), RedirectReason::AlreadyAuthenticated)
        }
        Some(m) if m.key.is_chromeless() || table::is_allowed(role, m.key) => {
            render(path, m.key, m.param)
        }
        Some(_) => NavDecision::redirect(table::home(role), RedirectReason::NotPermitted),
    };

    debug!(path = raw_path, role = %role, session_active, decision = ?decision, "Route guard decision");
    decision
}

fn render(path: String, route: RouteKey, param: Option<String>) -> NavDecision {
    NavDecision::Render {
        route,
        path,
        param,
        title: route.title(),
        chrome: !route.is_chromeless(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn redirected_to(decision: &NavDecision) -> &'static str {
        decision
            .redirect_target()
            .unwrap_or_else(|| panic!("expected redirect, got {decision:?}"))
    }

    #[test]
    fn adjuster_claim_detail_is_permitted() {
        let role = Role::normalize(Some("ADJUSTER"));
        assert_eq!(role, Role::Adjuster);
        let decision = decide("/claims/abc123", true, role);
        match decision {
            NavDecision::Render { route, param, chrome, .. } => {
                assert_eq!(route, RouteKey::ClaimDetail);
                assert_eq!(route.authorization_key(), RouteKey::Claims);
                assert_eq!(param.as_deref(), Some("abc123"));
                assert!(chrome);
            }
            other => panic!("expected render, got {other:?}"),
        }
    }

    #[test]
    fn vendor_is_redirected_from_admin_dashboard() {
        let role = Role::normalize(Some("VENDOR_USER"));
        let decision = decide("/admin/dashboard", true, role);
        assert_eq!(redirected_to(&decision), "/vendor/dashboard");
        assert_eq!(
            decision,
            NavDecision::Redirect {
                to: "/vendor/dashboard",
                reason: RedirectReason::NotPermitted
            }
        );
    }

    #[test]
    fn disallowed_routes_redirect_home_for_every_role() {
        for role in Role::ALL {
            for key in RouteKey::ALL {
                if key.pattern().contains(':') || key.is_public() || key.is_chromeless() {
                    continue;
                }
                let decision = decide(key.pattern(), true, role);
                if table::is_allowed(role, *key) {
                    assert!(decision.is_render(), "{role} should reach {key}");
                } else {
                    assert_eq!(redirected_to(&decision), table::home(role).path(), "{role} -> {key}");
                }
            }
        }
    }

    #[test]
    fn unauthenticated_requests_redirect_to_login() {
        for key in RouteKey::ALL {
            if key.is_public() || *key == RouteKey::Login {
                continue;
            }
            let path = key.pattern().replace(":id", "x1");
            let decision = decide(&path, false, Role::Manager);
            assert_eq!(
                decision,
                NavDecision::Redirect {
                    to: "/login",
                    reason: RedirectReason::Unauthenticated
                },
                "{path}"
            );
        }
        assert_eq!(redirected_to(&decide("/nowhere", false, Role::Vendor)), "/login");
    }

    #[test]
    fn public_paths_render_without_session() {
        for path in ["/c/claim-77", "/onboard/vendor", "/how-it-works", "/legal/terms/"] {
            assert!(decide(path, false, Role::Manager).is_render(), "{path}");
        }
        match decide("/onboard/vendor", false, Role::Manager) {
            NavDecision::Render { chrome, .. } => assert!(!chrome),
            other => panic!("expected render, got {other:?}"),
        }
    }

    #[test]
    fn login_renders_only_without_session() {
        assert!(decide("/login", false, Role::Manager).is_render());
        assert_eq!(
            decide("/login", true, Role::Agency),
            NavDecision::Redirect {
                to: "/agency/dashboard",
                reason: RedirectReason::AlreadyAuthenticated
            }
        );
    }

    #[test]
    fn onboarding_is_chromeless_and_exempt() {
        for role in Role::ALL {
            match decide("/onboarding/", true, role) {
                NavDecision::Render { route, chrome, .. } => {
                    assert_eq!(route, RouteKey::Onboarding);
                    assert!(!chrome);
                }
                other => panic!("expected render for {role}, got {other:?}"),
            }
        }
    }

    #[test]
    fn unknown_paths_fall_through_to_home() {
        assert_eq!(
            decide("/does/not/exist", true, Role::RelationshipManager),
            NavDecision::Redirect {
                to: "/rm/dashboard",
                reason: RedirectReason::UnknownRoute
            }
        );
    }

    #[test]
    fn unrecognized_role_uses_manager_table() {
        let role = Role::normalize(Some("intern"));
        assert!(decide("/workflow", true, role).is_render());
        assert_eq!(redirected_to(&decide("/vendor/jobs", true, role)), "/");
    }

    #[test]
    fn vendor_wizard_follows_vendor_dashboard_entry() {
        assert!(decide("/vendor/onboarding", true, Role::Vendor).is_render());
        assert_eq!(redirected_to(&decide("/vendor/onboarding", true, Role::Adjuster)), "/adjuster/dashboard");
    }
}
