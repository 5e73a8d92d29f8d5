//! Role-based navigation: personas, declared routes, the authorization table
//! and the guard that turns a requested path into a render or a redirect.

pub mod guard;
pub mod menu;
pub mod role;
pub mod route;
pub mod routes;
pub mod table;

pub use guard::{NavDecision, RedirectReason, decide};
pub use menu::{NavItem, menu_for};
pub use role::Role;
pub use route::{RouteKey, RouteMatch, normalize_path, title_for};
pub use table::{allowed_routes, home, is_allowed};
