//! View routing: maps (role, active view) to the navigation tree and
//! (role, view) to page content. Both are pure functions over fixed tables;
//! unknown roles and views degrade to defaults instead of erroring.

pub mod view;

pub use view::{View, ViewState};

use serde::Serialize;

use crate::composer;
use crate::models::dashboard::DashboardData;
use crate::models::identity::Role;
use crate::models::navigation::{NavItem, NavSection};

/// Structured page content handed to the renderer. No markup.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageContent {
    Dashboard(DashboardData),
    /// The profile page shell. Identity fields are painted by the renderer
    /// from the session, not carried here.
    Profile { title: &'static str },
    Placeholder(PlaceholderPage),
}

/// Fallback content for any view without a dedicated page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceholderPage {
    pub title: String,
    pub message: &'static str,
    pub detail: &'static str,
}

/// Builds the full navigation tree for a role. The "Main" section always
/// leads; roles outside the known set get nothing else. The active flag is
/// recomputed on every call, never cached.
pub fn resolve_navigation(role: &Role, active: &View) -> Vec<NavSection> {
    let mut sections = vec![main_section(active)];
    sections.extend(role_sections(role, active));
    sections
}

/// Resolves a view to its page content. Total over both arguments: unknown
/// views map to a labeled placeholder rather than an error.
pub fn resolve_content(role: &Role, view: &View) -> PageContent {
    match view {
        View::Dashboard => PageContent::Dashboard(composer::compose_dashboard(role)),
        View::Profile => PageContent::Profile { title: "Profile" },
        other => PageContent::Placeholder(PlaceholderPage {
            title: other.label(),
            message: "This page is under development.",
            detail: "We're working hard to bring you this feature. Stay tuned!",
        }),
    }
}

fn item(
    view: View,
    label: &'static str,
    icon: &'static str,
    badge: Option<u32>,
    active: &View,
) -> NavItem {
    let is_active = view == *active;
    NavItem {
        view,
        label,
        icon,
        badge,
        active: is_active,
    }
}

fn main_section(active: &View) -> NavSection {
    NavSection {
        title: "Main",
        items: vec![
            item(View::Dashboard, "Dashboard", "fas fa-home", None, active),
            item(View::Profile, "Profile", "fas fa-user", None, active),
            item(View::Notifications, "Notifications", "fas fa-bell", Some(3), active),
        ],
    }
}

fn role_sections(role: &Role, active: &View) -> Vec<NavSection> {
    match role {
        Role::Student => vec![
            NavSection {
                title: "Opportunities",
                items: vec![
                    item(View::Jobs, "Job Listings", "fas fa-briefcase", None, active),
                    item(View::Applications, "My Applications", "fas fa-file-alt", None, active),
                    item(View::Interviews, "Interviews", "fas fa-calendar-check", None, active),
                ],
            },
            NavSection {
                title: "Development",
                items: vec![
                    item(View::Resume, "Resume Builder", "fas fa-file-user", None, active),
                    item(View::Skills, "Skills Assessment", "fas fa-chart-line", None, active),
                    item(View::Mentorship, "Mentorship", "fas fa-user-tie", None, active),
                ],
            },
        ],
        Role::Admin => vec![
            NavSection {
                title: "Management",
                items: vec![
                    item(View::Users, "User Management", "fas fa-users", None, active),
                    item(View::Companies, "Companies", "fas fa-building", None, active),
                    item(View::JobsAdmin, "Job Management", "fas fa-briefcase", None, active),
                ],
            },
            NavSection {
                title: "Analytics",
                items: vec![
                    item(View::Reports, "Reports", "fas fa-chart-bar", None, active),
                    item(View::Analytics, "Analytics", "fas fa-analytics", None, active),
                    item(View::Settings, "System Settings", "fas fa-cog", None, active),
                ],
            },
        ],
        Role::Mentor => vec![NavSection {
            title: "Mentoring",
            items: vec![
                item(View::Students, "My Students", "fas fa-user-graduate", None, active),
                item(View::Sessions, "Sessions", "fas fa-calendar", None, active),
                item(View::Resources, "Resources", "fas fa-book", None, active),
            ],
        }],
        Role::Recruiter => vec![NavSection {
            title: "Recruitment",
            items: vec![
                item(View::PostJob, "Post Job", "fas fa-plus-circle", None, active),
                item(View::Candidates, "Candidates", "fas fa-users", None, active),
                item(View::RecruiterInterviews, "Interviews", "fas fa-calendar-check", None, active),
            ],
        }],
        Role::Other(_) => vec![],
    }
}
