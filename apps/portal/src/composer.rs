//! Dashboard composition. Pure lookups over fixed per-role tables; no live
//! data source feeds any of this.

use crate::models::dashboard::{
    ActivityEntry, ActivityKind, DashboardData, QuickAction, Stat, StatTone,
};
use crate::models::identity::Role;
use crate::router::View;

/// Composes the role's dashboard: title, four stat cards, three recent
/// activity entries, and the quick actions. Roles outside the known set fall
/// back to the student table.
pub fn compose_dashboard(role: &Role) -> DashboardData {
    match role {
        Role::Student | Role::Other(_) => student_dashboard(),
        Role::Admin => admin_dashboard(),
        Role::Mentor => mentor_dashboard(),
        Role::Recruiter => recruiter_dashboard(),
    }
}

/// Fixed per-role quick actions; same fallback rule as the dashboard.
pub fn quick_actions(role: &Role) -> Vec<QuickAction> {
    match role {
        Role::Student | Role::Other(_) => vec![
            action("Browse Jobs", "fas fa-search", View::Jobs),
            action("Update Resume", "fas fa-file-user", View::Resume),
            action("View Applications", "fas fa-file-alt", View::Applications),
            action("Schedule Mentoring", "fas fa-user-tie", View::Mentorship),
        ],
        Role::Admin => vec![
            action("Manage Users", "fas fa-users", View::Users),
            action("View Reports", "fas fa-chart-bar", View::Reports),
            action("System Settings", "fas fa-cog", View::Settings),
            action("Company Management", "fas fa-building", View::Companies),
        ],
        Role::Mentor => vec![
            action("View Students", "fas fa-user-graduate", View::Students),
            action("Schedule Session", "fas fa-calendar-plus", View::Sessions),
            action("Share Resources", "fas fa-book", View::Resources),
        ],
        Role::Recruiter => vec![
            action("Post New Job", "fas fa-plus-circle", View::PostJob),
            action("Review Candidates", "fas fa-users", View::Candidates),
            action("Schedule Interviews", "fas fa-calendar-check", View::RecruiterInterviews),
        ],
    }
}

fn action(label: &'static str, icon: &'static str, target: View) -> QuickAction {
    QuickAction {
        label,
        icon,
        target,
    }
}

fn stat(label: &'static str, value: &'static str, icon: &'static str, tone: StatTone) -> Stat {
    Stat {
        label,
        value,
        icon,
        tone,
    }
}

fn activity(kind: ActivityKind, message: &'static str, time: &'static str) -> ActivityEntry {
    ActivityEntry {
        kind,
        message,
        time,
    }
}

fn student_dashboard() -> DashboardData {
    DashboardData {
        title: "Student Dashboard",
        stats: vec![
            stat("Applications Sent", "12", "fas fa-paper-plane", StatTone::Primary),
            stat("Interviews Scheduled", "3", "fas fa-calendar-check", StatTone::Success),
            stat("Job Matches", "28", "fas fa-bullseye", StatTone::Warning),
            stat("Profile Views", "156", "fas fa-eye", StatTone::Info),
        ],
        recent_activity: vec![
            activity(
                ActivityKind::Application,
                "Applied to Software Developer at TechCorp",
                "2 hours ago",
            ),
            activity(
                ActivityKind::Interview,
                "Interview scheduled with DataSoft",
                "1 day ago",
            ),
            activity(
                ActivityKind::Profile,
                "Profile viewed by Google Recruiter",
                "2 days ago",
            ),
        ],
        quick_actions: quick_actions(&Role::Student),
    }
}

fn admin_dashboard() -> DashboardData {
    DashboardData {
        title: "Admin Dashboard",
        stats: vec![
            stat("Total Users", "1,234", "fas fa-users", StatTone::Primary),
            stat("Active Jobs", "89", "fas fa-briefcase", StatTone::Success),
            stat("Companies", "45", "fas fa-building", StatTone::Warning),
            stat("Placements", "156", "fas fa-handshake", StatTone::Info),
        ],
        recent_activity: vec![
            activity(
                ActivityKind::User,
                "New user registration: John Doe",
                "1 hour ago",
            ),
            activity(ActivityKind::Job, "New job posted by TechCorp", "3 hours ago"),
            activity(
                ActivityKind::Company,
                "Company verified: DataSoft Solutions",
                "1 day ago",
            ),
        ],
        quick_actions: quick_actions(&Role::Admin),
    }
}

fn mentor_dashboard() -> DashboardData {
    DashboardData {
        title: "Mentor Dashboard",
        stats: vec![
            stat("Active Students", "24", "fas fa-user-graduate", StatTone::Primary),
            stat("Sessions This Week", "8", "fas fa-calendar", StatTone::Success),
            stat("Success Rate", "92%", "fas fa-chart-line", StatTone::Warning),
            stat("Resources Shared", "45", "fas fa-share", StatTone::Info),
        ],
        recent_activity: vec![
            activity(
                ActivityKind::Session,
                "Completed session with Alice Johnson",
                "2 hours ago",
            ),
            activity(
                ActivityKind::Resource,
                "Shared resume template with 5 students",
                "1 day ago",
            ),
            activity(
                ActivityKind::Feedback,
                "Received 5-star rating from Bob Smith",
                "2 days ago",
            ),
        ],
        quick_actions: quick_actions(&Role::Mentor),
    }
}

fn recruiter_dashboard() -> DashboardData {
    DashboardData {
        title: "Recruiter Dashboard",
        stats: vec![
            stat("Active Jobs", "7", "fas fa-briefcase", StatTone::Primary),
            stat("Applications", "156", "fas fa-file-alt", StatTone::Success),
            stat("Interviews", "23", "fas fa-calendar-check", StatTone::Warning),
            stat("Hires", "8", "fas fa-handshake", StatTone::Info),
        ],
        recent_activity: vec![
            activity(
                ActivityKind::Application,
                "New application for Senior Developer role",
                "1 hour ago",
            ),
            activity(
                ActivityKind::Interview,
                "Interview completed with Sarah Wilson",
                "4 hours ago",
            ),
            activity(ActivityKind::Hire, "Offer accepted by Michael Chen", "1 day ago"),
        ],
        quick_actions: quick_actions(&Role::Recruiter),
    }
}
