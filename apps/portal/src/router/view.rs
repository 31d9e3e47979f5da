use serde::{Deserialize, Serialize};

/// Every page the navigation tree can point at, plus a preserved fallback
/// for ids this build does not recognize. Parsing is total; an unknown id
/// lands in `Other` and resolves to placeholder content downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum View {
    Dashboard,
    Profile,
    Notifications,
    Jobs,
    Applications,
    Interviews,
    Resume,
    Skills,
    Mentorship,
    Users,
    Companies,
    JobsAdmin,
    Reports,
    Analytics,
    Settings,
    Students,
    Sessions,
    Resources,
    PostJob,
    Candidates,
    RecruiterInterviews,
    Other(String),
}

impl View {
    /// Wire id, as it appears in navigation targets.
    pub fn id(&self) -> &str {
        match self {
            View::Dashboard => "dashboard",
            View::Profile => "profile",
            View::Notifications => "notifications",
            View::Jobs => "jobs",
            View::Applications => "applications",
            View::Interviews => "interviews",
            View::Resume => "resume",
            View::Skills => "skills",
            View::Mentorship => "mentorship",
            View::Users => "users",
            View::Companies => "companies",
            View::JobsAdmin => "jobs-admin",
            View::Reports => "reports",
            View::Analytics => "analytics",
            View::Settings => "settings",
            View::Students => "students",
            View::Sessions => "sessions",
            View::Resources => "resources",
            View::PostJob => "post-job",
            View::Candidates => "candidates",
            View::RecruiterInterviews => "interviews-rec",
            View::Other(id) => id,
        }
    }

    /// Display label used for breadcrumbs and placeholder headings.
    /// Unrecognized ids are shown capitalized, as-is.
    pub fn label(&self) -> String {
        match self {
            View::Dashboard => "Dashboard".to_string(),
            View::Profile => "Profile".to_string(),
            View::Notifications => "Notifications".to_string(),
            View::Jobs => "Job Listings".to_string(),
            View::Applications => "My Applications".to_string(),
            View::Interviews => "Interviews".to_string(),
            View::Resume => "Resume Builder".to_string(),
            View::Skills => "Skills Assessment".to_string(),
            View::Mentorship => "Mentorship".to_string(),
            View::Users => "User Management".to_string(),
            View::Companies => "Companies".to_string(),
            View::JobsAdmin => "Job Management".to_string(),
            View::Reports => "Reports".to_string(),
            View::Analytics => "Analytics".to_string(),
            View::Settings => "System Settings".to_string(),
            View::Students => "My Students".to_string(),
            View::Sessions => "Sessions".to_string(),
            View::Resources => "Resources".to_string(),
            View::PostJob => "Post Job".to_string(),
            View::Candidates => "Candidates".to_string(),
            View::RecruiterInterviews => "Interviews".to_string(),
            View::Other(id) => capitalize(id),
        }
    }

    pub fn parse(id: &str) -> View {
        View::from(id.to_string())
    }
}

impl From<String> for View {
    fn from(id: String) -> Self {
        match id.as_str() {
            "dashboard" => View::Dashboard,
            "profile" => View::Profile,
            "notifications" => View::Notifications,
            "jobs" => View::Jobs,
            "applications" => View::Applications,
            "interviews" => View::Interviews,
            "resume" => View::Resume,
            "skills" => View::Skills,
            "mentorship" => View::Mentorship,
            "users" => View::Users,
            "companies" => View::Companies,
            "jobs-admin" => View::JobsAdmin,
            "reports" => View::Reports,
            "analytics" => View::Analytics,
            "settings" => View::Settings,
            "students" => View::Students,
            "sessions" => View::Sessions,
            "resources" => View::Resources,
            "post-job" => View::PostJob,
            "candidates" => View::Candidates,
            "interviews-rec" => View::RecruiterInterviews,
            _ => View::Other(id),
        }
    }
}

impl From<View> for String {
    fn from(view: View) -> Self {
        view.id().to_string()
    }
}

fn capitalize(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// The currently selected page within the shell, plus its breadcrumb label.
/// Updated on every navigation action; the initial state is the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    active: View,
    breadcrumb: String,
}

impl ViewState {
    pub fn new() -> Self {
        Self::entered(View::Dashboard)
    }

    fn entered(view: View) -> Self {
        let breadcrumb = view.label();
        ViewState {
            active: view,
            breadcrumb,
        }
    }

    pub fn navigate(&mut self, view: View) {
        *self = Self::entered(view);
    }

    pub fn active(&self) -> &View {
        &self.active
    }

    pub fn breadcrumb(&self) -> &str {
        &self.breadcrumb
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KNOWN_IDS: &[&str] = &[
        "dashboard",
        "profile",
        "notifications",
        "jobs",
        "applications",
        "interviews",
        "resume",
        "skills",
        "mentorship",
        "users",
        "companies",
        "jobs-admin",
        "reports",
        "analytics",
        "settings",
        "students",
        "sessions",
        "resources",
        "post-job",
        "candidates",
        "interviews-rec",
    ];

    #[test]
    fn test_known_ids_round_trip() {
        for id in KNOWN_IDS {
            let view = View::parse(id);
            assert!(!matches!(view, View::Other(_)), "{id} should be a known view");
            assert_eq!(view.id(), *id);
        }
    }

    #[test]
    fn test_unknown_id_is_preserved() {
        let view = View::parse("totally-unknown-id");
        assert_eq!(view, View::Other("totally-unknown-id".to_string()));
        assert_eq!(view.id(), "totally-unknown-id");
    }

    #[test]
    fn test_unknown_label_is_capitalized_id() {
        assert_eq!(
            View::parse("totally-unknown-id").label(),
            "Totally-unknown-id"
        );
    }

    #[test]
    fn test_known_labels_come_from_the_name_table() {
        assert_eq!(View::Jobs.label(), "Job Listings");
        assert_eq!(View::JobsAdmin.label(), "Job Management");
        assert_eq!(View::RecruiterInterviews.label(), "Interviews");
    }

    #[test]
    fn test_view_state_starts_on_dashboard() {
        let state = ViewState::new();
        assert_eq!(*state.active(), View::Dashboard);
        assert_eq!(state.breadcrumb(), "Dashboard");
    }

    #[test]
    fn test_navigate_updates_active_and_breadcrumb() {
        let mut state = ViewState::new();
        state.navigate(View::Skills);
        assert_eq!(*state.active(), View::Skills);
        assert_eq!(state.breadcrumb(), "Skills Assessment");

        state.navigate(View::parse("payroll"));
        assert_eq!(state.breadcrumb(), "Payroll");
    }
}
