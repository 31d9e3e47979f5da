use serde::{Deserialize, Serialize};

use crate::router::View;

/// Everything a role's dashboard shows: four stat cards, three recent
/// activity entries, and the role's quick actions. Composed from fixed
/// tables; there is no live data source behind any of it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardData {
    pub title: &'static str,
    pub stats: Vec<Stat>,
    pub recent_activity: Vec<ActivityEntry>,
    pub quick_actions: Vec<QuickAction>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
    pub icon: &'static str,
    pub tone: StatTone,
}

/// Color tag on a stat card. Presentation decides what it looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatTone {
    Primary,
    Success,
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityEntry {
    pub kind: ActivityKind,
    pub message: &'static str,
    pub time: &'static str,
}

/// What kind of event an activity entry records. Drives the icon choice;
/// unrecognized tags keep their text and get the fallback icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActivityKind {
    Application,
    Interview,
    Profile,
    User,
    Job,
    Company,
    Session,
    Resource,
    Feedback,
    Hire,
    Other(String),
}

impl ActivityKind {
    /// Icon tag for this activity kind. Total: anything unrecognized maps to
    /// the generic circle, never an error.
    pub fn icon(&self) -> &'static str {
        match self {
            ActivityKind::Application => "paper-plane",
            ActivityKind::Interview => "calendar-check",
            ActivityKind::Profile => "eye",
            ActivityKind::User => "user-plus",
            ActivityKind::Job => "briefcase",
            ActivityKind::Company => "building",
            ActivityKind::Session => "calendar",
            ActivityKind::Resource => "share",
            ActivityKind::Feedback => "star",
            ActivityKind::Hire => "handshake",
            ActivityKind::Other(_) => "circle",
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ActivityKind::Application => "application",
            ActivityKind::Interview => "interview",
            ActivityKind::Profile => "profile",
            ActivityKind::User => "user",
            ActivityKind::Job => "job",
            ActivityKind::Company => "company",
            ActivityKind::Session => "session",
            ActivityKind::Resource => "resource",
            ActivityKind::Feedback => "feedback",
            ActivityKind::Hire => "hire",
            ActivityKind::Other(tag) => tag,
        }
    }
}

impl From<String> for ActivityKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "application" => ActivityKind::Application,
            "interview" => ActivityKind::Interview,
            "profile" => ActivityKind::Profile,
            "user" => ActivityKind::User,
            "job" => ActivityKind::Job,
            "company" => ActivityKind::Company,
            "session" => ActivityKind::Session,
            "resource" => ActivityKind::Resource,
            "feedback" => ActivityKind::Feedback,
            "hire" => ActivityKind::Hire,
            _ => ActivityKind::Other(tag),
        }
    }
}

impl From<ActivityKind> for String {
    fn from(kind: ActivityKind) -> Self {
        kind.as_str().to_string()
    }
}

/// A dashboard shortcut button targeting another view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuickAction {
    pub label: &'static str,
    pub icon: &'static str,
    pub target: View,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_icons_for_known_kinds() {
        assert_eq!(ActivityKind::Application.icon(), "paper-plane");
        assert_eq!(ActivityKind::Hire.icon(), "handshake");
        assert_eq!(ActivityKind::Feedback.icon(), "star");
    }

    #[test]
    fn test_unrecognized_activity_kind_gets_circle() {
        let kind = ActivityKind::from("webinar".to_string());
        assert_eq!(kind.icon(), "circle");
        assert_eq!(kind.as_str(), "webinar");
    }

    #[test]
    fn test_activity_kind_tag_round_trip() {
        for tag in [
            "application",
            "interview",
            "profile",
            "user",
            "job",
            "company",
            "session",
            "resource",
            "feedback",
            "hire",
        ] {
            let kind = ActivityKind::from(tag.to_string());
            assert!(!matches!(kind, ActivityKind::Other(_)), "{tag} should be known");
            assert_eq!(kind.as_str(), tag);
        }
    }
}
