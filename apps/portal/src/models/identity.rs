use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A portal role. The four named variants are the roles the shell knows how
/// to build navigation and dashboards for; any other tag (an old snapshot, a
/// hand-edited state file) is preserved verbatim in `Other` so dispatch on it
/// stays an exhaustive match instead of a silent lookup miss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Student,
    Admin,
    Mentor,
    Recruiter,
    Other(String),
}

impl Role {
    pub const KNOWN: [Role; 4] = [Role::Student, Role::Admin, Role::Mentor, Role::Recruiter];

    /// Lowercase wire tag, as stored in snapshots.
    pub fn as_str(&self) -> &str {
        match self {
            Role::Student => "student",
            Role::Admin => "admin",
            Role::Mentor => "mentor",
            Role::Recruiter => "recruiter",
            Role::Other(tag) => tag,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Role::Other(_))
    }

    /// Title-cased label shown next to the user's name.
    pub fn label(&self) -> &str {
        match self {
            Role::Student => "Student",
            Role::Admin => "Admin",
            Role::Mentor => "Mentor",
            Role::Recruiter => "Recruiter",
            Role::Other(tag) => tag,
        }
    }
}

impl From<String> for Role {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "student" => Role::Student,
            "admin" => Role::Admin,
            "mentor" => Role::Mentor,
            "recruiter" => Role::Recruiter,
            _ => Role::Other(tag),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The signed-in user's profile record. Held for the process lifetime and
/// snapshotted to the key-value store as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub avatar: Option<String>,
    pub joined_at: DateTime<Utc>,
    pub last_login: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trips_known_tags() {
        for role in Role::KNOWN {
            let tag = role.as_str().to_string();
            assert_eq!(Role::from(tag), role);
        }
    }

    #[test]
    fn test_unknown_role_tag_is_preserved() {
        let role = Role::from("superuser".to_string());
        assert_eq!(role, Role::Other("superuser".to_string()));
        assert_eq!(role.as_str(), "superuser");
        assert!(!role.is_known());
    }

    #[test]
    fn test_role_serde_uses_lowercase_tags() {
        let json = serde_json::to_string(&Role::Recruiter).unwrap();
        assert_eq!(json, r#""recruiter""#);
        let back: Role = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Role::Recruiter);
    }

    #[test]
    fn test_identity_snapshot_round_trip() {
        let now = Utc::now();
        let identity = Identity {
            id: Uuid::new_v4(),
            name: "Alex Johnson".to_string(),
            email: "student@demo.com".to_string(),
            role: Role::Student,
            avatar: None,
            joined_at: now,
            last_login: now,
        };
        let raw = serde_json::to_string(&identity).unwrap();
        let back: Identity = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, identity);
    }
}
