//! The session record mirrored between memory and the durable store.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Placeholder token attached to every fabricated session.
///
/// This is a constant literal, not a verifiable credential; nothing ever
/// validates or expires it.
pub const MOCK_TOKEN: &str = "mock-jwt-token";

/// Role tag attached to a session. Used only for cosmetic UI branching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Alumni,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Student => write!(f, "student"),
            Self::Alumni => write!(f, "alumni"),
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "student" => Ok(Self::Student),
            "alumni" => Ok(Self::Alumni),
            _ => Err(format!("unknown role: '{s}'")),
        }
    }
}

/// The signed-in user's identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
}

/// A logically "logged in" user.
///
/// Serialized as a single JSON object with exactly these fields; there is
/// no version field, and a parseable-but-tampered record is accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: UserProfile,
    pub role: Role,
    pub token: String,
}

impl Session {
    /// Fabricate a session for a login attempt.
    ///
    /// The display name is the identifier up to the first '@'; the role
    /// defaults to student. No credential check happens anywhere.
    #[must_use]
    pub fn from_login(identifier: &str) -> Self {
        let name = identifier
            .split('@')
            .next()
            .unwrap_or(identifier)
            .to_string();
        Self {
            user: UserProfile {
                name,
                email: identifier.to_string(),
            },
            role: Role::Student,
            token: MOCK_TOKEN.to_string(),
        }
    }

    /// Fabricate a role-tagged session for a registration.
    #[must_use]
    pub fn from_registration(name: &str, email: &str, role: Role) -> Self {
        Self {
            user: UserProfile {
                name: name.to_string(),
                email: email.to_string(),
            },
            role,
            token: MOCK_TOKEN.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_login_splits_name_at_at_sign() {
        let session = Session::from_login("a@b.edu");
        assert_eq!(session.user.name, "a");
        assert_eq!(session.user.email, "a@b.edu");
        assert_eq!(session.role, Role::Student);
        assert_eq!(session.token, MOCK_TOKEN);
    }

    #[test]
    fn test_from_login_plain_username() {
        let session = Session::from_login("asha");
        assert_eq!(session.user.name, "asha");
        assert_eq!(session.user.email, "asha");
    }

    #[test]
    fn test_from_registration_keeps_role() {
        let session = Session::from_registration("Ravi Kumar", "ravi@company.com", Role::Alumni);
        assert_eq!(session.user.name, "Ravi Kumar");
        assert_eq!(session.role, Role::Alumni);
        assert_eq!(session.token, MOCK_TOKEN);
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_string(&Role::Alumni).unwrap();
        assert_eq!(json, "\"alumni\"");
        let back: Role = serde_json::from_str("\"student\"").unwrap();
        assert_eq!(back, Role::Student);
    }

    #[test]
    fn test_session_wire_shape() {
        let session = Session::from_login("a@b.edu");
        let json = serde_json::to_string(&session).unwrap();
        assert!(json.contains("\"user\""));
        assert!(json.contains("\"role\":\"student\""));
        assert!(json.contains("\"token\":\"mock-jwt-token\""));
    }

    #[test]
    fn test_role_round_trip_display_parse() {
        for role in [Role::Student, Role::Alumni] {
            assert_eq!(role.to_string().parse::<Role>().unwrap(), role);
        }
    }
}
