//! Draft data structures for the registration and login forms.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Engineering branch options offered by the registration forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Branch {
    Civil,
    Cse,
    Ece,
    Eee,
    It,
    Mechanical,
}

impl Branch {
    /// All selectable branches, in display order.
    #[must_use]
    pub fn all() -> &'static [Branch] {
        &[
            Self::Civil,
            Self::Cse,
            Self::Ece,
            Self::Eee,
            Self::It,
            Self::Mechanical,
        ]
    }

    /// The branch following `self` in display order, wrapping around.
    #[must_use]
    pub fn next(self) -> Branch {
        let all = Self::all();
        let idx = all.iter().position(|b| *b == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    /// The branch preceding `self` in display order, wrapping around.
    #[must_use]
    pub fn previous(self) -> Branch {
        let all = Self::all();
        let idx = all.iter().position(|b| *b == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Civil => "Civil",
            Self::Cse => "CSE",
            Self::Ece => "ECE",
            Self::Eee => "EEE",
            Self::It => "IT",
            Self::Mechanical => "Mechanical",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Branch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "civil" => Ok(Self::Civil),
            "cse" => Ok(Self::Cse),
            "ece" => Ok(Self::Ece),
            "eee" => Ok(Self::Eee),
            "it" => Ok(Self::It),
            "mechanical" => Ok(Self::Mechanical),
            _ => Err(format!("unknown branch: '{s}'")),
        }
    }
}

/// Login form draft: an email-or-username identifier plus a password.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginDraft {
    pub identifier: String,
    pub password: String,
}

/// Student registration draft.
///
/// `profile_file` is optional; everything else is required by the
/// validator. Discarded on submit or cancel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentDraft {
    pub full_name: String,
    pub username: String,
    pub roll_number: String,
    pub branch: Option<Branch>,
    pub year: String,
    pub email: String,
    pub phone: String,
    pub profile_file: Option<PathBuf>,
    pub password: String,
    pub confirm_password: String,
}

/// Alumni registration draft.
///
/// `linked_in` is optional; everything else is required by the validator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlumniDraft {
    pub full_name: String,
    pub username: String,
    pub year_of_passing: String,
    pub branch: Option<Branch>,
    pub job_profile: String,
    pub company: String,
    pub linked_in: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}
