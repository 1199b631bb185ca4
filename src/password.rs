//! Heuristic password strength scoring.
//!
//! Scores a candidate password into a discrete strength label for live
//! feedback while the user types. This is advisory UI feedback only and
//! must never be treated as a security control.

/// Strength descriptor for a candidate password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strength {
    /// Display label: "", "Weak", "Medium" or "Strong".
    pub label: &'static str,
    /// Discrete level 0-3, usable for color mapping.
    pub level: u8,
}

impl Strength {
    /// The empty-password descriptor.
    pub const NONE: Strength = Strength {
        label: "",
        level: 0,
    };
}

/// Score a password into a [`Strength`].
///
/// One point each for: length >= 8, length >= 12, mixed case, a digit,
/// and a non-alphanumeric character. Score <= 2 is Weak, <= 4 Medium,
/// 5 Strong. The empty password maps to level 0 with an empty label.
#[must_use]
pub fn strength(password: &str) -> Strength {
    if password.is_empty() {
        return Strength::NONE;
    }

    let len = password.chars().count();
    let mut score = 0u8;
    if len >= 8 {
        score += 1;
    }
    if len >= 12 {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
    {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 1;
    }

    match score {
        0..=2 => Strength {
            label: "Weak",
            level: 1,
        },
        3..=4 => Strength {
            label: "Medium",
            level: 2,
        },
        _ => Strength {
            label: "Strong",
            level: 3,
        },
    }
}
