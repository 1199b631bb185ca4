//! Submit-time form validation.
//!
//! Each validator maps the current draft to a [`FieldErrors`] map. The map
//! is recomputed from scratch on every submit attempt and fully replaces the
//! previous one; errors are never merged across attempts. Required text
//! fields are trimmed before the emptiness check, passwords are checked
//! untrimmed, and optional fields are exempt.
//!
//! The confirm-password rule is a single predicate shared by submit-time
//! validation and the live hint shown while typing: the passwords mismatch
//! iff they are not byte-equal. The live hint is suppressed while the
//! confirm field is still empty, purely to avoid flagging a field the user
//! has not reached yet.

use std::collections::BTreeMap;

use crate::forms::draft::{AlumniDraft, LoginDraft, StudentDraft};

/// Per-field validation messages, keyed by field name.
///
/// A `BTreeMap` keeps iteration order stable for rendering.
pub type FieldErrors = BTreeMap<&'static str, &'static str>;

/// Message for a missing required field.
pub const MSG_REQUIRED: &str = "Required";

/// Message for a confirm-password mismatch.
pub const MSG_MISMATCH: &str = "Passwords do not match";

/// The unified confirm-password predicate.
#[must_use]
pub fn passwords_mismatch(password: &str, confirm: &str) -> bool {
    password != confirm
}

/// Live mismatch hint for the confirm-password field.
///
/// Uses the same predicate as submit-time validation but stays quiet while
/// the confirm field is empty.
#[must_use]
pub fn confirm_hint(password: &str, confirm: &str) -> Option<&'static str> {
    if !confirm.is_empty() && passwords_mismatch(password, confirm) {
        Some(MSG_MISMATCH)
    } else {
        None
    }
}

fn require(errors: &mut FieldErrors, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        errors.insert(field, MSG_REQUIRED);
    }
}

/// Validate the login form: both fields are required.
#[must_use]
pub fn validate_login(draft: &LoginDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();
    require(&mut errors, "identifier", &draft.identifier);
    if draft.password.is_empty() {
        errors.insert("password", MSG_REQUIRED);
    }
    errors
}

/// Validate the student registration form.
#[must_use]
pub fn validate_student(draft: &StudentDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();
    require(&mut errors, "full_name", &draft.full_name);
    require(&mut errors, "username", &draft.username);
    require(&mut errors, "roll_number", &draft.roll_number);
    if draft.branch.is_none() {
        errors.insert("branch", MSG_REQUIRED);
    }
    require(&mut errors, "year", &draft.year);
    require(&mut errors, "email", &draft.email);
    require(&mut errors, "phone", &draft.phone);
    if draft.password.is_empty() {
        errors.insert("password", MSG_REQUIRED);
    }
    if passwords_mismatch(&draft.password, &draft.confirm_password) {
        errors.insert("confirm_password", MSG_MISMATCH);
    }
    errors
}

/// Validate the alumni registration form. `linked_in` is optional.
#[must_use]
pub fn validate_alumni(draft: &AlumniDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();
    require(&mut errors, "full_name", &draft.full_name);
    require(&mut errors, "username", &draft.username);
    require(&mut errors, "year_of_passing", &draft.year_of_passing);
    if draft.branch.is_none() {
        errors.insert("branch", MSG_REQUIRED);
    }
    require(&mut errors, "job_profile", &draft.job_profile);
    require(&mut errors, "company", &draft.company);
    require(&mut errors, "email", &draft.email);
    require(&mut errors, "phone", &draft.phone);
    if draft.password.is_empty() {
        errors.insert("password", MSG_REQUIRED);
    }
    if passwords_mismatch(&draft.password, &draft.confirm_password) {
        errors.insert("confirm_password", MSG_MISMATCH);
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::draft::Branch;

    fn valid_student() -> StudentDraft {
        StudentDraft {
            full_name: "Asha Rao".into(),
            username: "asha".into(),
            roll_number: "2024CS001".into(),
            branch: Some(Branch::Cse),
            year: "2024".into(),
            email: "asha@university.edu".into(),
            phone: "9876543210".into(),
            profile_file: None,
            password: "Secret1!".into(),
            confirm_password: "Secret1!".into(),
        }
    }

    fn valid_alumni() -> AlumniDraft {
        AlumniDraft {
            full_name: "Ravi Kumar".into(),
            username: "ravi".into(),
            year_of_passing: "2019".into(),
            branch: Some(Branch::Ece),
            job_profile: "Backend Engineer".into(),
            company: "Initech".into(),
            linked_in: String::new(),
            email: "ravi@company.com".into(),
            phone: "9123456780".into(),
            password: "Secret1!".into(),
            confirm_password: "Secret1!".into(),
        }
    }

    #[test]
    fn test_valid_student_has_no_errors() {
        assert!(validate_student(&valid_student()).is_empty());
    }

    #[test]
    fn test_valid_alumni_has_no_errors() {
        assert!(validate_alumni(&valid_alumni()).is_empty());
    }

    #[test]
    fn test_missing_roll_number_is_the_only_error() {
        let mut draft = valid_student();
        draft.roll_number = String::new();
        let errors = validate_student(&draft);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("roll_number"), Some(&MSG_REQUIRED));
    }

    #[test]
    fn test_whitespace_only_field_is_missing() {
        let mut draft = valid_student();
        draft.full_name = "   ".into();
        let errors = validate_student(&draft);
        assert_eq!(errors.get("full_name"), Some(&MSG_REQUIRED));
    }

    #[test]
    fn test_missing_branch_reported() {
        let mut draft = valid_alumni();
        draft.branch = None;
        let errors = validate_alumni(&draft);
        assert_eq!(errors.get("branch"), Some(&MSG_REQUIRED));
    }

    #[test]
    fn test_mismatch_reported_even_when_rest_valid() {
        let mut draft = valid_student();
        draft.confirm_password = "different".into();
        let errors = validate_student(&draft);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("confirm_password"), Some(&MSG_MISMATCH));
    }

    #[test]
    fn test_empty_confirm_against_set_password_is_mismatch() {
        let mut draft = valid_alumni();
        draft.confirm_password = String::new();
        let errors = validate_alumni(&draft);
        assert_eq!(errors.get("confirm_password"), Some(&MSG_MISMATCH));
    }

    #[test]
    fn test_linked_in_is_optional() {
        let mut draft = valid_alumni();
        draft.linked_in = String::new();
        assert!(validate_alumni(&draft).is_empty());
        draft.linked_in = "https://linkedin.com/in/ravi".into();
        assert!(validate_alumni(&draft).is_empty());
    }

    #[test]
    fn test_empty_draft_reports_every_required_field() {
        let errors = validate_student(&StudentDraft::default());
        for field in [
            "full_name",
            "username",
            "roll_number",
            "branch",
            "year",
            "email",
            "phone",
            "password",
        ] {
            assert_eq!(errors.get(field), Some(&MSG_REQUIRED), "field {field}");
        }
        // Empty password == empty confirm, so no mismatch entry
        assert!(!errors.contains_key("confirm_password"));
    }

    #[test]
    fn test_revalidation_replaces_previous_errors() {
        let mut draft = valid_login();
        draft.identifier = String::new();
        let first = validate_login(&draft);
        assert!(first.contains_key("identifier"));

        draft.identifier = "asha@university.edu".into();
        let second = validate_login(&draft);
        assert!(second.is_empty());
    }

    fn valid_login() -> LoginDraft {
        LoginDraft {
            identifier: "asha@university.edu".into(),
            password: "x".into(),
        }
    }

    #[test]
    fn test_login_requires_both_fields() {
        let errors = validate_login(&LoginDraft::default());
        assert_eq!(errors.get("identifier"), Some(&MSG_REQUIRED));
        assert_eq!(errors.get("password"), Some(&MSG_REQUIRED));
    }

    #[test]
    fn test_login_password_not_trimmed() {
        let draft = LoginDraft {
            identifier: "asha".into(),
            password: " ".into(),
        };
        // A whitespace password is still a password
        assert!(validate_login(&draft).is_empty());
    }

    #[test]
    fn test_confirm_hint_quiet_while_confirm_empty() {
        assert_eq!(confirm_hint("Secret1!", ""), None);
    }

    #[test]
    fn test_confirm_hint_on_mismatch() {
        assert_eq!(confirm_hint("Secret1!", "Secr"), Some(MSG_MISMATCH));
        assert_eq!(confirm_hint("Secret1!", "Secret1!"), None);
    }
}
