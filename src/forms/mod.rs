//! Registration and login form drafts with their validators.
//!
//! A draft is a transient, unpersisted set of field values owned by the
//! form screen editing it. Validators are pure functions from a draft to
//! a map of field-level error messages; submission proceeds only when the
//! map is empty.

pub mod draft;
pub mod validate;

pub use draft::{AlumniDraft, Branch, LoginDraft, StudentDraft};
pub use validate::{
    confirm_hint, passwords_mismatch, validate_alumni, validate_login, validate_student,
    FieldErrors, MSG_MISMATCH, MSG_REQUIRED,
};
