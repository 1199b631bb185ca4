//! TUI application state management.
//!
//! # Overview
//!
//! The `App` struct is the central state container for the TUI:
//! - Current route (which screen is displayed)
//! - Auth context and form drafts
//! - Focus position and validation errors for the active form
//!
//! # Architecture
//!
//! State lives on the main thread only (terminal operations are not
//! thread-safe) and follows a unidirectional flow: key events are
//! translated to [`Action`]s by [`App::action_for_key`], actions mutate
//! the app through [`App::handle_action`], and the UI renders from the
//! resulting state. Navigation always passes through the route guard, so
//! a guarded screen cannot be reached by any action while anonymous.

use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::auth::AuthContext;
use crate::forms::{
    validate_alumni, validate_login, validate_student, AlumniDraft, Branch, FieldErrors,
    LoginDraft, StudentDraft,
};
use crate::routes::{guard, GuardDecision, Route};
use crate::tui::theme::Theme;

/// Field order for the login form.
const LOGIN_FIELDS: &[&str] = &["identifier", "password"];

/// Field order for the student registration form.
const STUDENT_FIELDS: &[&str] = &[
    "full_name",
    "username",
    "roll_number",
    "branch",
    "year",
    "email",
    "phone",
    "profile_file",
    "password",
    "confirm_password",
];

/// Field order for the alumni registration form.
const ALUMNI_FIELDS: &[&str] = &[
    "full_name",
    "username",
    "year_of_passing",
    "branch",
    "job_profile",
    "company",
    "linked_in",
    "email",
    "phone",
    "password",
    "confirm_password",
];

/// User action triggered by keyboard input.
///
/// Actions are the result of key event processing and represent user
/// intentions that modify application state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Type a character into the focused field
    Insert(char),
    /// Delete the character before the cursor
    Backspace,
    /// Move focus to the next form field
    NextField,
    /// Move focus to the previous form field
    PrevField,
    /// Cycle the focused choice field forward
    CycleNext,
    /// Cycle the focused choice field backward
    CyclePrev,
    /// Submit the active form
    Submit,
    /// Leave the current screen for the landing page
    Back,
    /// Navigate to a route (subject to the guard)
    Navigate(Route),
    /// Sign out and return to the landing page
    Logout,
    /// Dismiss the error overlay
    Dismiss,
    /// Ctrl+C: quit and report interruption
    Interrupt,
    /// Quit the application
    Quit,
}

/// Central TUI state container.
#[derive(Debug)]
pub struct App {
    route: Route,
    auth: AuthContext,
    login: LoginDraft,
    student: StudentDraft,
    alumni: AlumniDraft,
    /// Text buffer for the optional profile picture path on the student
    /// form; synced into the draft at submit time.
    profile_file_input: String,
    errors: FieldErrors,
    focus: usize,
    theme: Theme,
    error_message: Option<String>,
    quitting: bool,
    interrupted: bool,
}

impl App {
    /// Create the app on the landing screen.
    ///
    /// `auth` should already be hydrated; the guard renders a placeholder
    /// rather than redirecting if it is not.
    #[must_use]
    pub fn new(auth: AuthContext, theme: Theme) -> Self {
        Self {
            route: Route::Landing,
            auth,
            login: LoginDraft::default(),
            student: StudentDraft::default(),
            alumni: AlumniDraft::default(),
            profile_file_input: String::new(),
            errors: FieldErrors::new(),
            focus: 0,
            theme,
            error_message: None,
            quitting: false,
            interrupted: false,
        }
    }

    /// Current route.
    #[must_use]
    pub fn route(&self) -> Route {
        self.route
    }

    /// The auth context backing this app.
    #[must_use]
    pub fn auth(&self) -> &AuthContext {
        &self.auth
    }

    /// Active color palette.
    #[must_use]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Current validation errors for the active form.
    #[must_use]
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Fatal-overlay message, if any.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Whether the main loop should exit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.quitting
    }

    /// Whether exit was triggered by Ctrl+C.
    #[must_use]
    pub fn was_interrupted(&self) -> bool {
        self.interrupted
    }

    /// Field order for the active form; empty on non-form screens.
    #[must_use]
    pub fn fields(&self) -> &'static [&'static str] {
        match self.route {
            Route::Login => LOGIN_FIELDS,
            Route::SignupStudent => STUDENT_FIELDS,
            Route::SignupAlumni => ALUMNI_FIELDS,
            _ => &[],
        }
    }

    /// Index of the focused field.
    #[must_use]
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Name of the focused field, if on a form.
    #[must_use]
    pub fn focused_field(&self) -> Option<&'static str> {
        self.fields().get(self.focus).copied()
    }

    /// Login draft, for rendering.
    #[must_use]
    pub fn login_draft(&self) -> &LoginDraft {
        &self.login
    }

    /// Student draft, for rendering.
    #[must_use]
    pub fn student_draft(&self) -> &StudentDraft {
        &self.student
    }

    /// Alumni draft, for rendering.
    #[must_use]
    pub fn alumni_draft(&self) -> &AlumniDraft {
        &self.alumni
    }

    /// Display value of a field on the active form.
    #[must_use]
    pub fn field_value(&self, field: &str) -> String {
        if field == "branch" {
            return self
                .branch_for_route()
                .map(|b| b.to_string())
                .unwrap_or_default();
        }
        if field == "profile_file" {
            return self.profile_file_input.clone();
        }
        self.text_field(field).cloned().unwrap_or_default()
    }

    /// Password of the active form, for the live strength indicator.
    #[must_use]
    pub fn active_password(&self) -> &str {
        match self.route {
            Route::SignupStudent => &self.student.password,
            Route::SignupAlumni => &self.alumni.password,
            _ => "",
        }
    }

    /// Confirm-password of the active form, for the live mismatch hint.
    #[must_use]
    pub fn active_confirm_password(&self) -> &str {
        match self.route {
            Route::SignupStudent => &self.student.confirm_password,
            Route::SignupAlumni => &self.alumni.confirm_password,
            _ => "",
        }
    }

    /// Translate a key press into an action for the current screen.
    #[must_use]
    pub fn action_for_key(&self, key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Interrupt);
        }

        // The error overlay swallows input until dismissed
        if self.error_message.is_some() {
            return match key.code {
                KeyCode::Esc | KeyCode::Enter => Some(Action::Dismiss),
                _ => None,
            };
        }

        match self.route {
            Route::Landing => match key.code {
                KeyCode::Char('l' | 'L') => Some(Action::Navigate(Route::Login)),
                KeyCode::Char('s' | 'S') => Some(Action::Navigate(Route::SignupStudent)),
                KeyCode::Char('a' | 'A') => Some(Action::Navigate(Route::SignupAlumni)),
                KeyCode::Char('d' | 'D') => Some(Action::Navigate(Route::Dashboard)),
                KeyCode::Char('q' | 'Q') | KeyCode::Esc => Some(Action::Quit),
                _ => None,
            },
            Route::Dashboard => match key.code {
                KeyCode::Char('o' | 'O') => Some(Action::Logout),
                KeyCode::Char('q' | 'Q') | KeyCode::Esc => Some(Action::Quit),
                _ => None,
            },
            Route::NotFound => match key.code {
                KeyCode::Enter | KeyCode::Char('h' | 'H') => Some(Action::Navigate(Route::Landing)),
                KeyCode::Char('q' | 'Q') | KeyCode::Esc => Some(Action::Quit),
                _ => None,
            },
            Route::Login | Route::SignupStudent | Route::SignupAlumni => {
                let on_branch = self.focused_field() == Some("branch");
                match key.code {
                    KeyCode::Esc => Some(Action::Back),
                    KeyCode::Enter => Some(Action::Submit),
                    KeyCode::Tab | KeyCode::Down => Some(Action::NextField),
                    KeyCode::BackTab | KeyCode::Up => Some(Action::PrevField),
                    KeyCode::Left if on_branch => Some(Action::CyclePrev),
                    KeyCode::Right if on_branch => Some(Action::CycleNext),
                    KeyCode::Char(' ') if on_branch => Some(Action::CycleNext),
                    KeyCode::Char(c) => Some(Action::Insert(c)),
                    KeyCode::Backspace => Some(Action::Backspace),
                    _ => None,
                }
            }
        }
    }

    /// Apply an action to the state.
    ///
    /// Returns `true` if the action changed anything.
    pub fn handle_action(&mut self, action: Action) -> bool {
        match action {
            Action::Insert(c) => {
                if let Some(buf) = self.focused_text_mut() {
                    buf.push(c);
                    true
                } else {
                    false
                }
            }
            Action::Backspace => {
                if let Some(buf) = self.focused_text_mut() {
                    buf.pop().is_some()
                } else {
                    false
                }
            }
            Action::NextField => self.move_focus(1),
            Action::PrevField => self.move_focus(-1),
            Action::CycleNext => self.cycle_branch(true),
            Action::CyclePrev => self.cycle_branch(false),
            Action::Submit => {
                self.submit();
                true
            }
            Action::Back => {
                self.navigate(Route::Landing);
                true
            }
            Action::Navigate(route) => {
                self.navigate(route);
                true
            }
            Action::Logout => {
                if let Err(e) = self.auth.logout() {
                    self.error_message = Some(format!("Failed to clear session: {e}"));
                }
                self.navigate(Route::Landing);
                true
            }
            Action::Dismiss => self.error_message.take().is_some(),
            Action::Interrupt => {
                self.interrupted = true;
                self.quitting = true;
                true
            }
            Action::Quit => {
                self.quitting = true;
                true
            }
        }
    }

    /// Navigate to `route`, honoring the guard.
    ///
    /// Redirects are followed immediately; entering any form screen
    /// resets its draft, errors and focus so abandoned input never leaks
    /// into a later visit.
    pub fn navigate(&mut self, route: Route) {
        let target = match guard(route, &self.auth) {
            GuardDecision::Allow | GuardDecision::Pending => route,
            GuardDecision::Redirect(to) => {
                log::debug!("Guard redirected {} -> {}", route.path(), to.path());
                to
            }
        };

        self.errors.clear();
        self.focus = 0;
        match target {
            Route::Login => self.login = LoginDraft::default(),
            Route::SignupStudent => {
                self.student = StudentDraft::default();
                self.profile_file_input.clear();
            }
            Route::SignupAlumni => self.alumni = AlumniDraft::default(),
            _ => {}
        }

        log::debug!("Navigated to {}", target.path());
        self.route = target;
    }

    /// Validate the active form and, on success, run the auth transition
    /// and move to the dashboard.
    ///
    /// On validation failure the error map fully replaces the previous
    /// one and auth state is untouched.
    fn submit(&mut self) {
        match self.route {
            Route::Login => {
                self.errors = validate_login(&self.login);
                if self.errors.is_empty() {
                    let (identifier, password) =
                        (self.login.identifier.clone(), self.login.password.clone());
                    match self.auth.login(&identifier, &password) {
                        Ok(()) => self.navigate(Route::Dashboard),
                        Err(e) => {
                            self.error_message = Some(format!("Failed to save session: {e}"));
                        }
                    }
                }
            }
            Route::SignupStudent => {
                let trimmed = self.profile_file_input.trim();
                self.student.profile_file = (!trimmed.is_empty()).then(|| PathBuf::from(trimmed));
                self.errors = validate_student(&self.student);
                if self.errors.is_empty() {
                    let draft = self.student.clone();
                    match self.auth.register_student(&draft) {
                        Ok(()) => self.navigate(Route::Dashboard),
                        Err(e) => {
                            self.error_message = Some(format!("Failed to save session: {e}"));
                        }
                    }
                }
            }
            Route::SignupAlumni => {
                self.errors = validate_alumni(&self.alumni);
                if self.errors.is_empty() {
                    let draft = self.alumni.clone();
                    match self.auth.register_alumni(&draft) {
                        Ok(()) => self.navigate(Route::Dashboard),
                        Err(e) => {
                            self.error_message = Some(format!("Failed to save session: {e}"));
                        }
                    }
                }
            }
            _ => {}
        }
    }

    fn move_focus(&mut self, delta: isize) -> bool {
        let len = self.fields().len();
        if len == 0 {
            return false;
        }
        let len = len as isize;
        self.focus = ((self.focus as isize + delta + len) % len) as usize;
        true
    }

    fn cycle_branch(&mut self, forward: bool) -> bool {
        if self.focused_field() != Some("branch") {
            return false;
        }
        let current = self.branch_for_route();
        let next = match (current, forward) {
            (None, true) => Some(Branch::all()[0]),
            (None, false) => Branch::all().last().copied(),
            (Some(b), true) => Some(b.next()),
            (Some(b), false) => Some(b.previous()),
        };
        match self.route {
            Route::SignupStudent => self.student.branch = next,
            Route::SignupAlumni => self.alumni.branch = next,
            _ => return false,
        }
        true
    }

    fn branch_for_route(&self) -> Option<Branch> {
        match self.route {
            Route::SignupStudent => self.student.branch,
            Route::SignupAlumni => self.alumni.branch,
            _ => None,
        }
    }

    fn text_field(&self, field: &str) -> Option<&String> {
        match (self.route, field) {
            (Route::Login, "identifier") => Some(&self.login.identifier),
            (Route::Login, "password") => Some(&self.login.password),
            (Route::SignupStudent, "full_name") => Some(&self.student.full_name),
            (Route::SignupStudent, "username") => Some(&self.student.username),
            (Route::SignupStudent, "roll_number") => Some(&self.student.roll_number),
            (Route::SignupStudent, "year") => Some(&self.student.year),
            (Route::SignupStudent, "email") => Some(&self.student.email),
            (Route::SignupStudent, "phone") => Some(&self.student.phone),
            (Route::SignupStudent, "password") => Some(&self.student.password),
            (Route::SignupStudent, "confirm_password") => Some(&self.student.confirm_password),
            (Route::SignupAlumni, "full_name") => Some(&self.alumni.full_name),
            (Route::SignupAlumni, "username") => Some(&self.alumni.username),
            (Route::SignupAlumni, "year_of_passing") => Some(&self.alumni.year_of_passing),
            (Route::SignupAlumni, "job_profile") => Some(&self.alumni.job_profile),
            (Route::SignupAlumni, "company") => Some(&self.alumni.company),
            (Route::SignupAlumni, "linked_in") => Some(&self.alumni.linked_in),
            (Route::SignupAlumni, "email") => Some(&self.alumni.email),
            (Route::SignupAlumni, "phone") => Some(&self.alumni.phone),
            (Route::SignupAlumni, "password") => Some(&self.alumni.password),
            (Route::SignupAlumni, "confirm_password") => Some(&self.alumni.confirm_password),
            _ => None,
        }
    }

    fn focused_text_mut(&mut self) -> Option<&mut String> {
        let field = self.focused_field()?;
        match (self.route, field) {
            (Route::Login, "identifier") => Some(&mut self.login.identifier),
            (Route::Login, "password") => Some(&mut self.login.password),
            (Route::SignupStudent, "full_name") => Some(&mut self.student.full_name),
            (Route::SignupStudent, "username") => Some(&mut self.student.username),
            (Route::SignupStudent, "roll_number") => Some(&mut self.student.roll_number),
            (Route::SignupStudent, "year") => Some(&mut self.student.year),
            (Route::SignupStudent, "email") => Some(&mut self.student.email),
            (Route::SignupStudent, "phone") => Some(&mut self.student.phone),
            (Route::SignupStudent, "profile_file") => Some(&mut self.profile_file_input),
            (Route::SignupStudent, "password") => Some(&mut self.student.password),
            (Route::SignupStudent, "confirm_password") => Some(&mut self.student.confirm_password),
            (Route::SignupAlumni, "full_name") => Some(&mut self.alumni.full_name),
            (Route::SignupAlumni, "username") => Some(&mut self.alumni.username),
            (Route::SignupAlumni, "year_of_passing") => Some(&mut self.alumni.year_of_passing),
            (Route::SignupAlumni, "job_profile") => Some(&mut self.alumni.job_profile),
            (Route::SignupAlumni, "company") => Some(&mut self.alumni.company),
            (Route::SignupAlumni, "linked_in") => Some(&mut self.alumni.linked_in),
            (Route::SignupAlumni, "email") => Some(&mut self.alumni.email),
            (Route::SignupAlumni, "phone") => Some(&mut self.alumni.phone),
            (Route::SignupAlumni, "password") => Some(&mut self.alumni.password),
            (Route::SignupAlumni, "confirm_password") => Some(&mut self.alumni.confirm_password),
            _ => None,
        }
    }
}
