//! In-memory auth state, seeded from the session store at startup.
//!
//! The context owns the lifecycle `Hydrating -> {Anonymous, Authenticated}`.
//! Hydration runs synchronously before the UI becomes interactive, so no
//! user-triggered transition can ever observe the `Hydrating` state; the
//! loading flag exists so the route guard can render a neutral placeholder
//! instead of flashing a redirect if that ordering ever changes.
//!
//! All mutations happen on the single UI thread; there is no locking.

use crate::auth::session::{Role, Session};
use crate::auth::store::{SessionStore, StoreError};
use crate::forms::{AlumniDraft, StudentDraft};

/// Lifecycle state of the auth context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    /// Startup window before the store has been consulted.
    Hydrating,
    /// No session in memory or in the store.
    Anonymous,
    /// A session is held in memory and mirrored in the store.
    Authenticated(Session),
}

/// Owner of the current session, exposed to the UI by reference.
#[derive(Debug)]
pub struct AuthContext {
    state: AuthState,
    store: SessionStore,
}

impl AuthContext {
    /// Create a context in the `Hydrating` state.
    ///
    /// Callers must invoke [`AuthContext::hydrate`] before handing the
    /// context to interactive code.
    #[must_use]
    pub fn new(store: SessionStore) -> Self {
        Self {
            state: AuthState::Hydrating,
            store,
        }
    }

    /// Restore any persisted session and settle into `Anonymous` or
    /// `Authenticated`.
    ///
    /// Corruption in the store is recovered internally (the record is
    /// purged and the user presented as anonymous); only genuine I/O
    /// failures surface here.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` when the store cannot be read.
    pub fn hydrate(&mut self) -> Result<(), StoreError> {
        let state = match self.store.load()? {
            Some(session) => {
                log::info!("Session restored for {}", session.user.email);
                AuthState::Authenticated(session)
            }
            None => AuthState::Anonymous,
        };
        self.state = state;
        Ok(())
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> &AuthState {
        &self.state
    }

    /// True only during the startup window before hydration completes.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state == AuthState::Hydrating
    }

    /// Derived flag: a user record and a token are both present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        match &self.state {
            AuthState::Authenticated(session) => !session.token.is_empty(),
            _ => false,
        }
    }

    /// The current session, if authenticated.
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        match &self.state {
            AuthState::Authenticated(session) => Some(session),
            _ => None,
        }
    }

    /// The current role tag, if authenticated.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.session().map(|s| s.role)
    }

    /// Sign in with any credentials.
    ///
    /// No store of truth is consulted; a session is fabricated from the
    /// identifier, persisted, and held in memory. The password is accepted
    /// unread.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the fabricated session cannot be persisted;
    /// in that case the in-memory state is left unchanged.
    pub fn login(&mut self, identifier: &str, _password: &str) -> Result<(), StoreError> {
        let session = Session::from_login(identifier);
        self.store.save(&session)?;
        log::info!("Signed in as {}", session.user.email);
        self.state = AuthState::Authenticated(session);
        Ok(())
    }

    /// Register a student and sign them in.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if persistence fails.
    pub fn register_student(&mut self, draft: &StudentDraft) -> Result<(), StoreError> {
        self.register(&draft.full_name, &draft.email, Role::Student)
    }

    /// Register an alumni and sign them in.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if persistence fails.
    pub fn register_alumni(&mut self, draft: &AlumniDraft) -> Result<(), StoreError> {
        self.register(&draft.full_name, &draft.email, Role::Alumni)
    }

    fn register(&mut self, name: &str, email: &str, role: Role) -> Result<(), StoreError> {
        let session = Session::from_registration(name, email, role);
        self.store.save(&session)?;
        log::info!("Registered {} as {}", session.user.email, role);
        self.state = AuthState::Authenticated(session);
        Ok(())
    }

    /// Sign out: clear the in-memory session and the persisted record.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the persisted record cannot be removed;
    /// the in-memory state is cleared regardless so the UI never shows a
    /// stale session.
    pub fn logout(&mut self) -> Result<(), StoreError> {
        self.state = AuthState::Anonymous;
        self.store.clear()?;
        log::info!("Signed out");
        Ok(())
    }
}
