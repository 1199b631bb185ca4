//! Simulated authentication: session record, durable store and the
//! in-memory auth context.
//!
//! There is no backend. Login and registration fabricate a session from
//! whatever the user typed and stamp it with a constant placeholder token;
//! the only real failure mode in this subsystem is the persistence
//! boundary in [`store`].

pub mod context;
pub mod session;
pub mod store;

pub use context::{AuthContext, AuthState};
pub use session::{Role, Session, UserProfile, MOCK_TOKEN};
pub use store::{SessionStore, StoreError};
