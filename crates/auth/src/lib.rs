//! `storefront-auth` — the authentication boundary as seen by the storefront.
//!
//! The storefront never authenticates anyone itself: an external collaborator
//! supplies a session (or nothing), and pages that need one go through the guard.

pub mod guard;
pub mod session;

pub use guard::{AuthError, AuthGuard};
pub use session::{Session, SessionProvider, StaticSession};
