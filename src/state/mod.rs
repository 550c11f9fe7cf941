//! State Management
//!
//! Global UI state and the authenticated session context.

pub mod global;
pub mod session;

pub use global::{provide_global_state, GlobalState};
pub use session::{provide_session, Session, SessionGate, SessionUser, UserRole};
