//! Session State
//!
//! Authenticated-user context provided at the composition root. Components
//! receive the session through the context API; only this module touches
//! the persisted copy in browser local storage.

use leptos::*;

/// Local storage key holding the bearer token
pub const TOKEN_KEY: &str = "token";
/// Local storage key holding the signed-in user as JSON
pub const USER_KEY: &str = "user";

/// The signed-in user, as returned by the login endpoint
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct SessionUser {
    pub id: u32,
    pub name: String,
    pub role: UserRole,
}

/// Role of the signed-in user; drives counterpart wording across the UI
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Patient,
    Doctor,
}

/// Role-specific wording, one table per role
pub struct RoleStrings {
    pub dashboard_subtitle: &'static str,
    pub connections_title: &'static str,
    pub connections_empty: &'static str,
    pub connections_stat: &'static str,
    pub appointments_empty: &'static str,
}

const PATIENT_STRINGS: RoleStrings = RoleStrings {
    dashboard_subtitle: "Your care at a glance",
    connections_title: "Your Doctors",
    connections_empty: "No doctors connected yet",
    connections_stat: "Doctors",
    appointments_empty: "No upcoming appointments. Book one with your doctor.",
};

const DOCTOR_STRINGS: RoleStrings = RoleStrings {
    dashboard_subtitle: "Your patients at a glance",
    connections_title: "Your Patients",
    connections_empty: "No patients connected yet",
    connections_stat: "Patients",
    appointments_empty: "No upcoming appointments scheduled.",
};

impl UserRole {
    /// Lookup table of role-specific wording
    pub fn strings(&self) -> &'static RoleStrings {
        match self {
            UserRole::Patient => &PATIENT_STRINGS,
            UserRole::Doctor => &DOCTOR_STRINGS,
        }
    }
}

/// Session context: bearer token and signed-in user
#[derive(Clone)]
pub struct Session {
    pub token: RwSignal<Option<String>>,
    pub user: RwSignal<Option<SessionUser>>,
}

impl Session {
    /// Store a fresh sign-in and persist it for the next visit
    pub fn sign_in(&self, token: String, user: SessionUser) {
        write_storage(TOKEN_KEY, &token);
        if let Ok(raw) = serde_json::to_string(&user) {
            write_storage(USER_KEY, &raw);
        }
        self.token.set(Some(token));
        self.user.set(Some(user));
    }

    /// Drop the session and its persisted copy
    pub fn sign_out(&self) {
        remove_storage(TOKEN_KEY);
        remove_storage(USER_KEY);
        self.token.set(None);
        self.user.set(None);
    }
}

/// Provide the session to the component tree, restoring any persisted
/// sign-in from local storage
pub fn provide_session() {
    let session = Session {
        token: create_rw_signal(read_storage(TOKEN_KEY)),
        user: create_rw_signal(
            read_storage(USER_KEY).and_then(|raw| serde_json::from_str(&raw).ok()),
        ),
    };

    provide_context(session);
}

/// Outcome of the session gate guarding authenticated views
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionGate {
    /// Show the view
    Proceed,
    /// No token; the user must sign in first
    RedirectToLogin,
}

/// Decide whether an authenticated flow may proceed.
///
/// Only a missing or empty token blocks. Network failures are handled (and
/// logged) by the caller; none of them block navigation.
pub fn session_gate(token: Option<&str>) -> SessionGate {
    match token {
        Some(token) if !token.is_empty() => SessionGate::Proceed,
        _ => SessionGate::RedirectToLogin,
    }
}

fn read_storage(key: &str) -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()
        .flatten()?
        .get_item(key)
        .ok()
        .flatten()
}

fn write_storage(key: &str, value: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(key, value);
        }
    }
}

fn remove_storage(key: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_blocks_only_when_token_missing() {
        assert_eq!(session_gate(None), SessionGate::RedirectToLogin);
        assert_eq!(session_gate(Some("")), SessionGate::RedirectToLogin);
        assert_eq!(session_gate(Some("abc123")), SessionGate::Proceed);
    }

    #[test]
    fn test_role_strings_name_the_counterpart() {
        assert_eq!(UserRole::Patient.strings().connections_title, "Your Doctors");
        assert_eq!(UserRole::Doctor.strings().connections_title, "Your Patients");
        assert!(UserRole::Patient.strings().connections_empty.contains("doctors"));
        assert!(UserRole::Doctor.strings().connections_empty.contains("patients"));
    }

    #[test]
    fn test_role_wire_format_is_lowercase() {
        assert_eq!(serde_json::to_string(&UserRole::Doctor).unwrap(), "\"doctor\"");
        let role: UserRole = serde_json::from_str("\"patient\"").unwrap();
        assert_eq!(role, UserRole::Patient);
    }

    #[test]
    fn test_session_user_round_trips_through_json() {
        let user = SessionUser {
            id: 7,
            name: "Dr. Osei".to_string(),
            role: UserRole::Doctor,
        };
        let raw = serde_json::to_string(&user).unwrap();
        let back: SessionUser = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, user);
    }
}
