//! View surface state machine
//!
//! Exactly one surface is visible at a time; the machine is a pure
//! function from navigation action to next surface, so exclusivity
//! holds by construction. Session clearing on logout is the caller's
//! job, as is kicking off the county-catalog fetch when a
//! registration surface is entered.

use crate::session::Session;

/// Mutually-exclusive top-level UI regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewSurface {
    Login,
    Signup,
    Upload,
    RegisterAgrovet,
    RegisterExtensionWorker,
}

impl ViewSurface {
    pub const ALL: [ViewSurface; 5] = [
        ViewSurface::Login,
        ViewSurface::Signup,
        ViewSurface::Upload,
        ViewSurface::RegisterAgrovet,
        ViewSurface::RegisterExtensionWorker,
    ];
}

/// Navigation and session events that move the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    LoginClick,
    SignupClick,
    /// Caller clears the session first, then applies the transition.
    LogoutClick,
    LoginSuccess,
    RegisterAgrovetClick,
    RegisterExtensionClick,
}

/// Surface shown on load.
pub fn initial_surface(session: &Session) -> ViewSurface {
    if session.is_authenticated() {
        ViewSurface::Upload
    } else {
        ViewSurface::Login
    }
}

/// Next surface for a navigation action. Every action fully
/// determines its target; the previous surface never matters.
pub fn transition(action: NavAction) -> ViewSurface {
    match action {
        NavAction::LoginClick | NavAction::LogoutClick => ViewSurface::Login,
        NavAction::SignupClick => ViewSurface::Signup,
        NavAction::LoginSuccess => ViewSurface::Upload,
        NavAction::RegisterAgrovetClick => ViewSurface::RegisterAgrovet,
        NavAction::RegisterExtensionClick => ViewSurface::RegisterExtensionWorker,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_surface_tracks_token_presence() {
        assert_eq!(initial_surface(&Session::anonymous()), ViewSurface::Login);

        let session = Session {
            token: Some("jwt".to_string()),
            display_name: None,
        };
        assert_eq!(initial_surface(&session), ViewSurface::Upload);
    }

    #[test]
    fn test_transition_targets() {
        assert_eq!(transition(NavAction::LoginClick), ViewSurface::Login);
        assert_eq!(transition(NavAction::SignupClick), ViewSurface::Signup);
        assert_eq!(transition(NavAction::LogoutClick), ViewSurface::Login);
        assert_eq!(transition(NavAction::LoginSuccess), ViewSurface::Upload);
        assert_eq!(
            transition(NavAction::RegisterAgrovetClick),
            ViewSurface::RegisterAgrovet
        );
        assert_eq!(
            transition(NavAction::RegisterExtensionClick),
            ViewSurface::RegisterExtensionWorker
        );
    }

    #[test]
    fn test_all_lists_every_surface() {
        for action in [
            NavAction::LoginClick,
            NavAction::SignupClick,
            NavAction::LogoutClick,
            NavAction::LoginSuccess,
            NavAction::RegisterAgrovetClick,
            NavAction::RegisterExtensionClick,
        ] {
            assert!(ViewSurface::ALL.contains(&transition(action)));
        }
    }
}
