//! Controller property tests
//!
//! The spec-level behaviors of the pure controller logic: tier
//! boundaries, surface exclusivity, session-gated initial view,
//! defensive alignment and local validation.

use leafscan_common::{
    align_results, display_name_for, initial_surface, transition, validate, ClassificationResult,
    ConfidenceTier, MemoryStore, NavAction, SessionStore, ViewSurface,
};

/// Token present iff the upload surface is the one shown on load.
#[test]
fn test_initial_surface_matches_session_presence() {
    let store = MemoryStore::default();
    assert_eq!(initial_surface(&store.get()), ViewSurface::Login);

    store.set("jwt-token", "Jane");
    assert_eq!(initial_surface(&store.get()), ViewSurface::Upload);

    store.clear();
    assert_eq!(initial_surface(&store.get()), ViewSurface::Login);
}

/// Every sequence of navigation actions lands on exactly one surface.
#[test]
fn test_every_action_sequence_yields_one_surface() {
    let actions = [
        NavAction::LoginClick,
        NavAction::SignupClick,
        NavAction::LogoutClick,
        NavAction::LoginSuccess,
        NavAction::RegisterAgrovetClick,
        NavAction::RegisterExtensionClick,
    ];

    // Exhaustive pairs stand in for arbitrary sequences: the machine
    // is memoryless, so the last action alone decides the surface.
    for first in actions {
        for second in actions {
            let _ = transition(first);
            let surface = transition(second);
            assert!(ViewSurface::ALL.contains(&surface));
            assert_eq!(surface, transition(second));
        }
    }
}

/// Logout always returns to the login surface.
#[test]
fn test_logout_clears_session_and_returns_to_login() {
    let store = MemoryStore::default();
    store.set("jwt-token", "Jane");

    // App shell behavior: clear first, then apply the transition.
    store.clear();
    let surface = transition(NavAction::LogoutClick);

    assert_eq!(surface, ViewSurface::Login);
    assert!(!store.get().is_authenticated());
    assert_eq!(initial_surface(&store.get()), ViewSurface::Login);
}

/// Confidence tier mapping is exact at the boundaries.
#[test]
fn test_confidence_tier_boundaries() {
    assert_eq!(ConfidenceTier::from_confidence(80.0), ConfidenceTier::Success);
    assert_eq!(ConfidenceTier::from_confidence(79.99), ConfidenceTier::Warning);
    assert_eq!(ConfidenceTier::from_confidence(60.0), ConfidenceTier::Warning);
    assert_eq!(ConfidenceTier::from_confidence(59.99), ConfidenceTier::Danger);
}

/// The end-to-end scenario's tier styling: 85 → success, 45 → danger.
#[test]
fn test_two_result_batch_styling() {
    let results = vec![
        ClassificationResult {
            disease: "Common_Rust".to_string(),
            confidence: 85.0,
        },
        ClassificationResult {
            disease: "Blight".to_string(),
            confidence: 45.0,
        },
    ];
    let pairs = align_results(vec!["one.jpg", "two.jpg"], results);

    assert_eq!(pairs.len(), 2);
    let tiers: Vec<ConfidenceTier> = pairs
        .iter()
        .map(|(_, r)| ConfidenceTier::from_confidence(r.confidence))
        .collect();
    assert_eq!(tiers, vec![ConfidenceTier::Success, ConfidenceTier::Danger]);
}

/// A result-count mismatch never panics and never invents rows.
#[test]
fn test_alignment_is_defensive() {
    let short = align_results(
        vec!["one.jpg", "two.jpg", "three.jpg"],
        vec![ClassificationResult::default()],
    );
    assert_eq!(short.len(), 1);

    let long = align_results(
        vec!["one.jpg"],
        vec![ClassificationResult::default(), ClassificationResult::default()],
    );
    assert_eq!(long.len(), 1);
}

/// Empty selection is rejected before any network contact.
#[test]
fn test_empty_batch_rejected_locally() {
    let err = validate::batch_non_empty(0).unwrap_err();
    assert_eq!(format!("{}", err), "Please select at least one image.");
}

/// Login stores the display name derived from the backend response.
#[test]
fn test_login_stores_derived_display_name() {
    let store = MemoryStore::default();

    let name = display_name_for("Jane", "jane.doe@example.com");
    store.set("jwt-token", &name);
    assert_eq!(store.get().display_name.as_deref(), Some("Jane"));

    let fallback = display_name_for("", "jane.doe@example.com");
    store.set("jwt-token", &fallback);
    assert_eq!(store.get().display_name.as_deref(), Some("jane.doe"));

    assert_eq!(store.get().greeting_name(), "jane.doe");
}
