use super::*;

fn session(has_token: bool, roles: &[&str]) -> SessionSnapshot {
    SessionSnapshot { has_token, role_names: roles.iter().map(|r| (*r).to_owned()).collect() }
}

// =============================================================
// AuthPolicy
// =============================================================

#[test]
fn auth_policy_denies_without_token_to_default_login() {
    let decision = AuthPolicy::default().evaluate(&session(false, &["admin"]));
    assert_eq!(decision, GuardDecision::Denied { redirect: "/login".to_owned() });
}

#[test]
fn auth_policy_denies_without_token_to_configured_target() {
    let decision = AuthPolicy::new("/signin").evaluate(&session(false, &[]));
    assert_eq!(decision.redirect(), Some("/signin"));
    assert!(!decision.is_granted());
}

#[test]
fn auth_policy_grants_with_token_regardless_of_roles() {
    assert!(AuthPolicy::default().evaluate(&session(true, &[])).is_granted());
    assert!(AuthPolicy::default().evaluate(&session(true, &["viewer"])).is_granted());
}

#[test]
fn auth_policy_denies_every_tokenless_session() {
    let policy = AuthPolicy::new("/login");
    for roles in [&[][..], &["admin"][..], &["a", "b", "c"][..]] {
        assert_eq!(policy.evaluate(&session(false, roles)).redirect(), Some("/login"));
    }
}

// =============================================================
// RolePolicy
// =============================================================

#[test]
fn role_policy_grants_on_single_match() {
    let policy = RolePolicy::permitting(["admin", "owner"]);
    assert!(policy.evaluate(&session(true, &["viewer", "owner"])).is_granted());
}

#[test]
fn role_policy_denies_disjoint_roles_to_fallback() {
    let policy = RolePolicy::permitting(["admin"]);
    let decision = policy.evaluate(&session(true, &["viewer", "analyst"]));
    assert_eq!(decision, GuardDecision::Denied { redirect: "/unauthorized".to_owned() });
}

#[test]
fn role_policy_denies_user_without_roles() {
    let policy = RolePolicy::permitting(["admin"]);
    assert!(!policy.evaluate(&session(true, &[])).is_granted());
}

#[test]
fn role_policy_with_empty_permitted_set_always_denies() {
    let policy = RolePolicy::permitting(Vec::<String>::new());
    assert!(!policy.evaluate(&session(true, &["admin"])).is_granted());
}

#[test]
fn role_policy_matching_is_case_sensitive() {
    let policy = RolePolicy::permitting(["admin"]);
    assert!(!policy.evaluate(&session(true, &["Admin"])).is_granted());
}

#[test]
fn role_policy_ignores_token_presence() {
    let policy = RolePolicy::permitting(["admin"]);
    assert!(policy.evaluate(&session(false, &["admin"])).is_granted());
}

#[test]
fn role_policy_uses_custom_fallback() {
    let policy = RolePolicy::new(["admin"], "/");
    assert_eq!(policy.evaluate(&session(true, &[])).redirect(), Some("/"));
}

#[test]
fn role_policy_over_malformed_session_denies() {
    let snapshot = SessionSnapshot::from_raw(Some("tok"), Some("not json at all"));
    assert!(!RolePolicy::permitting(["admin"]).evaluate(&snapshot).is_granted());
}

#[test]
fn role_policy_dedupes_permitted_names() {
    let policy = RolePolicy::permitting(["admin", "admin", "owner"]);
    assert_eq!(policy.permitted().len(), 2);
}

// =============================================================
// GuardPhase
// =============================================================

#[test]
fn guard_phase_starts_pending_and_renders_nothing() {
    let phase = GuardPhase::default();
    assert_eq!(phase, GuardPhase::Pending);
    assert!(!phase.renders_children());
}

#[test]
fn guard_phase_granted_renders_without_redirect() {
    let mut phase = GuardPhase::Pending;
    assert_eq!(phase.settle(GuardDecision::Granted), None);
    assert_eq!(phase, GuardPhase::Granted);
    assert!(phase.renders_children());
}

#[test]
fn guard_phase_denied_renders_nothing_and_redirects_once() {
    let mut phase = GuardPhase::Pending;
    let denial = || GuardDecision::Denied { redirect: "/login".to_owned() };

    assert_eq!(phase.settle(denial()), Some("/login".to_owned()));
    assert_eq!(phase, GuardPhase::Denied);
    assert!(!phase.renders_children());

    assert_eq!(phase.settle(denial()), None);
    assert_eq!(phase.settle(GuardDecision::Granted), None);
    assert_eq!(phase, GuardPhase::Denied);
}

#[test]
fn guard_phase_granted_ignores_later_denial() {
    let mut phase = GuardPhase::Pending;
    phase.settle(GuardDecision::Granted);
    assert_eq!(phase.settle(GuardDecision::Denied { redirect: "/login".to_owned() }), None);
    assert!(phase.renders_children());
}

#[test]
fn guard_over_empty_storage_hides_children_and_redirects_to_login() {
    use crate::config::StorageKeys;
    use crate::util::storage::MemoryStorage;

    let snapshot = SessionSnapshot::load(&MemoryStorage::default(), &StorageKeys::default());
    let mut phase = GuardPhase::Pending;

    let redirect = phase.settle(AuthPolicy::default().evaluate(&snapshot));

    assert_eq!(redirect.as_deref(), Some("/login"));
    assert!(!phase.renders_children());
}
