use super::*;

#[test]
fn client_config_defaults() {
    let cfg = ClientConfig::default();
    assert_eq!(cfg.check_failure, CheckFailurePolicy::StayUnauthenticated);
    assert_eq!(cfg.login_path, "/login");
    assert_eq!(cfg.workspace_path, "/annotator");
    assert_eq!(cfg.media_url, DEFAULT_MEDIA_URL);
}

#[test]
fn stay_and_redirect_policies_never_retry() {
    assert_eq!(CheckFailurePolicy::StayUnauthenticated.after_failure(1, true), FailureStep::GiveUp);
    assert_eq!(CheckFailurePolicy::RedirectToLogin.after_failure(1, true), FailureStep::GiveUp);
}

#[test]
fn retry_policy_retries_until_budget_spent() {
    let policy = CheckFailurePolicy::Retry { max_attempts: 3, delay_ms: 250 };
    assert_eq!(policy.after_failure(1, true), FailureStep::RetryAfter { delay_ms: 250 });
    assert_eq!(policy.after_failure(2, true), FailureStep::RetryAfter { delay_ms: 250 });
    assert_eq!(policy.after_failure(3, true), FailureStep::GiveUp);
}

#[test]
fn retry_policy_skips_non_retryable_errors() {
    let policy = CheckFailurePolicy::Retry { max_attempts: 3, delay_ms: 250 };
    assert_eq!(policy.after_failure(1, false), FailureStep::GiveUp);
}

#[test]
fn only_redirect_policy_redirects() {
    assert!(CheckFailurePolicy::RedirectToLogin.redirects_to_login());
    assert!(!CheckFailurePolicy::StayUnauthenticated.redirects_to_login());
    assert!(!CheckFailurePolicy::Retry { max_attempts: 2, delay_ms: 0 }.redirects_to_login());
}
