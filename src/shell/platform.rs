//! Platform detection.

/// Check if running in a CI environment.
///
/// Used to force non-interactive mode in `main()`.
/// Checks common CI environment variables: `CI`, `GITHUB_ACTIONS`,
/// `GITLAB_CI`, `CIRCLECI`, `TRAVIS`, `JENKINS_URL`.
pub fn is_ci() -> bool {
    is_ci_with_env(|key| std::env::var(key).is_ok())
}

/// CI detection against a custom env lookup.
pub fn is_ci_with_env<F>(has_var: F) -> bool
where
    F: Fn(&str) -> bool,
{
    ["CI", "GITHUB_ACTIONS", "GITLAB_CI", "CIRCLECI", "TRAVIS", "JENKINS_URL"]
        .iter()
        .any(|key| has_var(key))
}
