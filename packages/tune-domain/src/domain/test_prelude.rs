//! Shared settings for domain property tests.

use proptest::test_runner::Config;

/// Proptest config for domain properties.
///
/// Case count can be raised locally with `PROPTEST_CASES`.
pub fn proptest_config() -> Config {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(256);
    Config {
        cases,
        ..Config::default()
    }
}
